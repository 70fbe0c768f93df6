use contracts::pricing::{Group, GroupDto};

use crate::shared::crud::{CrudGateway, ResourceRoute};
use crate::shared::http::ApiClient;

pub const ROUTE: ResourceRoute = ResourceRoute::new("groups", "/api/group");

/// Typed access to the retailer-group endpoints.
pub fn gateway(api: &ApiClient) -> CrudGateway<'_, Group, GroupDto> {
    CrudGateway::new(api, &ROUTE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::Verb;

    #[test]
    fn group_routes_follow_the_standard_shape() {
        assert_eq!(ROUTE.collection(), "/api/group");
        assert_eq!(ROUTE.item(2), "/api/group/2");
        assert_eq!(
            ROUTE.delete_plan(2),
            (Verb::Delete, "/api/group/2".to_string())
        );
    }
}
