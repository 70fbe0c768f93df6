use contracts::catalog::{Category, CategoryDto};

use crate::shared::crud::{CrudGateway, ResourceRoute};
use crate::shared::http::ApiClient;

pub const ROUTE: ResourceRoute = ResourceRoute::new("categories", "/api/category");

/// Typed access to the category endpoints.
pub fn gateway(api: &ApiClient) -> CrudGateway<'_, Category, CategoryDto> {
    CrudGateway::new(api, &ROUTE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::ListQuery;
    use crate::shared::http::Verb;

    #[test]
    fn delete_maps_to_one_rest_call() {
        assert_eq!(
            ROUTE.delete_plan(7),
            (Verb::Delete, "/api/category/7".to_string())
        );
    }

    #[test]
    fn collection_and_item_paths() {
        assert_eq!(ROUTE.collection(), "/api/category");
        assert_eq!(ROUTE.item(12), "/api/category/12");
        assert_eq!(ROUTE.list(&ListQuery::page(3)), "/api/category?page=3");
    }
}
