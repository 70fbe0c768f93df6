use contracts::catalog::Brand;
use contracts::EntityId;
use web_sys::FormData;

use crate::shared::crud::{CrudGateway, MultipartOnly, ResourceRoute};
use crate::shared::http::{ApiClient, ApiError};

pub const ROUTE: ResourceRoute = ResourceRoute::new("brands", "/api/brand");

/// List/get/delete for brands. Writes carry the logo file, so they go
/// through the multipart functions below instead of JSON methods.
pub fn gateway(api: &ApiClient) -> CrudGateway<'_, Brand, MultipartOnly> {
    CrudGateway::new(api, &ROUTE)
}

/// Create a brand from a caller-built multipart form (scalar fields plus the
/// logo). The body is forwarded untouched.
pub async fn create_with_logo(api: &ApiClient, form: FormData) -> Result<Brand, ApiError> {
    let created = api.post_form(&ROUTE.collection(), form).await?;
    api.invalidate_options(ROUTE.name, None);
    Ok(created)
}

pub async fn update_with_logo(
    api: &ApiClient,
    id: EntityId,
    form: FormData,
) -> Result<Brand, ApiError> {
    let updated = api.put_form(&ROUTE.item(id), form).await?;
    api.invalidate_options(ROUTE.name, None);
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::Verb;

    #[test]
    fn brand_routes_follow_the_standard_shape() {
        assert_eq!(ROUTE.collection(), "/api/brand");
        assert_eq!(ROUTE.item(3), "/api/brand/3");
        assert_eq!(
            ROUTE.delete_plan(3),
            (Verb::Delete, "/api/brand/3".to_string())
        );
    }
}
