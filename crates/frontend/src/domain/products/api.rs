use contracts::catalog::Product;
use contracts::EntityId;
use web_sys::FormData;

use crate::shared::crud::{CrudGateway, MultipartOnly, ResourceRoute};
use crate::shared::http::{ApiClient, ApiError};

/// Product deletion is a POST to `/api/product/delete/{id}`; the backend
/// rejects the DELETE verb on this resource.
pub const ROUTE: ResourceRoute = ResourceRoute::with_post_delete("products", "/api/product");

pub fn gateway(api: &ApiClient) -> CrudGateway<'_, Product, MultipartOnly> {
    CrudGateway::new(api, &ROUTE)
}

/// Create a product from a caller-built multipart form. Image files ride
/// along with the scalar fields; the body is forwarded untouched.
pub async fn create_with_images(api: &ApiClient, form: FormData) -> Result<Product, ApiError> {
    let created = api.post_form(&ROUTE.collection(), form).await?;
    api.invalidate_options(ROUTE.name, None);
    Ok(created)
}

pub async fn update_with_images(
    api: &ApiClient,
    id: EntityId,
    form: FormData,
) -> Result<Product, ApiError> {
    let updated = api.put_form(&ROUTE.item(id), form).await?;
    api.invalidate_options(ROUTE.name, None);
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::Verb;

    #[test]
    fn product_delete_goes_through_the_post_route() {
        assert_eq!(
            ROUTE.delete_plan(9),
            (Verb::Post, "/api/product/delete/9".to_string())
        );
    }

    #[test]
    fn product_paths() {
        use crate::shared::crud::ListQuery;

        assert_eq!(ROUTE.collection(), "/api/product");
        assert_eq!(ROUTE.item(12), "/api/product/12");
        assert_eq!(ROUTE.list(&ListQuery::page(2)), "/api/product?page=2");
    }
}
