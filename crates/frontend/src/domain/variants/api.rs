use contracts::catalog::{Variant, VariantDto};
use contracts::EntityId;

use crate::shared::crud::{CrudGateway, CustomList, ResourceRoute};
use crate::shared::http::{ApiClient, ApiError};

pub const ROUTE: ResourceRoute = ResourceRoute::new("variants", "/api/variant");

/// Variants are always read in the context of a product, so reads go through
/// [`list_by_product`] rather than a paged collection GET.
pub fn gateway(api: &ApiClient) -> CrudGateway<'_, Variant, VariantDto, VariantDto, CustomList> {
    CrudGateway::new(api, &ROUTE)
}

/// All variants of one product, as a flat array.
pub async fn list_by_product(
    api: &ApiClient,
    product_id: EntityId,
) -> Result<Vec<Variant>, ApiError> {
    api.get_json(&ROUTE.child_item("by-product", product_id))
        .await
}

pub async fn activate(api: &ApiClient, id: EntityId) -> Result<(), ApiError> {
    api.post_unit(&ROUTE.item_action(id, "activate")).await?;
    api.invalidate_options(ROUTE.name, None);
    Ok(())
}

pub async fn deactivate(api: &ApiClient, id: EntityId) -> Result<(), ApiError> {
    api.post_unit(&ROUTE.item_action(id, "deactivate")).await?;
    api.invalidate_options(ROUTE.name, None);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_reads_hang_off_the_product() {
        assert_eq!(
            ROUTE.child_item("by-product", 12),
            "/api/variant/by-product/12"
        );
    }

    #[test]
    fn activation_paths_put_the_action_after_the_id() {
        assert_eq!(ROUTE.item_action(4, "activate"), "/api/variant/4/activate");
        assert_eq!(
            ROUTE.item_action(4, "deactivate"),
            "/api/variant/4/deactivate"
        );
    }
}
