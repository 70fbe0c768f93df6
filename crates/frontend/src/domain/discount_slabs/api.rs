//! Quantity discount slabs, read per variant. Deletion is one of the two
//! legacy POST routes. Writes invalidate exactly the variant's cache slot.

use contracts::pricing::{DiscountSlab, DiscountSlabDto};
use contracts::EntityId;

use crate::shared::crud::{execute_delete, ResourceRoute};
use crate::shared::http::{ApiClient, ApiError};

pub const ROUTE: ResourceRoute =
    ResourceRoute::with_post_delete("discount-slabs", "/api/discount-slab");

/// All slabs of one variant, as a flat array.
pub async fn list_by_variant(
    api: &ApiClient,
    variant_id: EntityId,
) -> Result<Vec<DiscountSlab>, ApiError> {
    api.get_json(&ROUTE.child_item("by-variant", variant_id))
        .await
}

pub async fn create(api: &ApiClient, dto: &DiscountSlabDto) -> Result<DiscountSlab, ApiError> {
    let created = api.post_json(&ROUTE.collection(), dto).await?;
    api.invalidate_options(ROUTE.name, Some(dto.variant_id));
    Ok(created)
}

pub async fn update(
    api: &ApiClient,
    id: EntityId,
    dto: &DiscountSlabDto,
) -> Result<DiscountSlab, ApiError> {
    let updated = api.put_json(&ROUTE.item(id), dto).await?;
    api.invalidate_options(ROUTE.name, Some(dto.variant_id));
    Ok(updated)
}

/// The caller passes the owning variant so the right cache slot is dropped.
pub async fn delete(api: &ApiClient, id: EntityId, variant_id: EntityId) -> Result<(), ApiError> {
    execute_delete(api, &ROUTE, id).await?;
    api.invalidate_options(ROUTE.name, Some(variant_id));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::Verb;

    #[test]
    fn rows_are_read_per_variant() {
        assert_eq!(
            ROUTE.child_item("by-variant", 4),
            "/api/discount-slab/by-variant/4"
        );
    }

    #[test]
    fn slab_delete_goes_through_the_post_route() {
        assert_eq!(
            ROUTE.delete_plan(5),
            (Verb::Post, "/api/discount-slab/delete/5".to_string())
        );
    }
}
