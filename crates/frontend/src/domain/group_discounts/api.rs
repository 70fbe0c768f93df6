//! Group discounts have no standalone list or item GET; rows are always
//! fetched for one group, so the generic gateway does not apply. Writes
//! invalidate exactly the group's cache slot.

use contracts::pricing::{GroupDiscount, GroupDiscountDto};
use contracts::EntityId;

use crate::shared::crud::{execute_delete, ResourceRoute};
use crate::shared::http::{ApiClient, ApiError};

pub const ROUTE: ResourceRoute = ResourceRoute::new("group-discounts", "/api/group-discount");

/// All discounts of one group, as a flat array.
pub async fn list_by_group(
    api: &ApiClient,
    group_id: EntityId,
) -> Result<Vec<GroupDiscount>, ApiError> {
    api.get_json(&ROUTE.child_item("by-group", group_id)).await
}

pub async fn create(api: &ApiClient, dto: &GroupDiscountDto) -> Result<GroupDiscount, ApiError> {
    let created = api.post_json(&ROUTE.collection(), dto).await?;
    api.invalidate_options(ROUTE.name, Some(dto.group_id));
    Ok(created)
}

pub async fn update(
    api: &ApiClient,
    id: EntityId,
    dto: &GroupDiscountDto,
) -> Result<GroupDiscount, ApiError> {
    let updated = api.put_json(&ROUTE.item(id), dto).await?;
    api.invalidate_options(ROUTE.name, Some(dto.group_id));
    Ok(updated)
}

/// The caller passes the owning group so the right cache slot is dropped;
/// the delete response body carries nothing to recover it from.
pub async fn delete(api: &ApiClient, id: EntityId, group_id: EntityId) -> Result<(), ApiError> {
    execute_delete(api, &ROUTE, id).await?;
    api.invalidate_options(ROUTE.name, Some(group_id));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::Verb;

    #[test]
    fn rows_are_read_per_group() {
        assert_eq!(
            ROUTE.child_item("by-group", 3),
            "/api/group-discount/by-group/3"
        );
    }

    #[test]
    fn delete_stays_on_the_rest_verb() {
        assert_eq!(
            ROUTE.delete_plan(8),
            (Verb::Delete, "/api/group-discount/8".to_string())
        );
    }
}
