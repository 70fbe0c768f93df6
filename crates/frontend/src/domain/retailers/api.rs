use contracts::enums::ApprovalStatus;
use contracts::people::Retailer;
use contracts::shared::Paged;
use contracts::EntityId;
use web_sys::FormData;

use crate::shared::crud::{CrudGateway, ListQuery, MultipartOnly, ResourceRoute};
use crate::shared::http::{ApiClient, ApiError};

pub const ROUTE: ResourceRoute = ResourceRoute::new("retailers", "/api/retailer");

/// Retailers register themselves through the shop app, so there is no create
/// call here; the admin lists, inspects, edits, approves and deletes.
pub fn gateway(api: &ApiClient) -> CrudGateway<'_, Retailer, MultipartOnly> {
    CrudGateway::new(api, &ROUTE)
}

/// One page of retailers in the given approval state.
pub async fn list_by_status(
    api: &ApiClient,
    page: u32,
    status: ApprovalStatus,
) -> Result<Paged<Retailer>, ApiError> {
    let query = ListQuery::page(page).with_status(status);
    api.get_json(&ROUTE.list(&query)).await
}

/// Update a retailer from a caller-built multipart form (profile fields plus
/// the profile image). The body is forwarded untouched.
pub async fn update_with_profile(
    api: &ApiClient,
    id: EntityId,
    form: FormData,
) -> Result<Retailer, ApiError> {
    let updated = api.put_form(&ROUTE.item(id), form).await?;
    api.invalidate_options(ROUTE.name, None);
    Ok(updated)
}

/// Move a pending retailer to approved. The screens reload their lists
/// afterwards, so the response body is not kept.
pub async fn approve(api: &ApiClient, id: EntityId) -> Result<(), ApiError> {
    api.post_unit(&ROUTE.child_item("approve", id)).await?;
    api.invalidate_options(ROUTE.name, None);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_rides_the_query_string() {
        let query = ListQuery::page(1).with_status(ApprovalStatus::Pending);
        assert_eq!(ROUTE.list(&query), "/api/retailer?page=1&status=pending");
    }

    #[test]
    fn approval_is_a_child_route_with_the_id_last() {
        assert_eq!(ROUTE.child_item("approve", 7), "/api/retailer/approve/7");
    }
}
