use contracts::people::Staff;
use contracts::EntityId;
use web_sys::FormData;

use crate::shared::crud::{CrudGateway, MultipartOnly, ResourceRoute};
use crate::shared::http::{ApiClient, ApiError};

pub const ROUTE: ResourceRoute = ResourceRoute::new("staff", "/api/staff");

/// Staff writes carry a profile photo, so create and update go through the
/// multipart functions below.
pub fn gateway(api: &ApiClient) -> CrudGateway<'_, Staff, MultipartOnly> {
    CrudGateway::new(api, &ROUTE)
}

pub async fn create_with_profile(api: &ApiClient, form: FormData) -> Result<Staff, ApiError> {
    let created = api.post_form(&ROUTE.collection(), form).await?;
    api.invalidate_options(ROUTE.name, None);
    Ok(created)
}

pub async fn update_with_profile(
    api: &ApiClient,
    id: EntityId,
    form: FormData,
) -> Result<Staff, ApiError> {
    let updated = api.put_form(&ROUTE.item(id), form).await?;
    api.invalidate_options(ROUTE.name, None);
    Ok(updated)
}

/// Activate a staff account that was created in the pending state.
pub async fn approve(api: &ApiClient, id: EntityId) -> Result<(), ApiError> {
    api.post_unit(&ROUTE.child_item("approve", id)).await?;
    api.invalidate_options(ROUTE.name, None);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::ListQuery;

    #[test]
    fn staff_paths() {
        assert_eq!(ROUTE.collection(), "/api/staff");
        assert_eq!(ROUTE.item(6), "/api/staff/6");
        assert_eq!(ROUTE.list(&ListQuery::page(2)), "/api/staff?page=2");
        assert_eq!(ROUTE.child_item("approve", 6), "/api/staff/approve/6");
    }
}
