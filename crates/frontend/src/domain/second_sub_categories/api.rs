use contracts::catalog::{SecondSubCategory, SecondSubCategoryDto, SubCategoryFilter};
use contracts::shared::Paged;
use contracts::EntityId;

use crate::shared::crud::{CrudGateway, CustomList, ResourceRoute};
use crate::shared::http::{ApiClient, ApiError};

pub const ROUTE: ResourceRoute =
    ResourceRoute::new("second-sub-categories", "/api/second-subcategory");

pub fn gateway(
    api: &ApiClient,
) -> CrudGateway<'_, SecondSubCategory, SecondSubCategoryDto, SecondSubCategoryDto, CustomList> {
    CrudGateway::new(api, &ROUTE)
}

/// Rows under one sub-category; POST read, same quirk as the level above.
pub async fn list_by_sub_category(
    api: &ApiClient,
    sub_category_id: EntityId,
) -> Result<Paged<SecondSubCategory>, ApiError> {
    api.post_json(
        &ROUTE.child("by-subcategory"),
        &SubCategoryFilter { sub_category_id },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtered_listing_posts_to_the_child_route() {
        assert_eq!(
            ROUTE.child("by-subcategory"),
            "/api/second-subcategory/by-subcategory"
        );
    }
}
