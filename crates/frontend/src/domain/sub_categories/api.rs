use contracts::catalog::{CategoryFilter, SubCategory, SubCategoryDto};
use contracts::shared::Paged;
use contracts::EntityId;

use crate::shared::crud::{CrudGateway, CustomList, ResourceRoute};
use crate::shared::http::{ApiClient, ApiError};

pub const ROUTE: ResourceRoute = ResourceRoute::new("sub-categories", "/api/subcategory");

/// Standard item operations. The listing is [`list_by_category`]; there is
/// no plain collection GET on this resource.
pub fn gateway(
    api: &ApiClient,
) -> CrudGateway<'_, SubCategory, SubCategoryDto, SubCategoryDto, CustomList> {
    CrudGateway::new(api, &ROUTE)
}

/// Rows under one category. The backend exposes this read as a POST with a
/// filter body; the shape is part of the fixed contract.
pub async fn list_by_category(
    api: &ApiClient,
    category_id: EntityId,
) -> Result<Paged<SubCategory>, ApiError> {
    api.post_json(&ROUTE.child("by-category"), &CategoryFilter { category_id })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::Verb;

    #[test]
    fn filtered_listing_posts_to_the_child_route() {
        assert_eq!(ROUTE.child("by-category"), "/api/subcategory/by-category");
    }

    #[test]
    fn writes_use_the_standard_shape() {
        assert_eq!(ROUTE.item(5), "/api/subcategory/5");
        assert_eq!(
            ROUTE.delete_plan(5),
            (Verb::Delete, "/api/subcategory/5".to_string())
        );
    }
}
