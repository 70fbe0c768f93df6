//! Generic CRUD gateway. One `ResourceRoute` per backend entity pins the
//! path template; `CrudGateway` turns it into typed calls so no screen ever
//! assembles a raw request. The backend's route quirks (POST deletes, POST
//! reads, multipart writes) are part of the fixed contract and are encoded
//! here or in the entity modules, never normalized away.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use contracts::enums::ApprovalStatus;
use contracts::shared::Paged;
use contracts::EntityId;

use crate::shared::http::{ApiClient, ApiError, Verb};

/// How a resource's delete endpoint is shaped. Two legacy routes use a POST
/// instead of a DELETE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStyle {
    Rest,
    PostDelete,
}

/// Fixed route template of one backend resource. `name` doubles as the
/// option-cache resource key.
#[derive(Debug, Clone, Copy)]
pub struct ResourceRoute {
    pub name: &'static str,
    pub base: &'static str,
    pub delete: DeleteStyle,
}

impl ResourceRoute {
    pub const fn new(name: &'static str, base: &'static str) -> Self {
        Self {
            name,
            base,
            delete: DeleteStyle::Rest,
        }
    }

    pub const fn with_post_delete(name: &'static str, base: &'static str) -> Self {
        Self {
            name,
            base,
            delete: DeleteStyle::PostDelete,
        }
    }

    pub fn collection(&self) -> String {
        self.base.to_string()
    }

    pub fn item(&self, id: EntityId) -> String {
        format!("{}/{}", self.base, id)
    }

    /// Child route under the base, e.g. `/api/subcategory/by-category`.
    pub fn child(&self, segment: &str) -> String {
        format!("{}/{}", self.base, segment)
    }

    /// Child route with a trailing id, e.g. `/api/retailer/approve/7`.
    pub fn child_item(&self, segment: &str, id: EntityId) -> String {
        format!("{}/{}/{}", self.base, segment, id)
    }

    /// Action on one item, e.g. `/api/variant/4/activate`.
    pub fn item_action(&self, id: EntityId, action: &str) -> String {
        format!("{}/{}/{}", self.base, id, action)
    }

    pub fn list(&self, query: &ListQuery) -> String {
        format!("{}{}", self.base, query.to_query_string())
    }

    /// Verb and path of the delete call for this route's style.
    pub fn delete_plan(&self, id: EntityId) -> (Verb, String) {
        match self.delete {
            DeleteStyle::Rest => (Verb::Delete, self.item(id)),
            DeleteStyle::PostDelete => (Verb::Post, self.child_item("delete", id)),
        }
    }
}

/// Paging and filter parameters for collection GETs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub search: Option<String>,
    pub status: Option<String>,
}

impl ListQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_status(mut self, status: ApprovalStatus) -> Self {
        self.status = Some(status.code().to_string());
        self
    }

    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        if let Some(page) = self.page {
            parts.push(format!("page={}", page));
        }
        if let Some(search) = &self.search {
            if !search.is_empty() {
                parts.push(format!("search={}", urlencoding::encode(search)));
            }
        }
        if let Some(status) = &self.status {
            parts.push(format!("status={}", urlencoding::encode(status)));
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!("?{}", parts.join("&"))
        }
    }
}

/// Write-payload marker for resources whose create/update bodies are
/// multipart form data. It rules the JSON write methods out at compile time,
/// leaving the entity module's form-data functions as the only write path.
#[derive(Debug)]
pub enum MultipartOnly {}

/// List marker: the resource has a standard paged collection GET.
#[derive(Debug)]
pub struct PagedList;

/// List marker: reads go through an entity-specific route instead of a
/// standard collection GET.
#[derive(Debug)]
pub struct CustomList;

/// Typed gateway over one resource's routes. `T` is the read model, `New`
/// and `Edit` the write payloads, `List` whether a standard collection GET
/// exists. Every method issues exactly one request.
pub struct CrudGateway<'a, T, New = T, Edit = New, List = PagedList> {
    api: &'a ApiClient,
    route: &'static ResourceRoute,
    _marker: PhantomData<(T, New, Edit, List)>,
}

impl<'a, T, New, Edit, List> CrudGateway<'a, T, New, Edit, List>
where
    T: DeserializeOwned,
{
    pub fn new(api: &'a ApiClient, route: &'static ResourceRoute) -> Self {
        Self {
            api,
            route,
            _marker: PhantomData,
        }
    }

    pub fn route(&self) -> &'static ResourceRoute {
        self.route
    }

    pub async fn get(&self, id: EntityId) -> Result<T, ApiError> {
        self.api.get_json(&self.route.item(id)).await
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), ApiError> {
        execute_delete(self.api, self.route, id).await?;
        self.api.invalidate_options(self.route.name, None);
        Ok(())
    }
}

impl<'a, T, New, Edit> CrudGateway<'a, T, New, Edit, PagedList>
where
    T: DeserializeOwned,
{
    pub async fn list(&self, query: &ListQuery) -> Result<Paged<T>, ApiError> {
        self.api.get_json(&self.route.list(query)).await
    }
}

impl<'a, T, New, Edit, List> CrudGateway<'a, T, New, Edit, List>
where
    T: DeserializeOwned,
    New: Serialize,
{
    pub async fn create(&self, payload: &New) -> Result<T, ApiError> {
        let created = self.api.post_json(&self.route.collection(), payload).await?;
        self.api.invalidate_options(self.route.name, None);
        Ok(created)
    }
}

impl<'a, T, New, Edit, List> CrudGateway<'a, T, New, Edit, List>
where
    T: DeserializeOwned,
    Edit: Serialize,
{
    pub async fn update(&self, id: EntityId, payload: &Edit) -> Result<T, ApiError> {
        let updated = self.api.put_json(&self.route.item(id), payload).await?;
        self.api.invalidate_options(self.route.name, None);
        Ok(updated)
    }
}

/// Run a route's delete plan, whichever verb it prescribes.
pub async fn execute_delete(
    api: &ApiClient,
    route: &ResourceRoute,
    id: EntityId,
) -> Result<(), ApiError> {
    let (verb, path) = route.delete_plan(id);
    match verb {
        Verb::Post => api.post_unit(&path).await,
        _ => api.delete(&path).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDGETS: ResourceRoute = ResourceRoute::new("widgets", "/api/widget");
    const LEGACY: ResourceRoute = ResourceRoute::with_post_delete("legacy", "/api/legacy");

    #[test]
    fn item_paths_append_the_id() {
        assert_eq!(WIDGETS.item(7), "/api/widget/7");
        assert_eq!(WIDGETS.child_item("approve", 9), "/api/widget/approve/9");
        assert_eq!(WIDGETS.item_action(4, "activate"), "/api/widget/4/activate");
    }

    #[test]
    fn delete_plans_follow_the_route_style() {
        assert_eq!(
            WIDGETS.delete_plan(7),
            (Verb::Delete, "/api/widget/7".to_string())
        );
        assert_eq!(
            LEGACY.delete_plan(7),
            (Verb::Post, "/api/legacy/delete/7".to_string())
        );
    }

    #[test]
    fn list_paths_carry_the_query() {
        assert_eq!(WIDGETS.list(&ListQuery::default()), "/api/widget");
        assert_eq!(WIDGETS.list(&ListQuery::page(2)), "/api/widget?page=2");
        let query = ListQuery::page(1).with_search("basmati rice");
        assert_eq!(
            WIDGETS.list(&query),
            "/api/widget?page=1&search=basmati%20rice"
        );
    }

    #[test]
    fn status_filter_uses_wire_codes() {
        let query = ListQuery::page(1).with_status(ApprovalStatus::Pending);
        assert_eq!(WIDGETS.list(&query), "/api/widget?page=1&status=pending");
    }

    #[test]
    fn empty_search_is_not_sent() {
        let query = ListQuery::default().with_search("");
        assert_eq!(query.to_query_string(), "");
    }
}
