use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::http::ApiClient;
use crate::shared::query_cache::QueryCacheHandle;
use crate::system::auth::Session;

#[component]
pub fn App() -> impl IntoView {
    // Restore the session from storage before anything renders, then provide
    // the three context singletons: session, option cache, request pipeline.
    let session = Session::restore();
    let cache = QueryCacheHandle::new();
    provide_context(session);
    provide_context(cache);
    provide_context(ApiClient::new(session, cache));

    view! {
        <AppRoutes />
    }
}
