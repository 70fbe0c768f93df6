use leptos::prelude::*;

use super::context::use_session;

/// Wraps content that requires a signed-in session. An empty session is
/// treated exactly like an explicit logout: the user leaves for the login
/// route with the interrupted location in the `redirect` parameter.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    Effect::new(move |_| {
        if !session.is_authenticated() {
            session.logout();
        }
    });

    view! {
        <Show when=move || session.is_authenticated() fallback=|| ()>
            {children()}
        </Show>
    }
}

/// Wraps content reserved for administrators.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let is_admin = move || {
        session
            .user()
            .with(|user| user.as_ref().map(|u| u.role.is_admin()).unwrap_or(false))
    };

    view! {
        <Show
            when=is_admin
            fallback=|| view! { <div class="guard-notice">"Administrator access required."</div> }
        >
            {children()}
        </Show>
    }
}
