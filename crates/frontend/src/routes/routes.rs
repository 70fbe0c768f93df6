use leptos::prelude::*;

use crate::dashboards::OverviewDashboard;
use crate::domain::products::ui::{ClassificationSelection, ProductClassification};
use crate::domain::settings::TaxSettingsCard;
use crate::layout::Shell;
use crate::system::auth::{redirect, use_session, RequireAdmin, RequireAuth};
use crate::system::pages::login::LoginPage;

#[component]
fn MainLayout() -> impl IntoView {
    let classification = RwSignal::new(ClassificationSelection::default());

    view! {
        <Shell>
            <RequireAuth>
                <OverviewDashboard />
                <div class="workspace">
                    <ProductClassification value=classification />
                    <RequireAdmin>
                        <TaxSettingsCard />
                    </RequireAdmin>
                </div>
            </RequireAuth>
        </Shell>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();

    // Landing here signed out anywhere but the login route is treated as a
    // logout, which rewrites the URL to /login with the interrupted location
    // in the redirect parameter. On the login route itself nothing moves.
    Effect::new(move |_| {
        if session.is_authenticated() {
            return;
        }
        let on_login = web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .map(|path| redirect::is_login_path(&path))
            .unwrap_or(true);
        if !on_login {
            session.logout();
        }
    });

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
