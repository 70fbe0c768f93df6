use leptos::prelude::*;

use crate::system::auth::use_session;

/// Frame around every authenticated screen: brand header, signed-in user and
/// the sign-out button.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let session = use_session();
    let user_name = move || {
        session
            .user()
            .get()
            .map(|user| user.name)
            .unwrap_or_default()
    };

    view! {
        <div class="app-shell">
            <header class="header">
                <div class="header__content">
                    <span class="header__title">"TradeWare Admin"</span>
                </div>
                <div class="header__actions">
                    <span class="header__user">{user_name}</span>
                    <button
                        class="button button--ghost"
                        on:click=move |_| session.logout()
                    >
                        "Sign out"
                    </button>
                </div>
            </header>
            <main class="app-shell__content">{children()}</main>
        </div>
    }
}
