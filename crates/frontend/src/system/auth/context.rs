use contracts::system::auth::{LoginRequest, UserRecord};
use leptos::prelude::*;

use super::{api, redirect, storage};
use crate::shared::http::{ApiClient, ApiError};

/// Authentication state for the whole app. Created once at startup, provided
/// through context and handed to everything that issues requests; there are
/// no module-level globals, so tests can stand up their own instance.
#[derive(Clone, Copy)]
pub struct Session {
    user: RwSignal<Option<UserRecord>>,
}

impl Session {
    /// Restore from durable storage, synchronously. Malformed or
    /// half-present credentials leave the session signed out.
    pub fn restore() -> Self {
        let user = storage::load_credentials();
        if let Some(user) = &user {
            log::info!("Session restored for {}", user.email);
        }
        Self {
            user: RwSignal::new(user),
        }
    }

    pub fn user(&self) -> Signal<Option<UserRecord>> {
        self.user.into()
    }

    /// Reactive when read from a tracking scope.
    pub fn is_authenticated(&self) -> bool {
        self.user.with(|user| user.is_some())
    }

    /// Token for the Authorization header, read from durable storage so a
    /// request built right after login sees the fresh credential.
    pub fn bearer_token(&self) -> Option<String> {
        storage::read_token()
    }

    /// Authenticate against the backend. On success the credential pair is
    /// persisted, the in-memory state updated, and one navigation performed:
    /// to the `redirect` target when the login URL carries one, to the root
    /// otherwise.
    pub async fn login(
        &self,
        api: &ApiClient,
        email: String,
        password: String,
    ) -> Result<(), ApiError> {
        let response = api::login(api, &LoginRequest { email, password }).await?;
        storage::save_credentials(&response.user);
        log::info!("Signed in as {}", response.user.email);
        self.user.set(Some(response.user));

        let destination = redirect::post_login_destination(&current_search());
        navigate_replace(&destination);
        Ok(())
    }

    /// Drop the credential pair and leave for the login route, remembering
    /// the interrupted location.
    pub fn logout(&self) {
        storage::clear_credentials();
        self.user.set(None);
        log::info!("Signed out");
        navigate_assign(&redirect::login_url(&current_path_and_query()));
    }

    /// 401 teardown: wipe all client storage, not just the credential pair,
    /// then leave for the login route the same way logout does.
    pub fn expire(&self) {
        storage::clear_all();
        self.user.set(None);
        log::warn!("Session expired, redirecting to login");
        navigate_assign(&redirect::login_url(&current_path_and_query()));
    }
}

/// Hook to access the session provided at the application root.
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not found in component tree")
}

fn current_path_and_query() -> String {
    let Some(window) = web_sys::window() else {
        return redirect::ROOT_PATH.to_string();
    };
    let location = window.location();
    let path = location
        .pathname()
        .unwrap_or_else(|_| redirect::ROOT_PATH.to_string());
    let search = location.search().unwrap_or_default();
    format!("{}{}", path, search)
}

fn current_search() -> String {
    match web_sys::window() {
        Some(window) => window.location().search().unwrap_or_default(),
        None => String::new(),
    }
}

/// Full navigation, dropping all in-memory state.
fn navigate_assign(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}

/// History replacement without a reload; used after login so the login URL
/// does not stay in the back stack.
fn navigate_replace(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ =
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
        }
    }
}
