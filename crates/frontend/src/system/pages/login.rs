use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::http::use_api;
use crate::system::auth::context::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let api = use_api();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (email_error, set_email_error) = signal(Option::<String>::None);
    let (password_error, set_password_error) = signal(Option::<String>::None);
    let (form_error, set_form_error) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // One attempt at a time; the button is disabled while in flight but
        // Enter still fires submit events.
        if is_submitting.get_untracked() {
            return;
        }

        set_email_error.set(None);
        set_password_error.set(None);
        set_form_error.set(None);

        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();

        let mut invalid = false;
        if email_val.is_empty() {
            set_email_error.set(Some("Email is required".to_string()));
            invalid = true;
        }
        if password_val.is_empty() {
            set_password_error.set(Some("Password is required".to_string()));
            invalid = true;
        }
        if invalid {
            return;
        }

        set_is_submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            match session.login(&api, email_val, password_val).await {
                Ok(()) => {
                    set_is_submitting.set(false);
                }
                Err(err) => {
                    match err.status() {
                        Some(404) => {
                            set_email_error
                                .set(Some("No account found for this email".to_string()));
                        }
                        Some(403) => {
                            set_password_error.set(Some("Incorrect password".to_string()));
                        }
                        _ => {
                            set_form_error.set(Some(err.to_string()));
                        }
                    }
                    set_is_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"TradeWare Admin"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || form_error.get().is_some()>
                    <div class="error-message">
                        {move || form_error.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="you@example.com"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_submitting.get()
                        />
                        <Show when=move || email_error.get().is_some()>
                            <span class="field-error">
                                {move || email_error.get().unwrap_or_default()}
                            </span>
                        </Show>
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_submitting.get()
                        />
                        <Show when=move || password_error.get().is_some()>
                            <span class="field-error">
                                {move || password_error.get().unwrap_or_default()}
                            </span>
                        </Show>
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_submitting.get()
                    >
                        {move || if is_submitting.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
