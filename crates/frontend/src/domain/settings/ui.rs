use contracts::pricing::TaxSettings;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::settings::api;
use crate::shared::http::use_api;

/// Store-wide tax percentages. Admin only; the route guard keeps everyone
/// else out before this mounts.
#[component]
pub fn TaxSettingsCard() -> impl IntoView {
    let api_client = use_api();

    let (tax_percent, set_tax_percent) = signal(String::new());
    let (cess_percent, set_cess_percent) = signal(String::new());
    let (is_loading, set_is_loading) = signal(true);
    let (is_saving, set_is_saving) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (saved, set_saved) = signal(false);

    {
        let api_client = api_client.clone();
        Effect::new(move |_| {
            let api_client = api_client.clone();
            set_is_loading.set(true);
            spawn_local(async move {
                match api::tax(&api_client).await {
                    Ok(settings) => {
                        set_tax_percent.set(settings.tax_percent.to_string());
                        set_cess_percent.set(settings.cess_percent.to_string());
                    }
                    Err(err) => {
                        set_error.set(Some(err.to_string()));
                    }
                }
                set_is_loading.set(false);
            });
        });
    }

    let on_save = move |_| {
        if is_saving.get_untracked() {
            return;
        }
        set_error.set(None);
        set_saved.set(false);

        let parsed = tax_percent
            .get_untracked()
            .trim()
            .parse::<f64>()
            .and_then(|tax| {
                cess_percent
                    .get_untracked()
                    .trim()
                    .parse::<f64>()
                    .map(|cess| TaxSettings {
                        tax_percent: tax,
                        cess_percent: cess,
                    })
            });
        let settings = match parsed {
            Ok(settings) => settings,
            Err(_) => {
                set_error.set(Some("Percentages must be numbers".to_string()));
                return;
            }
        };
        if let Err(message) = settings.validate() {
            set_error.set(Some(message));
            return;
        }

        set_is_saving.set(true);
        let api_client = api_client.clone();
        spawn_local(async move {
            match api::update_tax(&api_client, &settings).await {
                Ok(stored) => {
                    set_tax_percent.set(stored.tax_percent.to_string());
                    set_cess_percent.set(stored.cess_percent.to_string());
                    set_saved.set(true);
                }
                Err(err) => {
                    set_error.set(Some(err.to_string()));
                }
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <div class="card settings-card">
            <h3>"Tax settings"</h3>
            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || saved.get()>
                <div class="success-message">"Saved."</div>
            </Show>
            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <p class="muted">"Loading..."</p> }
            >
                <div class="form-group">
                    <label for="tax-percent">"Tax %"</label>
                    <input
                        type="number"
                        id="tax-percent"
                        value=move || tax_percent.get()
                        on:input=move |ev| set_tax_percent.set(event_target_value(&ev))
                        disabled=move || is_saving.get()
                    />
                </div>
                <div class="form-group">
                    <label for="cess-percent">"Cess %"</label>
                    <input
                        type="number"
                        id="cess-percent"
                        value=move || cess_percent.get()
                        on:input=move |ev| set_cess_percent.set(event_target_value(&ev))
                        disabled=move || is_saving.get()
                    />
                </div>
                <button class="btn-primary" on:click=on_save.clone() disabled=move || is_saving.get()>
                    {move || if is_saving.get() { "Saving..." } else { "Save" }}
                </button>
            </Show>
        </div>
    }
}
