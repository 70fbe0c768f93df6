use leptos::prelude::*;

use crate::shared::options::{OptionPair, OptionValue};

/// Select bound to an option list. The first row is a placeholder; choosing
/// it emits `None`.
#[component]
pub fn OptionSelect(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Currently selected value
    #[prop(into)]
    value: Signal<Option<OptionValue>>,
    /// Change event handler
    #[prop(into)]
    on_change: Callback<Option<OptionValue>>,
    /// Options as the hooks hand them out
    #[prop(into)]
    options: Signal<Vec<OptionPair>>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Placeholder row text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let placeholder_text = move || placeholder.get().unwrap_or_else(|| "Select...".to_string());

    let handle_change = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        if raw.is_empty() {
            on_change.run(None);
            return;
        }
        let selected = options
            .get_untracked()
            .into_iter()
            .find(|option| option.value.as_attr() == raw)
            .map(|option| option.value);
        on_change.run(selected);
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <select
                class="form__select"
                disabled=move || disabled.get().unwrap_or(false)
                on:change=handle_change
            >
                <option value="">{placeholder_text}</option>
                <For
                    each=move || options.get()
                    key=|option| option.value.clone()
                    children=move |option: OptionPair| {
                        let attr = option.value.as_attr();
                        let this = option.value.clone();
                        let is_selected = move || value.get().as_ref() == Some(&this);
                        view! {
                            <option value=attr selected=is_selected>
                                {option.label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
