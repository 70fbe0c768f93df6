//! Classification block of the product form: category, sub-category, second
//! sub-category and brand. The three category levels cascade; changing a
//! parent clears everything below it so a product can never point at a child
//! of the wrong parent.

use leptos::prelude::*;

use contracts::EntityId;

use crate::domain::brands::use_brand_options;
use crate::domain::categories::use_category_options;
use crate::domain::second_sub_categories::use_second_sub_category_options;
use crate::domain::sub_categories::use_sub_category_options;
use crate::shared::components::select::OptionSelect;
use crate::shared::options::{OptionValue, OptionsHandle};

/// Classification ids picked so far. Lives in the product form's state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassificationSelection {
    pub category_id: Option<EntityId>,
    pub sub_category_id: Option<EntityId>,
    pub second_sub_category_id: Option<EntityId>,
    pub brand_id: Option<EntityId>,
}

impl ClassificationSelection {
    pub fn set_category(&mut self, id: Option<EntityId>) {
        self.category_id = id;
        self.sub_category_id = None;
        self.second_sub_category_id = None;
    }

    pub fn set_sub_category(&mut self, id: Option<EntityId>) {
        self.sub_category_id = id;
        self.second_sub_category_id = None;
    }

    pub fn set_second_sub_category(&mut self, id: Option<EntityId>) {
        self.second_sub_category_id = id;
    }

    pub fn set_brand(&mut self, id: Option<EntityId>) {
        self.brand_id = id;
    }
}

#[component]
pub fn ProductClassification(value: RwSignal<ClassificationSelection>) -> impl IntoView {
    let categories = use_category_options();
    let sub_categories =
        use_sub_category_options(Signal::derive(move || value.get().category_id));
    let second_sub_categories =
        use_second_sub_category_options(Signal::derive(move || value.get().sub_category_id));
    let brands = use_brand_options();

    let on_category = move |picked: Option<OptionValue>| {
        value.update(|selection| selection.set_category(picked.and_then(|v| v.as_num())));
    };
    let on_sub_category = move |picked: Option<OptionValue>| {
        value.update(|selection| selection.set_sub_category(picked.and_then(|v| v.as_num())));
    };
    let on_second_sub_category = move |picked: Option<OptionValue>| {
        value.update(|selection| {
            selection.set_second_sub_category(picked.and_then(|v| v.as_num()))
        });
    };
    let on_brand = move |picked: Option<OptionValue>| {
        value.update(|selection| selection.set_brand(picked.and_then(|v| v.as_num())));
    };

    view! {
        <div class="form-section">
            <h3 class="form-section__title">"Classification"</h3>
            <div class="form-grid">
                <OptionSelect
                    label="Category"
                    value=Signal::derive(move || value.get().category_id.map(OptionValue::Num))
                    on_change=on_category
                    options=categories.options
                />
                <OptionSelect
                    label="Sub-category"
                    value=Signal::derive(move || value.get().sub_category_id.map(OptionValue::Num))
                    on_change=on_sub_category
                    options=sub_categories.options
                    disabled=Signal::derive(move || value.get().category_id.is_none())
                />
                <OptionSelect
                    label="Second sub-category"
                    value=Signal::derive(move || {
                        value.get().second_sub_category_id.map(OptionValue::Num)
                    })
                    on_change=on_second_sub_category
                    options=second_sub_categories.options
                    disabled=Signal::derive(move || value.get().sub_category_id.is_none())
                />
                <OptionSelect
                    label="Brand"
                    value=Signal::derive(move || value.get().brand_id.map(OptionValue::Num))
                    on_change=on_brand
                    options=brands.options
                />
            </div>
            <LoadNotice label="categories" handle=categories />
            <LoadNotice label="sub-categories" handle=sub_categories />
            <LoadNotice label="second sub-categories" handle=second_sub_categories />
            <LoadNotice label="brands" handle=brands />
        </div>
    }
}

/// Error strip under the selects. Hidden unless the matching load failed.
#[component]
fn LoadNotice(label: &'static str, handle: OptionsHandle) -> impl IntoView {
    view! {
        <Show when=move || handle.is_error.get() fallback=|| ()>
            <div class="form-notice form-notice--error">
                <span>{format!("Failed to load {}.", label)}</span>
                <button
                    type="button"
                    class="btn-link"
                    on:click=move |_| handle.refetch.run(())
                >
                    "Retry"
                </button>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changing_the_category_clears_both_child_levels() {
        let mut selection = ClassificationSelection::default();
        selection.set_category(Some(1));
        selection.set_sub_category(Some(10));
        selection.set_second_sub_category(Some(100));
        selection.set_brand(Some(5));

        selection.set_category(Some(2));
        assert_eq!(selection.category_id, Some(2));
        assert_eq!(selection.sub_category_id, None);
        assert_eq!(selection.second_sub_category_id, None);
        assert_eq!(selection.brand_id, Some(5));
    }

    #[test]
    fn changing_the_sub_category_clears_only_the_second_level() {
        let mut selection = ClassificationSelection::default();
        selection.set_category(Some(1));
        selection.set_sub_category(Some(10));
        selection.set_second_sub_category(Some(100));

        selection.set_sub_category(Some(11));
        assert_eq!(selection.category_id, Some(1));
        assert_eq!(selection.sub_category_id, Some(11));
        assert_eq!(selection.second_sub_category_id, None);
    }

    #[test]
    fn clearing_the_category_empties_the_whole_cascade() {
        let mut selection = ClassificationSelection::default();
        selection.set_category(Some(1));
        selection.set_sub_category(Some(10));

        selection.set_category(None);
        assert_eq!(selection, ClassificationSelection::default());
    }
}
