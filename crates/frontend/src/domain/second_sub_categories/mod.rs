pub mod api;

use contracts::catalog::SecondSubCategory;
use leptos::prelude::*;

use crate::shared::http::use_api;
use crate::shared::options::{
    project_options, use_dependent_options, OptionItem, OptionValue, OptionsHandle,
};
use crate::shared::query_cache::DependencyKey;

impl OptionItem for SecondSubCategory {
    fn option_label(&self) -> String {
        self.name.clone()
    }

    fn option_value(&self) -> OptionValue {
        OptionValue::Num(self.id)
    }
}

/// Options for the third classification level, keyed by the chosen
/// sub-category.
pub fn use_second_sub_category_options(
    sub_category: Signal<Option<DependencyKey>>,
) -> OptionsHandle {
    let api = use_api();
    use_dependent_options(api::ROUTE.name, sub_category, move |sub_category_id| {
        let api = api.clone();
        async move {
            let page = api::list_by_sub_category(&api, sub_category_id).await?;
            Ok(project_options(&page.items))
        }
    })
}
