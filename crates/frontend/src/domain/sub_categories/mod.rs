pub mod api;

use contracts::catalog::SubCategory;
use leptos::prelude::*;

use crate::shared::http::use_api;
use crate::shared::options::{
    project_options, use_dependent_options, OptionItem, OptionValue, OptionsHandle,
};
use crate::shared::query_cache::DependencyKey;

impl OptionItem for SubCategory {
    fn option_label(&self) -> String {
        self.name.clone()
    }

    fn option_value(&self) -> OptionValue {
        OptionValue::Num(self.id)
    }
}

/// Options for the sub-category select, keyed by the chosen category. While
/// no category is chosen the options stay empty and nothing is fetched.
pub fn use_sub_category_options(category: Signal<Option<DependencyKey>>) -> OptionsHandle {
    let api = use_api();
    use_dependent_options(api::ROUTE.name, category, move |category_id| {
        let api = api.clone();
        async move {
            let page = api::list_by_category(&api, category_id).await?;
            Ok(project_options(&page.items))
        }
    })
}
