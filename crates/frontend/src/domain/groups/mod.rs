pub mod api;

use contracts::pricing::Group;
use leptos::prelude::*;

use crate::shared::crud::ListQuery;
use crate::shared::http::use_api;
use crate::shared::options::{
    project_options, use_option_list, OptionItem, OptionValue, OptionsHandle,
};

impl OptionItem for Group {
    fn option_label(&self) -> String {
        self.name.clone()
    }

    fn option_value(&self) -> OptionValue {
        OptionValue::Num(self.id)
    }
}

/// Options for the retailer-group select.
pub fn use_group_options() -> OptionsHandle {
    let api = use_api();
    use_option_list(api::ROUTE.name, move || {
        let api = api.clone();
        async move {
            let page = api::gateway(&api).list(&ListQuery::default()).await?;
            Ok(project_options(&page.items))
        }
    })
}
