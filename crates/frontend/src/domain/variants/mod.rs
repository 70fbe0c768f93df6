pub mod api;

use contracts::catalog::Variant;
use leptos::prelude::*;

use crate::shared::http::use_api;
use crate::shared::options::{
    project_options, use_dependent_options, OptionItem, OptionValue, OptionsHandle,
};
use crate::shared::query_cache::DependencyKey;

impl OptionItem for Variant {
    fn option_label(&self) -> String {
        self.name.clone()
    }

    fn option_value(&self) -> OptionValue {
        OptionValue::Num(self.id)
    }
}

/// Options for the variant select, keyed by the chosen product. Used by the
/// discount screens, which always pick a product first.
pub fn use_variant_options(product: Signal<Option<DependencyKey>>) -> OptionsHandle {
    let api = use_api();
    use_dependent_options(api::ROUTE.name, product, move |product_id| {
        let api = api.clone();
        async move {
            let variants = api::list_by_product(&api, product_id).await?;
            Ok(project_options(&variants))
        }
    })
}
