pub mod budget;
pub mod dashboard;
pub mod errors;
pub mod goals;
pub mod groups;
pub mod home;
pub mod landing;
pub mod legal;
pub mod profile;
pub mod reports;
pub mod transaction_form;
pub mod transaction_list;

use yew::prelude::*;

use crate::config::AppSettings;

/// Symbol of the user's chosen currency, falling back to the default.
#[hook]
pub fn use_currency_symbol() -> String {
    let settings = use_context::<UseStateHandle<AppSettings>>();
    settings
        .as_ref()
        .map(|s| s.currency_symbol.clone())
        .unwrap_or_else(|| AppSettings::default().currency_symbol)
}
