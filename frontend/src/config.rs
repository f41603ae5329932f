use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "http://localhost:5000";
const SETTINGS_KEY: &str = "settings";

/// How long an edit failure stays on screen.
pub const EDIT_ERROR_MS: u32 = 1_000;
/// How long every other notification stays on screen.
pub const NOTICE_MS: u32 = 3_000;

/// Base URL of the MoneyMind API, fixed at build time through `API_URL`.
pub fn api_base_url() -> &'static str {
    match option_env!("API_URL") {
        Some(url) if !url.trim().is_empty() => url.trim_end_matches('/'),
        _ => DEFAULT_API_URL,
    }
}

/// OAuth client id for Google sign-in. The Google button is hidden when unset.
pub fn google_client_id() -> Option<&'static str> {
    option_env!("GOOGLE_CLIENT_ID").filter(|id| !id.trim().is_empty())
}

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub currency_code: String,
    pub currency_symbol: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            currency_code: "INR".to_string(),
            currency_symbol: "₹".to_string(),
        }
    }
}

impl AppSettings {
    pub fn with_currency(code: &str) -> Self {
        AppSettings {
            currency_code: code.to_string(),
            currency_symbol: currency_symbol_for(code).to_string(),
        }
    }
}

pub const CURRENCIES: [(&str, &str); 5] = [
    ("INR", "INR (₹)"),
    ("USD", "USD ($)"),
    ("EUR", "EUR (€)"),
    ("GBP", "GBP (£)"),
    ("JPY", "JPY (¥)"),
];

pub fn currency_symbol_for(code: &str) -> &'static str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        _ => "₹",
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_settings() -> AppSettings {
    let raw = match local_storage().and_then(|storage| storage.get_item(SETTINGS_KEY).ok().flatten()) {
        Some(raw) => raw,
        None => return AppSettings::default(),
    };
    match serde_json::from_str::<AppSettings>(&raw) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("ignoring unreadable settings: {}", err);
            AppSettings::default()
        }
    }
}

pub fn save_settings(settings: &AppSettings) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(settings) {
        Ok(raw) => {
            if storage.set_item(SETTINGS_KEY, &raw).is_err() {
                log::warn!("could not persist settings");
            }
        }
        Err(err) => log::error!("could not serialize settings: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_currency_falls_back_to_rupee() {
        assert_eq!(currency_symbol_for("XYZ"), "₹");
        assert_eq!(AppSettings::with_currency("GBP").currency_symbol, "£");
    }

    #[test]
    fn default_api_url_has_no_trailing_slash() {
        assert!(!api_base_url().ends_with('/'));
    }
}
