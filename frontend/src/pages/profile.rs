use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::icons::{icon_edit, icon_plus, icon_x};
use crate::components::{bind, error_text, event_value, page_shell, spinner, INPUT_CLASS, PRIMARY_BUTTON};
use crate::config::{save_settings, AppSettings, CURRENCIES};
use crate::error::ValidationError;
use crate::models::{BankAccount, Profile};
use crate::notify::use_notifier;
use crate::store::{use_query, use_store, Entity, QueryState};

const CARD: &str = "bg-[#280832] rounded-xl p-6 shadow-lg space-y-4";
const ADD_LINK: &str = "flex items-center gap-1 text-[#20D982] hover:text-[#1aaf6a]";
const SMALL_BUTTON: &str = "px-3 py-1 bg-[#20D982]/10 text-[#20D982] rounded-lg hover:bg-[#20D982] hover:text-black";

pub fn new_bank_account(name: &str, account_number: &str) -> Result<BankAccount, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingField("Bank name"));
    }
    let account_number = account_number.trim();
    if account_number.is_empty() {
        return Err(ValidationError::MissingField("Account number"));
    }
    Ok(BankAccount {
        name: name.to_string(),
        account_number: account_number.to_string(),
    })
}

/// Appends `name` unless it is blank or already present (ignoring case).
pub fn add_category(categories: &mut Vec<String>, name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() || categories.iter().any(|c| c.eq_ignore_ascii_case(name)) {
        return false;
    }
    categories.push(name.to_string());
    true
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let notifier = use_notifier();
    let store = use_store();
    let settings = use_context::<UseStateHandle<AppSettings>>();
    let profile = use_query(Entity::Profile, (), |api, ()| async move { api.profile().await });

    // Some while editing; the server copy is untouched until saved.
    let draft = use_state(|| None::<Profile>);
    let show_bank_form = use_state(|| false);
    let show_category_form = use_state(|| false);
    let bank_name = use_state(String::new);
    let bank_number = use_state(String::new);
    let category = use_state(String::new);
    let saving = use_state(|| false);

    let toggle_edit = {
        let draft = draft.clone();
        let show_bank_form = show_bank_form.clone();
        let show_category_form = show_category_form.clone();
        let current = profile.data().cloned();
        Callback::from(move |_: MouseEvent| {
            if draft.is_some() {
                draft.set(None);
                show_bank_form.set(false);
                show_category_form.set(false);
            } else {
                draft.set(Some(current.clone().unwrap_or_default()));
            }
        })
    };

    let field = |update: fn(&mut Profile, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(mut next) = (*draft).clone() {
                update(&mut next, event_value(&e));
                draft.set(Some(next));
            }
        })
    };

    let on_add_bank = {
        let draft = draft.clone();
        let bank_name = bank_name.clone();
        let bank_number = bank_number.clone();
        let show_bank_form = show_bank_form.clone();
        let notifier = notifier.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(mut next) = (*draft).clone() else {
                return;
            };
            match new_bank_account(&bank_name, &bank_number) {
                Ok(account) => {
                    next.bank_accounts.push(account);
                    draft.set(Some(next));
                    bank_name.set(String::new());
                    bank_number.set(String::new());
                    show_bank_form.set(false);
                }
                Err(err) => notifier.error(err.to_string()),
            }
        })
    };

    let remove_bank = |index: usize| {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(mut next) = (*draft).clone() {
                if index < next.bank_accounts.len() {
                    next.bank_accounts.remove(index);
                    draft.set(Some(next));
                }
            }
        })
    };

    let on_add_category = {
        let draft = draft.clone();
        let category = category.clone();
        let show_category_form = show_category_form.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(mut next) = (*draft).clone() else {
                return;
            };
            if add_category(&mut next.custom_categories, &category) {
                draft.set(Some(next));
                category.set(String::new());
                show_category_form.set(false);
            }
        })
    };

    let remove_category = |index: usize| {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(mut next) = (*draft).clone() {
                if index < next.custom_categories.len() {
                    next.custom_categories.remove(index);
                    draft.set(Some(next));
                }
            }
        })
    };

    let on_currency = {
        let settings = settings.clone();
        Callback::from(move |e: Event| {
            if let Some(settings) = settings.as_ref() {
                let next = AppSettings::with_currency(&event_value(&e));
                save_settings(&next);
                settings.set(next);
            }
        })
    };

    let on_save = {
        let draft = draft.clone();
        let saving = saving.clone();
        let show_bank_form = show_bank_form.clone();
        let show_category_form = show_category_form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(body) = (*draft).clone() else {
                return;
            };
            let draft = draft.clone();
            let saving = saving.clone();
            let show_bank_form = show_bank_form.clone();
            let show_category_form = show_category_form.clone();
            let notifier = notifier.clone();
            let store = store.clone();
            saving.set(true);
            spawn_local(async move {
                match ApiClient::default().update_profile(&body).await {
                    Ok(()) => {
                        log::info!("profile saved");
                        draft.set(None);
                        show_bank_form.set(false);
                        show_category_form.set(false);
                        notifier.success("Profile updated");
                        store.invalidate(Entity::Profile);
                    }
                    Err(err) => {
                        log::error!("saving profile failed: {}", err);
                        notifier.error(err.user_message());
                    }
                }
                saving.set(false);
            });
        })
    };

    let shown = match (&*draft, &*profile) {
        (Some(editing), _) => editing.clone(),
        (None, QueryState::Ready(current)) => current.clone(),
        (None, QueryState::Loading) => return page_shell("Profile Settings", html! {}, spinner()),
        (None, QueryState::Failed(message)) => {
            return page_shell("Profile Settings", html! {}, error_text(message))
        }
    };
    let editing = draft.is_some();
    let currency = settings
        .as_ref()
        .map(|s| s.currency_code.clone())
        .unwrap_or_else(|| AppSettings::default().currency_code);

    let actions = html! {
        <button class={PRIMARY_BUTTON} onclick={toggle_edit}>
            { icon_edit() }<span>{ if editing { "Cancel" } else { "Edit" } }</span>
        </button>
    };

    let personal = html! {
        <div class={CARD}>
            <h3 class="text-lg font-medium text-white">{"Personal Information"}</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div>
                    <label class="block text-gray-400 mb-1">{"Name"}</label>
                    <input type="text" class={INPUT_CLASS} disabled={!editing} value={shown.name.clone()}
                        oninput={field(|p, v| p.name = v)} />
                </div>
                <div>
                    <label class="block text-gray-400 mb-1">{"Email"}</label>
                    <input type="email" class={INPUT_CLASS} disabled={!editing} value={shown.email.clone()}
                        oninput={field(|p, v| p.email = v)} />
                </div>
                <div>
                    <label class="block text-gray-400 mb-1">{"Phone"}</label>
                    <input type="tel" class={INPUT_CLASS} disabled={!editing} value={shown.phone.clone()}
                        oninput={field(|p, v| p.phone = v)} />
                </div>
                <div>
                    <label class="block text-gray-400 mb-1">{"Address"}</label>
                    <input type="text" class={INPUT_CLASS} disabled={!editing} value={shown.address.clone()}
                        oninput={field(|p, v| p.address = v)} />
                </div>
            </div>
        </div>
    };

    let banks = html! {
        <div class={CARD}>
            <div class="flex justify-between items-center">
                <h3 class="text-lg font-medium text-white">{"Bank Accounts"}</h3>
                if editing {
                    <button type="button" class={ADD_LINK} onclick={{
                        let show_bank_form = show_bank_form.clone();
                        Callback::from(move |_| show_bank_form.set(true))
                    }}>
                        { icon_plus() }<span>{"Add Bank"}</span>
                    </button>
                }
            </div>
            if shown.bank_accounts.is_empty() {
                <p class="text-gray-400 text-sm">{"No bank accounts added."}</p>
            }
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                { for shown.bank_accounts.iter().enumerate().map(|(index, bank)| html! {
                    <div class="flex justify-between items-center p-3 bg-black/20 rounded-lg">
                        <div>
                            <p class="text-white">{ bank.name.clone() }</p>
                            <p class="text-gray-400 text-sm">{ bank.masked_number() }</p>
                        </div>
                        if editing {
                            <button type="button" class="text-red-400 hover:text-red-500" onclick={remove_bank(index)}>
                                { icon_x() }
                            </button>
                        }
                    </div>
                }) }
            </div>
            if editing && *show_bank_form {
                <div class="space-y-3 p-4 bg-black/20 rounded-lg">
                    <div>
                        <label class="block text-gray-400 mb-1">{"Bank Name"}</label>
                        <input type="text" class={INPUT_CLASS} value={(*bank_name).clone()} oninput={bind(&bank_name)} />
                    </div>
                    <div>
                        <label class="block text-gray-400 mb-1">{"Account Number"}</label>
                        <input type="text" class={INPUT_CLASS} value={(*bank_number).clone()} oninput={bind(&bank_number)} />
                    </div>
                    <div class="flex justify-end gap-2">
                        <button type="button" class="px-3 py-1 text-gray-400 hover:text-gray-300" onclick={{
                            let show_bank_form = show_bank_form.clone();
                            Callback::from(move |_| show_bank_form.set(false))
                        }}>{"Cancel"}</button>
                        <button type="button" class={SMALL_BUTTON} onclick={on_add_bank}>{"Add"}</button>
                    </div>
                </div>
            }
        </div>
    };

    let categories = html! {
        <div class={CARD}>
            <div class="flex justify-between items-center">
                <h3 class="text-lg font-medium text-white">{"Custom Categories"}</h3>
                if editing {
                    <button type="button" class={ADD_LINK} onclick={{
                        let show_category_form = show_category_form.clone();
                        Callback::from(move |_| show_category_form.set(true))
                    }}>
                        { icon_plus() }<span>{"Add Category"}</span>
                    </button>
                }
            </div>
            <div class="flex flex-wrap gap-2">
                { for shown.custom_categories.iter().enumerate().map(|(index, name)| html! {
                    <div class="flex items-center gap-2 px-3 py-1 bg-black/20 rounded-full">
                        <span class="text-white">{ name.clone() }</span>
                        if editing {
                            <button type="button" class="text-red-400 hover:text-red-500" onclick={remove_category(index)}>
                                { icon_x() }
                            </button>
                        }
                    </div>
                }) }
            </div>
            if editing && *show_category_form {
                <div class="flex items-center gap-2">
                    <input type="text" placeholder="Enter category name" class={INPUT_CLASS}
                        value={(*category).clone()} oninput={bind(&category)} />
                    <button type="button" class="px-3 py-2 text-gray-400 hover:text-gray-300" onclick={{
                        let show_category_form = show_category_form.clone();
                        Callback::from(move |_| show_category_form.set(false))
                    }}>{"Cancel"}</button>
                    <button type="button" class={SMALL_BUTTON} onclick={on_add_category}>{"Add"}</button>
                </div>
            }
        </div>
    };

    let preferences = html! {
        <div class={CARD}>
            <h3 class="text-lg font-medium text-white">{"Preferences"}</h3>
            <div>
                <label class="block text-gray-400 mb-1">{"Currency"}</label>
                <select class={INPUT_CLASS} onchange={on_currency}>
                    { for CURRENCIES.iter().map(|(code, label)| html! {
                        <option value={*code} selected={currency == *code}>{ *label }</option>
                    }) }
                </select>
                <p class="text-xs text-gray-400 mt-2">{"Currency updates are applied across the dashboard and reports."}</p>
            </div>
        </div>
    };

    page_shell(
        "Profile Settings",
        actions,
        html! {
            <form class="space-y-6" onsubmit={on_save}>
                { personal }
                { banks }
                { categories }
                { preferences }
                if editing {
                    <div class="flex justify-end">
                        <button type="submit" disabled={*saving}
                            class="px-6 py-2 bg-[#20D982] text-black rounded-lg hover:bg-[#1aaf6a] transition-colors disabled:opacity-50">
                            { if *saving { "Saving..." } else { "Save Changes" } }
                        </button>
                    </div>
                }
            </form>
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_and_blank_categories_are_rejected() {
        let mut categories = vec!["Food".to_string()];
        assert!(!add_category(&mut categories, "  "));
        assert!(!add_category(&mut categories, "food"));
        assert!(add_category(&mut categories, " Travel "));
        assert_eq!(categories, vec!["Food".to_string(), "Travel".to_string()]);
    }

    #[test]
    fn bank_account_needs_both_fields() {
        assert_eq!(
            new_bank_account("HDFC", " "),
            Err(ValidationError::MissingField("Account number"))
        );
        let account = new_bank_account(" HDFC ", "1234567890").unwrap();
        assert_eq!(account.name, "HDFC");
        assert_eq!(account.masked_number(), "****7890");
    }
}
