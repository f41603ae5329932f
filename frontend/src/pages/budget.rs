use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::aggregate::{budget_progress, BudgetProgress};
use crate::api::ApiClient;
use crate::components::icons::{icon_alert, icon_check_circle, icon_edit, icon_plus, icon_trash};
use crate::components::stat::{figure_row, progress_bar};
use crate::components::{bind, bind_change, error_text, modal, page_shell, spinner, INPUT_CLASS, PRIMARY_BUTTON};
use crate::error::ValidationError;
use crate::format::{format_currency, format_percent};
use crate::models::{Budget, BudgetInput, BudgetPeriod};
use crate::notify::use_notifier;
use crate::pages::use_currency_symbol;
use crate::store::{use_query, use_store, Entity, QueryState};

/// Which budget the modal is editing, if it is open.
#[derive(Clone, Debug, PartialEq)]
enum Editor {
    Closed,
    Adding,
    Editing(String),
}

pub fn budget_input(category: &str, amount: &str, period: &str) -> Result<BudgetInput, ValidationError> {
    let category = category.trim();
    if category.is_empty() {
        return Err(ValidationError::MissingField("Category"));
    }
    let amount_raw = amount.trim();
    if amount_raw.is_empty() {
        return Err(ValidationError::MissingField("Amount"));
    }
    let amount = amount_raw
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or_else(|| ValidationError::InvalidAmount(amount_raw.to_string()))?;
    Ok(BudgetInput {
        category: category.to_string(),
        amount,
        period: BudgetPeriod::parse(period),
    })
}

/// Text for the "Remaining" row. An overspent budget shows the excess.
pub fn remaining_label(progress: &BudgetProgress, symbol: &str) -> String {
    if progress.remaining < 0.0 {
        format!("{} overspent", format_currency(progress.remaining.abs(), symbol))
    } else {
        format_currency(progress.remaining, symbol)
    }
}

#[function_component(BudgetPage)]
pub fn budget_page() -> Html {
    let symbol = use_currency_symbol();
    let notifier = use_notifier();
    let store = use_store();
    let budgets = use_query(Entity::Budgets, (), |api, ()| async move { api.budgets().await });

    let editor = use_state(|| Editor::Closed);
    let category = use_state(String::new);
    let amount = use_state(String::new);
    let period = use_state(|| BudgetPeriod::Monthly.as_str().to_string());
    let form_error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let open_with = {
        let editor = editor.clone();
        let category = category.clone();
        let amount = amount.clone();
        let period = period.clone();
        let form_error = form_error.clone();
        move |target: Editor, budget: Option<Budget>| {
            let editor = editor.clone();
            let category = category.clone();
            let amount = amount.clone();
            let period = period.clone();
            let form_error = form_error.clone();
            Callback::from(move |_: MouseEvent| {
                match &budget {
                    Some(b) => {
                        category.set(b.category.clone());
                        amount.set(b.amount.to_string());
                        period.set(b.period.as_str().to_string());
                    }
                    None => {
                        category.set(String::new());
                        amount.set(String::new());
                        period.set(BudgetPeriod::Monthly.as_str().to_string());
                    }
                }
                form_error.set(None);
                editor.set(target.clone());
            })
        }
    };

    let close = {
        let editor = editor.clone();
        Callback::from(move |_: MouseEvent| editor.set(Editor::Closed))
    };

    let on_submit = {
        let editor = editor.clone();
        let category = category.clone();
        let amount = amount.clone();
        let period = period.clone();
        let form_error = form_error.clone();
        let saving = saving.clone();
        let notifier = notifier.clone();
        let store = store.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = match budget_input(&category, &amount, &period) {
                Ok(input) => input,
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                    return;
                }
            };
            let target = (*editor).clone();
            let editor = editor.clone();
            let form_error = form_error.clone();
            let saving = saving.clone();
            let notifier = notifier.clone();
            let store = store.clone();
            saving.set(true);
            spawn_local(async move {
                let api = ApiClient::default();
                let result = match &target {
                    Editor::Editing(id) => api.update_budget(id, &input).await.map(|_| "Budget updated"),
                    _ => api.create_budget(&input).await.map(|_| "Budget added"),
                };
                match result {
                    Ok(text) => {
                        editor.set(Editor::Closed);
                        notifier.success(text);
                        store.invalidate(Entity::Budgets);
                    }
                    Err(err) => {
                        log::error!("saving budget failed: {}", err);
                        form_error.set(Some(err.user_message()));
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_delete = {
        let notifier = notifier.clone();
        let store = store.clone();
        move |id: String| {
            let notifier = notifier.clone();
            let store = store.clone();
            Callback::from(move |_: MouseEvent| {
                let confirmed = web_sys::window()
                    .and_then(|w| w.confirm_with_message("Delete this budget?").ok())
                    .unwrap_or(false);
                if !confirmed {
                    return;
                }
                let id = id.clone();
                let notifier = notifier.clone();
                let store = store.clone();
                spawn_local(async move {
                    match ApiClient::default().delete_budget(&id).await {
                        Ok(()) => {
                            notifier.success("Budget deleted");
                            store.invalidate(Entity::Budgets);
                        }
                        Err(err) => {
                            log::error!("deleting budget {} failed: {}", id, err);
                            notifier.error(err.user_message());
                        }
                    }
                });
            })
        }
    };

    let actions = html! {
        <button class={PRIMARY_BUTTON} onclick={open_with(Editor::Adding, None)}>
            { icon_plus() }<span>{"Add Budget"}</span>
        </button>
    };

    let body = match &*budgets {
        QueryState::Loading => spinner(),
        QueryState::Failed(message) => error_text(message),
        QueryState::Ready(list) if list.is_empty() => html! {
            <p class="text-gray-400 text-center py-8">{"No budgets yet. Add one to start tracking your spending."}</p>
        },
        QueryState::Ready(list) => html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for list.iter().map(|budget| {
                    let progress = budget_progress(budget);
                    let (accent, bar) = if progress.is_overspent {
                        ("text-red-400", "bg-red-400")
                    } else {
                        ("text-[#20D982]", "bg-[#20D982]")
                    };
                    html! {
                        <div key={budget.id.clone()} class="bg-[#280832] rounded-xl p-4 shadow-lg">
                            <div class="flex justify-between items-start mb-4">
                                <div>
                                    <h3 class="text-lg font-medium text-white">{ budget.category.clone() }</h3>
                                    <p class="text-sm text-gray-400">{ budget.period.label() }</p>
                                </div>
                                <div class="flex gap-2">
                                    <button class="p-1.5 hover:bg-white/10 rounded-full text-[#83bce3]"
                                        onclick={open_with(Editor::Editing(budget.id.clone()), Some(budget.clone()))}>
                                        { icon_edit() }
                                    </button>
                                    <button class="p-1.5 hover:bg-white/10 rounded-full text-red-400" onclick={on_delete(budget.id.clone())}>
                                        { icon_trash() }
                                    </button>
                                </div>
                            </div>
                            <div class="mb-4">
                                <div class="flex justify-between text-sm mb-1">
                                    <span class="text-gray-400">{"Progress"}</span>
                                    <span class={accent}>{ format_percent(progress.percentage) }</span>
                                </div>
                                { progress_bar(progress.percentage, bar) }
                            </div>
                            <div class="space-y-2">
                                { figure_row("Budget", format_currency(budget.amount, &symbol), "text-white") }
                                { figure_row("Spent", format_currency(progress.spent, &symbol), "text-white") }
                                { figure_row("Remaining", remaining_label(&progress, &symbol), accent) }
                            </div>
                            <div class={classes!("mt-4", "flex", "items-center", "gap-2", "text-sm", accent)}>
                                if progress.is_overspent {
                                    { icon_alert() }<span>{"Budget exceeded!"}</span>
                                } else {
                                    { icon_check_circle() }<span>{"Within budget"}</span>
                                }
                            </div>
                        </div>
                    }
                }) }
            </div>
        },
    };

    let dialog = match &*editor {
        Editor::Closed => html! {},
        target => modal(
            if matches!(target, Editor::Editing(_)) { "Edit Budget" } else { "Add New Budget" },
            close.clone(),
            html! {
                <form class="space-y-4" onsubmit={on_submit}>
                    <div>
                        <label class="block text-gray-400 mb-1">{"Category"}</label>
                        <input type="text" class={INPUT_CLASS} value={(*category).clone()} oninput={bind(&category)} />
                    </div>
                    <div>
                        <label class="block text-gray-400 mb-1">{ format!("Amount ({})", symbol) }</label>
                        <input type="number" step="0.01" min="0" class={INPUT_CLASS} value={(*amount).clone()} oninput={bind(&amount)} />
                    </div>
                    <div>
                        <label class="block text-gray-400 mb-1">{"Period"}</label>
                        <select class={INPUT_CLASS} onchange={bind_change(&period)}>
                            { for BudgetPeriod::ALL.iter().map(|p| html! {
                                <option value={p.as_str()} selected={*period == p.as_str()}>{ p.label() }</option>
                            }) }
                        </select>
                    </div>
                    if let Some(err) = &*form_error {
                        <p class="text-sm text-red-400">{ err.clone() }</p>
                    }
                    <div class="flex justify-end gap-3">
                        <button type="button" class="px-4 py-2 text-gray-400 hover:text-white" onclick={close}>{"Cancel"}</button>
                        <button type="submit" class={PRIMARY_BUTTON} disabled={*saving}>
                            { if *saving { "Saving..." } else { "Save" } }
                        </button>
                    </div>
                </form>
            },
        ),
    };

    html! {
        <>
            { page_shell("Budget Management", actions, body) }
            { dialog }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_needs_category_and_positive_amount() {
        assert_eq!(
            budget_input(" ", "100", "monthly"),
            Err(ValidationError::MissingField("Category"))
        );
        assert_eq!(
            budget_input("Food", "-5", "monthly"),
            Err(ValidationError::InvalidAmount("-5".to_string()))
        );
        let input = budget_input(" Food ", "1500", "weekly").unwrap();
        assert_eq!(input.category, "Food");
        assert_eq!(input.period, BudgetPeriod::Weekly);
    }

    #[test]
    fn overspent_budget_says_so() {
        let budget = Budget {
            id: "b1".to_string(),
            category: "Food".to_string(),
            amount: 1000.0,
            period: BudgetPeriod::Monthly,
            spent: Some(1200.0),
        };
        assert_eq!(remaining_label(&budget_progress(&budget), "₹"), "₹ 200.00 overspent");

        let under = Budget { spent: Some(250.0), ..budget };
        assert_eq!(remaining_label(&budget_progress(&under), "₹"), "₹ 750.00");
    }
}
