use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::aggregate::goal_progress;
use crate::api::ApiClient;
use crate::components::icons::{icon_check_circle, icon_plus, icon_target, icon_trash};
use crate::components::stat::{figure_row, progress_bar};
use crate::components::{bind, error_text, modal, page_shell, spinner, INPUT_CLASS, PRIMARY_BUTTON};
use crate::error::ValidationError;
use crate::format::{display_date, format_currency, format_percent};
use crate::models::GoalInput;
use crate::notify::use_notifier;
use crate::pages::use_currency_symbol;
use crate::store::{use_query, use_store, Entity, QueryState};

pub fn goal_input(title: &str, target: &str, deadline: &str, description: &str) -> Result<GoalInput, ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::MissingField("Goal title"));
    }
    let target_raw = target.trim();
    if target_raw.is_empty() {
        return Err(ValidationError::MissingField("Target amount"));
    }
    let target_amount = target_raw
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or_else(|| ValidationError::InvalidAmount(target_raw.to_string()))?;
    let deadline = deadline.trim();
    if deadline.is_empty() {
        return Err(ValidationError::MissingField("Deadline"));
    }
    let description = description.trim();
    Ok(GoalInput {
        title: title.to_string(),
        target_amount,
        deadline: deadline.to_string(),
        description: (!description.is_empty()).then(|| description.to_string()),
    })
}

#[function_component(GoalsPage)]
pub fn goals_page() -> Html {
    let symbol = use_currency_symbol();
    let notifier = use_notifier();
    let store = use_store();
    let savings = use_query(Entity::Goals, (), |api, ()| async move { api.lifetime_savings().await });
    let goals = use_query(Entity::Goals, (), |api, ()| async move { api.goals().await });

    let show_modal = use_state(|| false);
    let title = use_state(String::new);
    let target = use_state(String::new);
    let deadline = use_state(String::new);
    let description = use_state(String::new);
    let form_error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let open = {
        let show_modal = show_modal.clone();
        let form_error = form_error.clone();
        Callback::from(move |_: MouseEvent| {
            form_error.set(None);
            show_modal.set(true);
        })
    };
    let close = {
        let show_modal = show_modal.clone();
        Callback::from(move |_: MouseEvent| show_modal.set(false))
    };

    let on_submit = {
        let show_modal = show_modal.clone();
        let title = title.clone();
        let target = target.clone();
        let deadline = deadline.clone();
        let description = description.clone();
        let form_error = form_error.clone();
        let saving = saving.clone();
        let notifier = notifier.clone();
        let store = store.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = match goal_input(&title, &target, &deadline, &description) {
                Ok(input) => input,
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                    return;
                }
            };
            let show_modal = show_modal.clone();
            let fields = [title.clone(), target.clone(), deadline.clone(), description.clone()];
            let form_error = form_error.clone();
            let saving = saving.clone();
            let notifier = notifier.clone();
            let store = store.clone();
            saving.set(true);
            spawn_local(async move {
                match ApiClient::default().create_goal(&input).await {
                    Ok(goal) => {
                        log::info!("created goal {}", goal.id);
                        for field in &fields {
                            field.set(String::new());
                        }
                        show_modal.set(false);
                        notifier.success("Goal added");
                        store.invalidate(Entity::Goals);
                    }
                    Err(err) => {
                        log::error!("creating goal failed: {}", err);
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
                let id = id.clone();
                let notifier = notifier.clone();
                let store = store.clone();
                spawn_local(async move {
                    match ApiClient::default().delete_goal(&id).await {
                        Ok(()) => {
                            notifier.success("Goal deleted");
                            store.invalidate(Entity::Goals);
                        }
                        Err(err) => {
                            log::error!("deleting goal {} failed: {}", id, err);
                            notifier.error(err.user_message());
                        }
                    }
                });
            })
        }
    };

    let lifetime = savings.data().copied().unwrap_or(0.0);

    let actions = html! {
        <button class={PRIMARY_BUTTON} onclick={open}>
            { icon_plus() }<span>{"Add Goal"}</span>
        </button>
    };

    let savings_card = html! {
        <div class="bg-[#280832] rounded-xl p-6 shadow-lg">
            <div class="flex items-center justify-between text-[#20D982]">
                <h2 class="text-2xl font-semibold text-white">{"Lifetime Savings"}</h2>
                { icon_target() }
            </div>
            {
                match &*savings {
                    QueryState::Failed(message) => error_text(message),
                    _ => html! {
                        <p class="text-4xl font-bold text-[#20D982] mt-4">{ format_currency(lifetime, &symbol) }</p>
                    },
                }
            }
        </div>
    };

    let list = match &*goals {
        QueryState::Loading => spinner(),
        QueryState::Failed(message) => error_text(message),
        QueryState::Ready(list) if list.is_empty() => html! {
            <p class="text-gray-400 text-center py-8">{"No goals yet. Set a target to save towards."}</p>
        },
        QueryState::Ready(list) => html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for list.iter().map(|goal| {
                    let progress = goal_progress(goal.target_amount, lifetime);
                    let (accent, bar) = if progress.is_achieved {
                        ("text-[#20D982]", "bg-[#20D982]")
                    } else {
                        ("text-[#83bce3]", "bg-[#83bce3]")
                    };
                    html! {
                        <div key={goal.id.clone()} class="bg-[#280832] rounded-xl p-4 shadow-lg">
                            <div class="flex justify-between items-start mb-4">
                                <div>
                                    <h3 class="text-lg font-medium text-white">{ goal.title.clone() }</h3>
                                    <p class="text-sm text-gray-400">{ format!("Due: {}", display_date(&goal.deadline)) }</p>
                                </div>
                                <button class="p-1.5 hover:bg-white/10 rounded-full text-red-400" onclick={on_delete(goal.id.clone())}>
                                    { icon_trash() }
                                </button>
                            </div>
                            <div class="mb-4">
                                <div class="flex justify-between text-sm mb-1">
                                    <span class="text-gray-400">{"Progress"}</span>
                                    <span class={accent}>{ format_percent(progress.percentage) }</span>
                                </div>
                                { progress_bar(progress.percentage, bar) }
                            </div>
                            <div class="space-y-2">
                                { figure_row("Target Amount", format_currency(goal.target_amount, &symbol), "text-white") }
                                { figure_row("Current Savings", format_currency(lifetime, &symbol), "text-white") }
                                { figure_row("Remaining", format_currency(progress.remaining.max(0.0), &symbol), accent) }
                            </div>
                            if let Some(text) = goal.description.as_ref().filter(|d| !d.is_empty()) {
                                <p class="mt-4 text-sm text-gray-400">{ text.clone() }</p>
                            }
                            if progress.is_achieved {
                                <div class="mt-4 flex items-center gap-2 text-[#20D982] text-sm">
                                    { icon_check_circle() }<span>{"Goal Achieved!"}</span>
                                </div>
                            }
                        </div>
                    }
                }) }
            </div>
        },
    };

    let dialog = if *show_modal {
        modal(
            "Add New Goal",
            close.clone(),
            html! {
                <form class="space-y-4" onsubmit={on_submit}>
                    <div>
                        <label class="block text-gray-400 mb-1">{"Goal Title"}</label>
                        <input type="text" class={INPUT_CLASS} value={(*title).clone()} oninput={bind(&title)} />
                    </div>
                    <div>
                        <label class="block text-gray-400 mb-1">{ format!("Target Amount ({})", symbol) }</label>
                        <input type="number" step="0.01" min="0" class={INPUT_CLASS} value={(*target).clone()} oninput={bind(&target)} />
                    </div>
                    <div>
                        <label class="block text-gray-400 mb-1">{"Deadline"}</label>
                        <input type="date" class={INPUT_CLASS} value={(*deadline).clone()} oninput={bind(&deadline)} />
                    </div>
                    <div>
                        <label class="block text-gray-400 mb-1">{"Description (optional)"}</label>
                        <textarea class={INPUT_CLASS} rows="3" value={(*description).clone()} oninput={bind(&description)} />
                    </div>
                    if let Some(err) = &*form_error {
                        <p class="text-sm text-red-400">{ err.clone() }</p>
                    }
                    <div class="flex justify-end gap-3">
                        <button type="button" class="px-4 py-2 text-gray-400 hover:text-white" onclick={close}>{"Cancel"}</button>
                        <button type="submit" class={PRIMARY_BUTTON} disabled={*saving}>
                            { if *saving { "Saving..." } else { "Add Goal" } }
                        </button>
                    </div>
                </form>
            },
        )
    } else {
        html! {}
    };

    html! {
        <>
            { page_shell("Financial Goals", actions, html! { <>{ savings_card }{ list }</> }) }
            { dialog }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_description_is_dropped() {
        let input = goal_input("Car", "500000", "2026-12-31", "  ").unwrap();
        assert_eq!(input.description, None);
        assert_eq!(input.target_amount, 500000.0);
    }

    #[test]
    fn goal_requires_deadline() {
        assert_eq!(
            goal_input("Car", "10", "", ""),
            Err(ValidationError::MissingField("Deadline"))
        );
        assert_eq!(
            goal_input("Car", "zero", "2026-01-01", ""),
            Err(ValidationError::InvalidAmount("zero".to_string()))
        );
    }
}
