use yew::prelude::*;

use crate::aggregate::top_slices;
use crate::components::chart::PieChart;
use crate::components::{error_text, spinner};
use crate::format::{display_date, format_currency};
use crate::models::RecentEntry;
use crate::pages::use_currency_symbol;
use crate::store::{use_query, Entity, QueryState};

const CARD_CLASS: &str = "bg-[#280832] p-6 rounded-xl border border-[#20D982]/20";

fn recent_list(entries: &[RecentEntry], symbol: &str, empty: &'static str) -> Html {
    if entries.is_empty() {
        return html! { <p class="text-gray-400 text-sm">{ empty }</p> };
    }
    html! {
        <ul class="space-y-2">
            { for entries.iter().map(|entry| html! {
                <li class="text-gray-300 flex justify-between">
                    <span>{ display_date(&entry.date) }</span>
                    <span>{ format_currency(entry.amount, symbol) }</span>
                </li>
            }) }
        </ul>
    }
}

fn card_body<T>(state: &QueryState<T>, render: impl FnOnce(&T) -> Html) -> Html {
    match state {
        QueryState::Ready(data) => render(data),
        QueryState::Failed(message) => error_text(message),
        QueryState::Loading => spinner(),
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let symbol = use_currency_symbol();
    let summary = use_query(Entity::Dashboard, (), |api, ()| async move { api.dashboard().await });
    let debits = use_query(Entity::Dashboard, (), |api, ()| async move { api.home_debits().await });
    let credits = use_query(Entity::Dashboard, (), |api, ()| async move { api.home_credits().await });

    html! {
        <>
            <h1 class="text-3xl text-white mb-8 font-bold">{"Welcome to MoneyMind"}</h1>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                <div class={CARD_CLASS}>
                    <h2 class="text-xl text-white mb-4">{"Expense Overview"}</h2>
                    { card_body(&*summary, |summary| html! {
                        <>
                            <p class="text-gray-300 mb-4">{ format!("Total Expenses: {}", format_currency(summary.total, &symbol)) }</p>
                            <PieChart slices={top_slices(&summary.expense_by_purpose)} currency_symbol={symbol.clone()} />
                        </>
                    }) }
                </div>

                <div class={CARD_CLASS}>
                    <h2 class="text-xl text-white mb-4">{"Monthly Debit Overview"}</h2>
                    { card_body(&*debits, |overview| html! {
                        <>
                            <p class="text-gray-300 mb-4">{ format!("Total Debit This Month: {}", format_currency(overview.total_debit, &symbol)) }</p>
                            { recent_list(&overview.last_debits, &symbol, "No debits this month.") }
                        </>
                    }) }
                </div>

                <div class={CARD_CLASS}>
                    <h2 class="text-xl text-white mb-4">{"Monthly Credit Overview"}</h2>
                    { card_body(&*credits, |overview| html! {
                        <>
                            <p class="text-gray-300 mb-4">{ format!("Total Credit This Month: {}", format_currency(overview.total_credit, &symbol)) }</p>
                            { recent_list(&overview.last_credits, &symbol, "No credits this month.") }
                        </>
                    }) }
                </div>
            </div>
        </>
    }
}
