use chrono::Datelike;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

use crate::aggregate::{all_slices, generate_insights, month_name, report_csv, report_years, top_slices, MONTHS};
use crate::components::chart::{LineChart, PieChart};
use crate::components::icons::icon_download;
use crate::components::stat::{StatCard, Tone};
use crate::components::{error_text, event_value, page_shell, spinner, FILTER_CLASS, PRIMARY_BUTTON};
use crate::format::short_day;
use crate::models::MonthlyReport;
use crate::notify::use_notifier;
use crate::pages::use_currency_symbol;
use crate::store::{use_query, Entity, QueryState};

const CHART_CARD: &str = "bg-[#280832] p-6 rounded-xl border border-[#20D982]/20";

fn download_text(file_name: &str, mime: &str, contents: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let mut options = web_sys::BlobPropertyBag::new();
    options.type_(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    web_sys::Url::revoke_object_url(&url)
}

#[function_component(ReportsPage)]
pub fn reports_page() -> Html {
    let symbol = use_currency_symbol();
    let notifier = use_notifier();
    let today = chrono::Local::now();
    let current_year = today.year();
    let month = use_state(|| today.month());
    let year = use_state(|| current_year);
    let show_insights = use_state(|| false);

    let report = use_query(Entity::Reports, (*month, *year), |api, (month, year)| async move {
        api.monthly_report(month, year).await
    });

    let on_month = {
        let month = month.clone();
        Callback::from(move |e: Event| {
            if let Ok(value) = event_value(&e).parse::<u32>() {
                month.set(value);
            }
        })
    };
    let on_year = {
        let year = year.clone();
        Callback::from(move |e: Event| {
            if let Ok(value) = event_value(&e).parse::<i32>() {
                year.set(value);
            }
        })
    };
    let toggle_insights = {
        let show_insights = show_insights.clone();
        Callback::from(move |_| show_insights.set(!*show_insights))
    };

    let on_download = {
        let month = *month;
        let year = *year;
        let data = report.data().cloned();
        Callback::from(move |_| {
            let Some(data) = &data else {
                notifier.error("Report is still loading");
                return;
            };
            let file_name = format!("financial-report-{}-{}.csv", month_name(month).to_lowercase(), year);
            match download_text(&file_name, "text/csv", &report_csv(data, month, year)) {
                Ok(()) => notifier.success("Report downloaded"),
                Err(err) => {
                    log::error!("report download failed: {:?}", err);
                    notifier.error("Could not generate the report file");
                }
            }
        })
    };

    let actions = html! {
        <div class="flex flex-wrap gap-3 items-center">
            <select class={FILTER_CLASS} onchange={on_month}>
                { for MONTHS.iter().enumerate().map(|(i, name)| {
                    let value = i as u32 + 1;
                    html! { <option value={value.to_string()} selected={value == *month}>{ *name }</option> }
                }) }
            </select>
            <select class={FILTER_CLASS} onchange={on_year}>
                { for report_years(current_year).into_iter().map(|y| html! {
                    <option value={y.to_string()} selected={y == *year}>{ y.to_string() }</option>
                }) }
            </select>
            <button class={PRIMARY_BUTTON} onclick={toggle_insights}>
                { if *show_insights { "Hide Insights" } else { "Show Insights" } }
            </button>
            <button class={PRIMARY_BUTTON} onclick={on_download} disabled={report.data().is_none()}>
                { icon_download() }{"Download"}
            </button>
        </div>
    };

    let body = match &*report {
        QueryState::Loading => spinner(),
        QueryState::Failed(message) => error_text(message),
        QueryState::Ready(data) => report_body(data, &symbol, *show_insights),
    };

    page_shell("Financial Reports", actions, body)
}

fn report_body(report: &MonthlyReport, symbol: &str, show_insights: bool) -> Html {
    let savings_tone = if report.savings < 0.0 { Tone::Negative } else { Tone::Positive };
    let trend_labels: Vec<String> = report.daily_trend.iter().map(|d| short_day(d.label())).collect();
    let trend_values: Vec<f64> = report.daily_trend.iter().map(|d| d.total).collect();

    html! {
        <>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <StatCard title="Total Income" amount={report.totals.credit} currency_symbol={symbol.to_string()} tone={Tone::Positive} />
                <StatCard title="Total Expenses" amount={report.totals.debit} currency_symbol={symbol.to_string()} tone={Tone::Negative} />
                <StatCard title="Net Savings" amount={report.savings} currency_symbol={symbol.to_string()} tone={savings_tone} />
            </div>

            if show_insights {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    { for generate_insights(report, symbol).into_iter().map(|insight| html! {
                        <div class="bg-[#1a1a2e] p-4 rounded-lg">
                            <h3 class="text-[#83bce3] font-semibold mb-2">{ insight.title }</h3>
                            <ul class="list-disc list-inside space-y-1 text-gray-300 text-sm">
                                { for insight.points.into_iter().map(|point| html! { <li>{ point }</li> }) }
                            </ul>
                        </div>
                    }) }
                </div>
            }

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class={CHART_CARD}>
                    <PieChart title="Expense Distribution" slices={top_slices(&report.expense_by_purpose)} currency_symbol={symbol.to_string()} />
                </div>
                <div class={CHART_CARD}>
                    <PieChart title="Payment Methods" hole=true slices={all_slices(&report.payment_method_distribution)} currency_symbol={symbol.to_string()} />
                </div>
                <div class={classes!(CHART_CARD, "lg:col-span-2")}>
                    <LineChart title="Daily Spending Trend" labels={trend_labels} values={trend_values} currency_symbol={symbol.to_string()} />
                </div>
            </div>
        </>
    }
}
