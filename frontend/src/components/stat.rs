use yew::prelude::*;

use crate::format::format_currency;

#[derive(Clone, Copy, PartialEq)]
pub enum Tone {
    Neutral,
    Positive,
    Negative,
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub amount: f64,
    pub currency_symbol: String,
    #[prop_or(Tone::Neutral)]
    pub tone: Tone,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let amount_class = match props.tone {
        Tone::Neutral => "text-2xl text-white",
        Tone::Positive => "text-2xl text-green-400",
        Tone::Negative => "text-2xl text-red-400",
    };
    html! {
        <div class="bg-[#1a1a2e] p-4 rounded-lg">
            <div class="text-gray-400">{ props.title }</div>
            <div class={amount_class}>{ format_currency(props.amount, &props.currency_symbol) }</div>
        </div>
    }
}

/// Label/value row used on budget and goal cards.
pub fn figure_row(label: &'static str, value: String, value_class: &'static str) -> Html {
    html! {
        <div class="flex justify-between">
            <span class="text-gray-400">{ label }</span>
            <span class={value_class}>{ value }</span>
        </div>
    }
}

pub fn progress_bar(percentage: f64, bar_class: &'static str) -> Html {
    html! {
        <div class="h-2 bg-gray-700 rounded-full overflow-hidden">
            <div class={classes!("h-full", "transition-all", "duration-500", bar_class)} style={format!("width: {:.1}%", percentage)}></div>
        </div>
    }
}
