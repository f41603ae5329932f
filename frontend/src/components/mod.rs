pub mod auth;
pub mod chart;
pub mod icons;
pub mod layout;
pub mod stat;

use yew::prelude::*;

pub fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-4 md:p-6 w-full max-w-7xl mx-auto">
            <div class="flex flex-wrap gap-3 justify-between items-center mb-6">
                <h2 class="text-2xl md:text-3xl font-semibold text-white">{ title }</h2>
                { actions }
            </div>
            <div class="space-y-6">
                { children }
            </div>
        </div>
    }
}

pub fn spinner() -> Html {
    html! {
        <div class="text-center py-8">
            <div class="animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-[#20D982] mx-auto"></div>
        </div>
    }
}

pub fn error_text(message: &str) -> Html {
    html! { <div class="text-red-500 text-center py-4">{ message.to_string() }</div> }
}

pub fn modal(title: &'static str, on_close: Callback<MouseEvent>, body: Html) -> Html {
    html! {
        <div class="fixed inset-0 bg-black/60 flex items-center justify-center z-[55] p-4">
            <div class="bg-[#280832] rounded-xl p-6 w-full max-w-md shadow-2xl">
                <div class="flex justify-between items-center mb-4">
                    <h3 class="text-xl font-semibold text-white">{ title }</h3>
                    <button type="button" class="text-gray-400 hover:text-white" onclick={on_close}>{ icons::icon_x() }</button>
                </div>
                { body }
            </div>
        </div>
    }
}

/// Value of the input, select or textarea that fired `e`.
pub fn event_value(e: &Event) -> String {
    use wasm_bindgen::JsCast;
    let Some(target) = e.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        input.value()
    } else if let Some(select) = target.dyn_ref::<web_sys::HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = target.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Callback writing the fired element's value into `state`.
pub fn bind(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| state.set(event_value(&e)))
}

pub fn bind_change(state: &UseStateHandle<String>) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |e: Event| state.set(event_value(&e)))
}

pub const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-lg bg-black/20 text-white border border-gray-700 focus:border-[#20D982] focus:outline-none disabled:opacity-50";
pub const FILTER_CLASS: &str = "px-3 py-2.5 text-sm text-white bg-[#2a2a40] border border-[#444] rounded-md focus:border-[#83bce3] outline-none";
pub const PRIMARY_BUTTON: &str = "flex items-center gap-2 px-4 py-2 bg-[#20D982]/10 text-[#20D982] rounded-full hover:bg-[#20D982] hover:text-black transition-all duration-300";
