use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::{event_value, spinner, INPUT_CLASS};
use crate::edit::{DraftField, TransactionDraft};
use crate::models::{ModeOfPayment, TransactionKind};
use crate::store::{use_query, use_store, Entity, QueryState};

#[derive(Clone, PartialEq)]
enum FormMessage {
    Success(String),
    Error(String),
}

#[function_component(TransactionFormPage)]
pub fn transaction_form_page() -> Html {
    let store = use_store();
    let draft = use_state(|| TransactionDraft::empty(TransactionKind::Debit));
    let message = use_state(|| None::<FormMessage>);
    let submitting = use_state(|| false);
    let profile = use_query(Entity::Profile, (), |api, ()| async move { api.profile().await });

    let on_kind = {
        let draft = draft.clone();
        let message = message.clone();
        Callback::from(move |e: Event| {
            let kind = TransactionKind::parse(&event_value(&e));
            message.set(None);
            draft.set(TransactionDraft::empty(kind));
        })
    };

    let setter = |field: DraftField| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            next.set(field, event_value(&e));
            draft.set(next);
        })
    };
    let select_setter = |field: DraftField| {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let mut next = (*draft).clone();
            next.set(field, event_value(&e));
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let message = message.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let body = match draft.validate() {
                Ok(body) => body,
                Err(err) => {
                    message.set(Some(FormMessage::Error(err.to_string())));
                    return;
                }
            };
            let kind = draft.kind;
            let draft = draft.clone();
            let message = message.clone();
            let submitting = submitting.clone();
            let store = store.clone();
            submitting.set(true);
            message.set(None);
            spawn_local(async move {
                match ApiClient::default().add_transaction(&body).await {
                    Ok(confirmation) => {
                        let text = confirmation.unwrap_or_else(|| "Transaction added successfully!".to_string());
                        message.set(Some(FormMessage::Success(text)));
                        draft.set(TransactionDraft::empty(kind));
                        store.invalidate(Entity::Transactions);
                    }
                    Err(err) => {
                        log::error!("adding {} failed: {}", kind.label(), err);
                        message.set(Some(FormMessage::Error(err.user_message())));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let is_debit = draft.kind == TransactionKind::Debit;
    let categories: &[String] = profile
        .data()
        .map(|p| p.custom_categories.as_slice())
        .unwrap_or(&[]);

    html! {
        <div class="w-full max-w-md mx-auto mt-8">
            <div class="bg-[#280832] p-6 rounded-lg shadow-[0_0_5px_#83bce3]">
                <select class="p-2.5 rounded-lg border border-[#20D982]/30 bg-[#280832] text-white" onchange={on_kind}>
                    <option value="debit" selected={is_debit}>{"Debit"}</option>
                    <option value="credit" selected={!is_debit}>{"Credit"}</option>
                </select>

                if profile.is_loading() {
                    { spinner() }
                } else {
                    <form class="space-y-4 mt-4" onsubmit={on_submit}>
                        <div class="space-y-1">
                            <label class="text-gray-200">{"Amount"}</label>
                            <input type="number" step="0.01" required=true class={INPUT_CLASS}
                                value={draft.amount.clone()} oninput={setter(DraftField::Amount)} />
                        </div>
                        <div class="space-y-1">
                            <label class="text-gray-200">{"Date"}</label>
                            <input type="date" required=true class={INPUT_CLASS}
                                value={draft.date.clone()} oninput={setter(DraftField::Date)} />
                        </div>
                        <div class="space-y-1">
                            <label class="text-gray-200">{ draft.detail_label() }</label>
                            <input type="text" required=true class={INPUT_CLASS}
                                value={draft.detail.clone()} oninput={setter(DraftField::Detail)} />
                        </div>
                        if is_debit {
                            <div class="space-y-1">
                                <label class="text-gray-200">{"Category"}</label>
                                <select class={INPUT_CLASS} onchange={select_setter(DraftField::Category)}>
                                    <option value="" selected={draft.category.is_empty()}>{"Select category"}</option>
                                    { for categories.iter().map(|c| html! {
                                        <option value={c.clone()} selected={draft.category == *c}>{ c.clone() }</option>
                                    }) }
                                </select>
                                if categories.is_empty() {
                                    <p class="text-xs text-gray-400">{"Add custom categories from your profile."}</p>
                                }
                            </div>
                        }
                        <div class="space-y-1">
                            <label class="text-gray-200">{"Mode of Payment"}</label>
                            <select class={INPUT_CLASS} required=true onchange={select_setter(DraftField::Mode)}>
                                <option value="" selected={draft.mode.is_empty()}>{"Select mode"}</option>
                                { for ModeOfPayment::ALL.iter().map(|m| html! {
                                    <option value={m.as_str()} selected={draft.mode == m.as_str()}>{ m.label() }</option>
                                }) }
                            </select>
                        </div>

                        <button type="submit" disabled={*submitting}
                            class="w-full py-2.5 rounded-lg bg-[#20D982] text-black font-medium hover:bg-[#bbe86f] transition-all duration-300 disabled:opacity-50">
                            { if *submitting { "Adding..." } else { "Add Transaction" } }
                        </button>

                        {
                            match &*message {
                                Some(FormMessage::Success(text)) => html! { <p class="text-center text-green-400">{ text.clone() }</p> },
                                Some(FormMessage::Error(text)) => html! { <p class="text-center text-red-400">{ text.clone() }</p> },
                                None => html! {},
                            }
                        }
                    </form>
                }

                if let QueryState::Failed(err) = &*profile {
                    <p class="mt-2 text-xs text-red-400">{ format!("Categories unavailable: {}", err) }</p>
                }
            </div>
        </div>
    }
}
