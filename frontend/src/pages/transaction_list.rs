use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::icons::{icon_edit, icon_trash};
use crate::components::{bind, bind_change, error_text, event_value, FILTER_CLASS};
use crate::config::EDIT_ERROR_MS;
use crate::edit::{DraftField, EditAction, RowEdit, RowEdits, TransactionDraft};
use crate::filter::TransactionFilter;
use crate::format::{display_date, format_currency};
use crate::models::{ModeOfPayment, Transaction, TransactionKind};
use crate::notify::{use_notifier, Notifier};
use crate::pages::use_currency_symbol;
use crate::store::{use_query, use_store, Entity, QueryState, Store};

const HEAD_CELL: &str = "p-3 text-left bg-[#2a2a40] text-[#d1d1e1] border-b border-[#333]";
const CELL: &str = "px-2.5 py-3 bg-[#252535] text-[#e0e0e0] border-b border-[#333] group-hover:bg-[#33334c] group-hover:text-white";
const CELL_INPUT: &str = "w-full bg-[#2a2a40] text-white px-2 py-1 rounded";
const SMALL_BUTTON: &str = "inline-flex items-center gap-1 px-2 py-1 bg-[#71a9d1] text-black rounded mr-2 hover:bg-[#5a8cb3]";

const DELETE_PROMPT: &str = "Are you sure you want to delete this transaction?";

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn save_row(id: String, draft: TransactionDraft, edits: UseReducerHandle<RowEdits>, notifier: Notifier, store: Store) {
    let body = match draft.validate() {
        Ok(body) => body,
        Err(err) => {
            notifier.error_for(err.to_string(), EDIT_ERROR_MS);
            return;
        }
    };
    spawn_local(async move {
        match ApiClient::default().edit_transaction(&id, &body).await {
            Ok(()) => {
                edits.dispatch(EditAction::Finish(id));
                notifier.success("Transaction updated successfully");
                store.invalidate(Entity::Transactions);
            }
            Err(err) => {
                log::error!("updating transaction {} failed: {}", id, err);
                notifier.error_for(err.user_message(), EDIT_ERROR_MS);
            }
        }
    });
}

fn delete_row(id: String, edits: UseReducerHandle<RowEdits>, notifier: Notifier, store: Store) {
    if !confirm(DELETE_PROMPT) {
        return;
    }
    spawn_local(async move {
        match ApiClient::default().delete_transaction(&id).await {
            Ok(()) => {
                edits.dispatch(EditAction::Finish(id));
                notifier.success("Transaction deleted successfully");
                store.invalidate(Entity::Transactions);
            }
            Err(err) => {
                log::error!("deleting transaction {} failed: {}", id, err);
                notifier.error(err.user_message());
            }
        }
    });
}

#[function_component(TransactionListPage)]
pub fn transaction_list_page() -> Html {
    let symbol = use_currency_symbol();
    let notifier = use_notifier();
    let store = use_store();

    let kind = use_state(|| TransactionKind::Debit);
    let mode = use_state(String::new);
    let start = use_state(String::new);
    let end = use_state(String::new);
    let category = use_state(String::new);
    let search = use_state(String::new);
    let applied = use_state(|| TransactionFilter::new(TransactionKind::Debit));
    let edits = use_reducer(RowEdits::default);

    let transactions = use_query(Entity::Transactions, *kind, |api, kind| async move {
        match kind {
            TransactionKind::Debit => api.fetch_debits().await,
            TransactionKind::Credit => api.fetch_credits().await,
        }
    });
    let profile = use_query(Entity::Profile, (), |api, ()| async move { api.profile().await });
    let categories: Vec<String> = profile
        .data()
        .map(|p| p.custom_categories.clone())
        .unwrap_or_default();

    let on_kind = {
        let kind = kind.clone();
        let inputs = [mode.clone(), start.clone(), end.clone(), category.clone(), search.clone()];
        let applied = applied.clone();
        Callback::from(move |e: Event| {
            let next = TransactionKind::parse(&event_value(&e));
            kind.set(next);
            // Switching type starts from a blank form, matching the reset filter.
            for input in &inputs {
                input.set(String::new());
            }
            applied.set(TransactionFilter::new(next));
        })
    };

    let on_apply = {
        let kind = kind.clone();
        let mode = mode.clone();
        let start = start.clone();
        let end = end.clone();
        let category = category.clone();
        let search = search.clone();
        let applied = applied.clone();
        Callback::from(move |_| {
            applied.set(TransactionFilter::from_form(*kind, &start, &end, &mode, &category, &search));
        })
    };

    let is_debit = *kind == TransactionKind::Debit;
    let columns = if is_debit { 6 } else { 5 };

    let rows = match &*transactions {
        QueryState::Loading => html! {
            <tr><td colspan={columns.to_string()} class="text-center py-4 text-gray-400">{"Loading..."}</td></tr>
        },
        QueryState::Failed(message) => html! {
            <tr><td colspan={columns.to_string()}>{ error_text(message) }</td></tr>
        },
        QueryState::Ready(list) => {
            let visible = applied.apply(list);
            if visible.is_empty() {
                html! {
                    <tr>
                        <td colspan={columns.to_string()} class="text-center py-4 text-lg font-bold text-[#e0e0e0]">
                            { format!("No {}s Found", kind.label()) }
                        </td>
                    </tr>
                }
            } else {
                html! {
                    <>{ for visible.into_iter().map(|tx| {
                        let row = RowContext {
                            edits: edits.clone(),
                            notifier: notifier.clone(),
                            store: store.clone(),
                            categories: &categories,
                            symbol: &symbol,
                        };
                        row.render(tx)
                    }) }</>
                }
            }
        }
    };

    html! {
        <div class="w-full flex flex-col">
            <div class="sticky top-0 w-full mb-4 flex gap-4 flex-wrap justify-center items-center p-4 bg-[#1e1e2f] rounded-lg z-10 shadow-[0_4px_6px_rgba(0,0,0,0.5)]">
                <div class="flex items-center gap-2">
                    <label class="text-white text-[15px]">{"Type:"}</label>
                    <select class={FILTER_CLASS} onchange={on_kind}>
                        { for [TransactionKind::Debit, TransactionKind::Credit].into_iter().map(|k| html! {
                            <option value={k.label()} selected={k == *kind}>{ k.label() }</option>
                        }) }
                    </select>
                </div>
                <div class="flex items-center gap-2">
                    <label class="text-white text-[15px]">{"Mode:"}</label>
                    <select class={FILTER_CLASS} onchange={bind_change(&mode)}>
                        <option value="" selected={mode.is_empty()}>{"All Modes"}</option>
                        { for ModeOfPayment::ALL.iter().map(|m| html! {
                            <option value={m.as_str()} selected={*mode == m.as_str()}>{ m.label() }</option>
                        }) }
                    </select>
                </div>
                <div class="flex items-center gap-2">
                    <label class="text-white text-[15px]">{"From:"}</label>
                    <input type="month" class={FILTER_CLASS} value={(*start).clone()} onchange={bind_change(&start)} />
                </div>
                <div class="flex items-center gap-2">
                    <label class="text-white text-[15px]">{"To:"}</label>
                    <input type="month" class={FILTER_CLASS} value={(*end).clone()} onchange={bind_change(&end)} />
                </div>
                if is_debit {
                    <div class="flex items-center gap-2">
                        <label class="text-white text-[15px]">{"Category:"}</label>
                        <select class={FILTER_CLASS} onchange={bind_change(&category)}>
                            <option value="" selected={category.is_empty()}>{"All Categories"}</option>
                            { for categories.iter().map(|c| html! {
                                <option value={c.clone()} selected={*category == *c}>{ c.clone() }</option>
                            }) }
                        </select>
                    </div>
                    <div class="flex items-center gap-2">
                        <label class="text-white text-[15px]">{"Search:"}</label>
                        <input type="text" placeholder="Search transactions..." class={FILTER_CLASS}
                            value={(*search).clone()} oninput={bind(&search)} />
                    </div>
                }
                <button onclick={on_apply} class="px-3 py-2.5 text-sm bg-[#71a9d1] text-black rounded-md hover:rounded-lg transition-all duration-300">
                    {"Apply Filters"}
                </button>
            </div>

            <div class="w-full overflow-x-auto">
                <table class="w-full border-collapse bg-[#1e1e2f] text-white shadow-[0_4px_6px_rgba(0,0,0,0.5)]">
                    <thead>
                        <tr>
                            <th class={HEAD_CELL}>{"Date"}</th>
                            <th class={HEAD_CELL}>{"Amount"}</th>
                            <th class={HEAD_CELL}>{ if is_debit { "Purpose" } else { "Bank" } }</th>
                            if is_debit {
                                <th class={HEAD_CELL}>{"Category"}</th>
                            }
                            <th class={HEAD_CELL}>{"Mode"}</th>
                            <th class={HEAD_CELL}>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { rows }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

struct RowContext<'a> {
    edits: UseReducerHandle<RowEdits>,
    notifier: Notifier,
    store: Store,
    categories: &'a [String],
    symbol: &'a str,
}

impl RowContext<'_> {
    fn setter(&self, id: &str, field: DraftField) -> Callback<Event> {
        let edits = self.edits.clone();
        let id = id.to_string();
        Callback::from(move |e: Event| {
            edits.dispatch(EditAction::Set {
                id: id.clone(),
                field,
                value: event_value(&e),
            })
        })
    }

    fn render(&self, tx: &Transaction) -> Html {
        let id = tx.id().to_string();
        let on_delete = {
            let id = id.clone();
            let edits = self.edits.clone();
            let notifier = self.notifier.clone();
            let store = self.store.clone();
            Callback::from(move |_| delete_row(id.clone(), edits.clone(), notifier.clone(), store.clone()))
        };
        let delete_button = html! {
            <button class="inline-flex items-center gap-1 px-2 py-1 bg-red-500 text-white rounded hover:bg-red-600" onclick={on_delete}>
                { icon_trash() }{"Delete"}
            </button>
        };

        match self.edits.state(&id) {
            RowEdit::Viewing => {
                let on_edit = {
                    let edits = self.edits.clone();
                    let tx = tx.clone();
                    Callback::from(move |_| edits.dispatch(EditAction::Begin(tx.clone())))
                };
                html! {
                    <tr key={id.clone()} class="hover:bg-[#33334c] group">
                        <td class={CELL}>{ display_date(tx.date()) }</td>
                        <td class={CELL}>{ format_currency(tx.amount(), self.symbol) }</td>
                        <td class={CELL}>{ tx.purpose().or(tx.bank()).unwrap_or_default().to_string() }</td>
                        if tx.kind() == TransactionKind::Debit {
                            <td class={CELL}>{ tx.category().unwrap_or("-").to_string() }</td>
                        }
                        <td class={CELL}>{ tx.mode_of_payment().label() }</td>
                        <td class={CELL}>
                            <button class={SMALL_BUTTON} onclick={on_edit}>{ icon_edit() }{"Edit"}</button>
                            { delete_button }
                        </td>
                    </tr>
                }
            }
            RowEdit::Editing(draft) => {
                let on_save = {
                    let id = id.clone();
                    let draft = draft.clone();
                    let edits = self.edits.clone();
                    let notifier = self.notifier.clone();
                    let store = self.store.clone();
                    Callback::from(move |_| {
                        save_row(id.clone(), draft.clone(), edits.clone(), notifier.clone(), store.clone())
                    })
                };
                let on_cancel = {
                    let id = id.clone();
                    let edits = self.edits.clone();
                    Callback::from(move |_| edits.dispatch(EditAction::Finish(id.clone())))
                };
                html! {
                    <tr key={id.clone()} class="bg-[#33334c]">
                        <td class={CELL}>
                            <input type="date" class={CELL_INPUT} value={draft.date.clone()} onchange={self.setter(&id, DraftField::Date)} />
                        </td>
                        <td class={CELL}>
                            <input type="number" step="0.01" class={CELL_INPUT} value={draft.amount.clone()} onchange={self.setter(&id, DraftField::Amount)} />
                        </td>
                        <td class={CELL}>
                            <input type="text" class={CELL_INPUT} placeholder={draft.detail_label()} value={draft.detail.clone()} onchange={self.setter(&id, DraftField::Detail)} />
                        </td>
                        if draft.kind == TransactionKind::Debit {
                            <td class={CELL}>
                                <select class={CELL_INPUT} onchange={self.setter(&id, DraftField::Category)}>
                                    <option value="" selected={draft.category.is_empty()}>{"None"}</option>
                                    { for self.categories.iter().map(|c| html! {
                                        <option value={c.clone()} selected={draft.category == *c}>{ c.clone() }</option>
                                    }) }
                                </select>
                            </td>
                        }
                        <td class={CELL}>
                            <select class={CELL_INPUT} onchange={self.setter(&id, DraftField::Mode)}>
                                <option value="" selected={draft.mode.is_empty()}>{"Select mode"}</option>
                                { for ModeOfPayment::ALL.iter().map(|m| html! {
                                    <option value={m.as_str()} selected={draft.mode == m.as_str()}>{ m.label() }</option>
                                }) }
                            </select>
                        </td>
                        <td class={CELL}>
                            <button class={SMALL_BUTTON} onclick={on_save}>{"Save"}</button>
                            <button class={SMALL_BUTTON} onclick={on_cancel}>{"Cancel"}</button>
                            { delete_button }
                        </td>
                    </tr>
                }
            }
        }
    }
}
