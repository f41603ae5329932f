//! Non-blocking notification banner. Every notice dismisses itself after a
//! fixed time; nothing waits on it.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::NOTICE_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notices {
    pub items: Vec<Notice>,
}

pub enum NoticeAction {
    Show(Notice),
    Dismiss(u32),
}

impl Reducible for Notices {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: NoticeAction) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            NoticeAction::Show(notice) => items.push(notice),
            NoticeAction::Dismiss(id) => items.retain(|n| n.id != id),
        }
        Rc::new(Notices { items })
    }
}

/// Posts notices to the banner. Outside a provider it only logs.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    post: Callback<(NoticeKind, String, u32)>,
}

impl Default for Notifier {
    fn default() -> Self {
        Notifier {
            post: Callback::from(|(_, text, _): (NoticeKind, String, u32)| {
                log::info!("notice without banner: {}", text)
            }),
        }
    }
}

impl Notifier {
    pub fn success(&self, text: impl Into<String>) {
        self.post.emit((NoticeKind::Success, text.into(), NOTICE_MS));
    }

    pub fn error(&self, text: impl Into<String>) {
        self.post.emit((NoticeKind::Error, text.into(), NOTICE_MS));
    }

    pub fn error_for(&self, text: impl Into<String>, millis: u32) {
        self.post.emit((NoticeKind::Error, text.into(), millis));
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let notices = use_reducer(Notices::default);
    let next_id = use_mut_ref(|| 0u32);

    let notifier = {
        let notices = notices.clone();
        use_memo(
            move |_| Notifier {
                post: Callback::from(move |(kind, text, millis): (NoticeKind, String, u32)| {
                    let id = {
                        let mut next = next_id.borrow_mut();
                        *next = next.wrapping_add(1);
                        *next
                    };
                    notices.dispatch(NoticeAction::Show(Notice { id, kind, text }));
                    let notices = notices.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(millis).await;
                        notices.dispatch(NoticeAction::Dismiss(id));
                    });
                }),
            },
            (),
        )
    };

    let on_dismiss = {
        let notices = notices.clone();
        Callback::from(move |id: u32| notices.dispatch(NoticeAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Notifier> context={(*notifier).clone()}>
            { for props.children.iter() }
            <div class="fixed top-20 right-4 z-[60] space-y-2 w-80">
                { for notices.items.iter().map(|notice| {
                    let class_name = match notice.kind {
                        NoticeKind::Success => "px-4 py-3 rounded-lg shadow-lg bg-green-500/20 text-green-300 border border-green-500/40 flex justify-between gap-3",
                        NoticeKind::Error => "px-4 py-3 rounded-lg shadow-lg bg-red-500/20 text-red-300 border border-red-500/40 flex justify-between gap-3",
                    };
                    let id = notice.id;
                    let on_dismiss = on_dismiss.clone();
                    html! {
                        <div key={id} class={class_name} role="status">
                            <span class="text-sm">{ notice.text.clone() }</span>
                            <button class="text-xs opacity-70 hover:opacity-100" onclick={Callback::from(move |_| on_dismiss.emit(id))}>{"✕"}</button>
                        </div>
                    }
                }) }
            </div>
        </ContextProvider<Notifier>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(id: u32) -> Notice {
        Notice {
            id,
            kind: NoticeKind::Error,
            text: format!("n{}", id),
        }
    }

    #[test]
    fn dismiss_removes_only_the_matching_notice() {
        let state = Rc::new(Notices::default())
            .reduce(NoticeAction::Show(notice(1)))
            .reduce(NoticeAction::Show(notice(2)))
            .reduce(NoticeAction::Dismiss(1));
        assert_eq!(state.items, vec![notice(2)]);
    }

    #[test]
    fn dismissing_twice_is_harmless() {
        let state = Rc::new(Notices::default())
            .reduce(NoticeAction::Show(notice(1)))
            .reduce(NoticeAction::Dismiss(1))
            .reduce(NoticeAction::Dismiss(1));
        assert!(state.items.is_empty());
    }
}
