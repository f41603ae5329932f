use gloo_events::EventListener;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::layout::Layout;
use crate::notify::use_notifier;
use crate::pages::budget::BudgetPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::goals::GoalsPage;
use crate::pages::groups::GroupsPage;
use crate::pages::profile::ProfilePage;
use crate::pages::reports::ReportsPage;
use crate::pages::transaction_form::TransactionFormPage;
use crate::pages::transaction_list::TransactionListPage;
use crate::route::{current_view, navigate, set_view_hash, Route, View};
use crate::store::{use_query, Entity};

/// Authenticated shell. The visible panel follows `location.hash` and
/// selecting a panel writes the hash back.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let view = use_state(current_view);
    let notifier = use_notifier();
    let profile = use_query(Entity::Profile, (), |api, ()| async move { api.profile().await });

    {
        let view = view.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    EventListener::new(&window, "hashchange", move |_| view.set(current_view()))
                });
                move || drop(listener)
            },
            (),
        );
    }

    use_effect_with_deps(
        |view| {
            set_view_hash(*view);
            || ()
        },
        *view,
    );

    let on_select = {
        let view = view.clone();
        Callback::from(move |next: View| view.set(next))
    };

    let on_logout = Callback::from(move |_| {
        let notifier = notifier.clone();
        spawn_local(async move {
            match ApiClient::default().logout().await {
                Ok(()) => {
                    log::info!("logged out");
                    navigate(Route::Landing);
                }
                Err(err) => {
                    log::error!("logout failed: {}", err);
                    notifier.error(err.user_message());
                }
            }
        });
    });

    let profile_picture = profile
        .data()
        .map(|p| p.profile_picture.clone())
        .filter(|src| !src.is_empty());

    let content = match *view {
        View::Overview => html! { <DashboardPage /> },
        View::Transactions => html! { <TransactionListPage /> },
        View::Add => html! { <TransactionFormPage /> },
        View::Reports => html! { <ReportsPage /> },
        View::Budget => html! { <BudgetPage /> },
        View::Goals => html! { <GoalsPage /> },
        View::Profile => html! { <ProfilePage /> },
        View::Groups => html! { <GroupsPage /> },
    };

    html! {
        <Layout active={*view} on_select={on_select} on_logout={on_logout} profile_picture={profile_picture}>
            { content }
        </Layout>
    }
}
