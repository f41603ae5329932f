use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::config::{load_settings, AppSettings};
use crate::notify::NotificationProvider;
use crate::pages::errors::{ErrorPage, NotFoundPage, StatusPage};
use crate::pages::home::HomePage;
use crate::pages::landing::LandingPage;
use crate::pages::legal::{PrivacyPage, TermsPage};
use crate::route::{current_route, navigate, Route};
use crate::scope::RequestScope;
use crate::store::StoreProvider;

#[derive(Clone, Copy, PartialEq)]
enum AuthStatus {
    Checking,
    Authenticated,
    Unauthenticated,
}

/// Renders the home shell only once the server confirms the session.
#[function_component(AuthGate)]
fn auth_gate() -> Html {
    let auth_status = use_state(|| AuthStatus::Checking);

    {
        let auth_status = auth_status.clone();
        use_effect_with_deps(
            move |_| {
                let scope = RequestScope::new();
                let client = ApiClient::default().with_signal(scope.signal());
                spawn_local(async move {
                    match client.is_authenticated().await {
                        Ok(true) => auth_status.set(AuthStatus::Authenticated),
                        Ok(false) => auth_status.set(AuthStatus::Unauthenticated),
                        Err(err) if err.is_aborted() => {}
                        Err(err) => {
                            log::warn!("session check failed: {}", err);
                            auth_status.set(AuthStatus::Unauthenticated);
                        }
                    }
                });
                move || drop(scope)
            },
            (),
        );
    }

    use_effect_with_deps(
        |status| {
            if *status == AuthStatus::Unauthenticated {
                navigate(Route::Error);
            }
            || ()
        },
        *auth_status,
    );

    match *auth_status {
        AuthStatus::Authenticated => html! { <HomePage /> },
        AuthStatus::Checking | AuthStatus::Unauthenticated => html! {
            <div class="min-h-screen flex items-center justify-center bg-black text-gray-400">
                {"Checking session..."}
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let route = use_state(current_route);
    let settings = use_state(load_settings);

    let content = match *route {
        Route::Landing => html! { <LandingPage /> },
        Route::Home => html! { <AuthGate /> },
        Route::Error => html! { <ErrorPage /> },
        Route::Status => html! { <StatusPage /> },
        Route::Privacy => html! { <PrivacyPage /> },
        Route::Terms => html! { <TermsPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    };

    html! {
        <ContextProvider<UseStateHandle<AppSettings>> context={settings}>
            <StoreProvider>
                <NotificationProvider>
                    { content }
                </NotificationProvider>
            </StoreProvider>
        </ContextProvider<UseStateHandle<AppSettings>>>
    }
}
