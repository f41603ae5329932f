use serde_json::Value;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{ApiClient, BackendStatus};
use crate::config::api_base_url;
use crate::route::Route;
use crate::scope::RequestScope;

const HOME_LINK: &str = "inline-block px-6 py-3 bg-[#280832] text-white rounded-lg border border-[#20D982]/30 hover:bg-[#83bce3] hover:text-black transition-all duration-300 shadow-[0_0_5px_#83bce3]";
const HEADLINE: &str = "font-bold bg-gradient-to-r from-[#83bce3] to-[#20D982] inline-block text-transparent bg-clip-text";

/// Shown when the session check fails.
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center h-screen bg-black text-white px-6 text-center">
            <h1 class={classes!(HEADLINE, "text-5xl")}>{"401 - Unauthorized"}</h1>
            <p class="mt-6 text-lg text-gray-300">{"You do not have permission to view this page. Please log in."}</p>
            <div class="mt-8">
                <a href={Route::Landing.path()} class={HOME_LINK}>{"Back to Login"}</a>
            </div>
        </div>
    }
}

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center h-screen bg-black text-white px-6 text-center space-y-6">
            <h1 class={classes!(HEADLINE, "text-[120px]")}>{"404"}</h1>
            <p class="text-xl text-gray-300">{"Oops! The page you're looking for doesn't exist."}</p>
            <a href={Route::Landing.path()} class={HOME_LINK}>{"Back to Home"}</a>
        </div>
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Probe {
    Checking,
    Reached(BackendStatus),
    Offline(String),
}

fn pretty(body: &Value) -> String {
    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
}

/// Connectivity probe against `GET /api/db`.
#[function_component(StatusPage)]
pub fn status_page() -> Html {
    let probe = use_state(|| Probe::Checking);

    {
        let probe = probe.clone();
        use_effect_with_deps(
            move |_| {
                let scope = RequestScope::new();
                let client = ApiClient::default().with_signal(scope.signal());
                spawn_local(async move {
                    match client.backend_status().await {
                        Ok(status) => probe.set(Probe::Reached(status)),
                        Err(err) if err.is_aborted() => {}
                        Err(err) => {
                            log::warn!("backend unreachable: {}", err);
                            probe.set(Probe::Offline(err.to_string()));
                        }
                    }
                });
                move || drop(scope)
            },
            (),
        );
    }

    let base = api_base_url();
    let result = match &*probe {
        Probe::Checking => html! { <p class="text-gray-400">{"Checking backend connection..."}</p> },
        Probe::Reached(BackendStatus::Connected(body)) => html! {
            <div>
                <p class="text-green-500 font-semibold mb-2">{"Backend is connected and responding!"}</p>
                <pre class="bg-gray-800 p-4 rounded-lg overflow-x-auto text-sm text-green-200">{ pretty(body) }</pre>
            </div>
        },
        Probe::Reached(BackendStatus::DatabaseError(body)) => html! {
            <div>
                <p class="text-yellow-400 font-semibold mb-2">{"Backend is reachable but reported a database issue."}</p>
                <pre class="bg-gray-800 p-4 rounded-lg overflow-x-auto text-sm text-yellow-200">{ pretty(body) }</pre>
            </div>
        },
        Probe::Offline(reason) => html! {
            <div>
                <p class="text-red-500 font-semibold">{"Backend is not responding (server offline or unreachable)."}</p>
                <p class="text-red-300 mt-2 text-sm">
                    {"Error: "}<code class="bg-gray-900 px-2 py-1 rounded">{ reason.clone() }</code>
                </p>
            </div>
        },
    };

    html! {
        <div class="min-h-screen bg-black text-white p-8 font-sans">
            <h2 class="text-2xl text-green-400 font-bold mb-4">{"Backend Connectivity Check"}</h2>
            <div class="mb-6">
                <p class="text-gray-300 mb-2"><span class="text-white font-semibold">{"Backend URL: "}</span>{ base }</p>
                <ul class="list-disc pl-6 text-blue-400">
                    <li><a href={format!("{}/api/ping", base)} target="_blank" rel="noopener noreferrer" class="hover:underline">{"/api/ping"}</a></li>
                    <li><a href={format!("{}/api/db", base)} target="_blank" rel="noopener noreferrer" class="hover:underline">{"/api/db"}</a></li>
                </ul>
            </div>
            { result }
        </div>
    }
}
