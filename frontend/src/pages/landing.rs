use yew::prelude::*;

use crate::components::auth::{AuthForm, AuthForms};
use crate::components::icons::{icon_menu, icon_x};
use crate::route::Route;

const FEATURES: [(&str, &str); 3] = [
    (
        "Real-time Monitoring",
        "Track your daily, weekly, and monthly expenses with live updates.",
    ),
    (
        "Budgets and Goals",
        "Set spending limits per category and watch your savings grow towards a target.",
    ),
    (
        "Visual Reports",
        "Generate charts and reports to analyze your spending patterns.",
    ),
];

fn scroll_to(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    {
        element.scroll_into_view();
    }
}

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let auth = use_state(|| None::<AuthForm>);
    let menu_open = use_state(|| false);

    let show_auth = {
        let auth = auth.clone();
        let menu_open = menu_open.clone();
        move |form: AuthForm| {
            let auth = auth.clone();
            let menu_open = menu_open.clone();
            Callback::from(move |_: MouseEvent| {
                menu_open.set(false);
                auth.set(Some(form));
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            })
        }
    };

    let section_link = {
        let menu_open = menu_open.clone();
        move |id: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                scroll_to(id);
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let auth_button = "inline-block px-4 md:px-5 py-2 md:py-2.5 text-white rounded-full text-[14px] md:text-[15px] font-medium border-[1.5px] border-[#20D982] bg-[#20D982]/10 transition-all duration-300 hover:bg-[#20D982] hover:text-black";
    let nav_link = "inline-block px-3 md:px-5 py-2 md:py-2.5 text-white rounded-full text-[14px] md:text-[15px] font-medium transition-all duration-300 hover:bg-[#83bce3] hover:text-black";

    html! {
        <div class="flex flex-col min-h-screen bg-black font-extralight">
            <header class="fixed w-full z-50 bg-[#280832] h-[60px] md:h-[70px] shadow-lg">
                <div class="container mx-auto px-4 h-full flex justify-between items-center">
                    <a href={Route::Landing.path()} class="text-2xl font-black tracking-tight text-white">
                        {"Money"}<span class="text-[#83bce3]">{"Mind"}</span>
                    </a>
                    <nav class="hidden md:flex gap-3">
                        <a href="#services" class={nav_link} onclick={section_link("services")}>{"Services"}</a>
                        <a href="#about" class={nav_link} onclick={section_link("about")}>{"About"}</a>
                    </nav>
                    <div class="hidden md:flex gap-2">
                        <button class={auth_button} onclick={show_auth(AuthForm::SignIn)}>{"Sign In"}</button>
                        <button class={auth_button} onclick={show_auth(AuthForm::SignUp)}>{"Sign Up"}</button>
                    </div>
                    <button class="md:hidden text-white" onclick={toggle_menu} aria-label="Menu">
                        { if *menu_open { icon_x() } else { icon_menu() } }
                    </button>
                </div>
                if *menu_open {
                    <div class="md:hidden bg-[#280832] px-4 pb-4 space-y-2">
                        <a href="#services" class={classes!(nav_link, "block")} onclick={section_link("services")}>{"Services"}</a>
                        <a href="#about" class={classes!(nav_link, "block")} onclick={section_link("about")}>{"About"}</a>
                        <button class={classes!(auth_button, "w-full")} onclick={show_auth(AuthForm::SignIn)}>{"Sign In"}</button>
                        <button class={classes!(auth_button, "w-full")} onclick={show_auth(AuthForm::SignUp)}>{"Sign Up"}</button>
                    </div>
                }
            </header>

            <main class="flex flex-col items-center justify-center flex-1 px-4 pt-[110px] pb-12 min-h-[80vh]">
                {
                    match *auth {
                        Some(form) => html! { <AuthForms initial={form} /> },
                        None => html! {
                            <div class="text-center max-w-3xl">
                                <h1 class="text-[28px] md:text-[60px] text-white font-normal mb-4 leading-tight">
                                    {"Effortless Financial Management at "}
                                    <span class="text-[#bbe86f]">{"Your Fingertips"}</span>
                                </h1>
                                <p class="text-white leading-relaxed mb-8 text-[15px] md:text-base">
                                    {"Create an account today and begin tracking all your expenses, organizing transactions, and monitoring your budgets in real time, helping you stay in control of your financial health."}
                                </p>
                                <button
                                    class="bg-[#20D982] text-black px-6 md:px-8 py-3 md:py-4 rounded-full text-[14px] md:text-[15px] transition-all duration-300 hover:bg-[#bbe86f]"
                                    onclick={show_auth(AuthForm::SignUp)}
                                >
                                    {"Get Started Now"}
                                </button>
                            </div>
                        },
                    }
                }
            </main>

            <section id="services" class="bg-[#280832] py-10 px-4">
                <h2 class="text-2xl md:text-3xl font-bold text-center text-white mb-8">{"Our Services"}</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 max-w-6xl mx-auto">
                    { for FEATURES.iter().map(|(title, description)| html! {
                        <div class="bg-[#83bce3] rounded-xl p-6 text-center shadow-lg">
                            <h3 class="text-lg md:text-xl font-semibold text-black mb-2">{ *title }</h3>
                            <p class="text-black text-sm md:text-base">{ *description }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="about" class="bg-[#1d0324] py-5 text-center">
                <h3 class="text-white text-xl md:text-2xl font-semibold mb-3">{"About Us"}</h3>
                <p class="text-white max-w-2xl mx-auto px-4 text-sm md:text-base">
                    {"MoneyMind is dedicated to helping you manage your finances with ease. Our mission is to make budgeting stress-free."}
                </p>
            </section>

            <footer class="bg-[#1d0324] text-white py-5 text-center">
                <hr class="border-white/20 max-w-6xl mx-auto mb-4" />
                <p class="text-sm md:text-base">{"© 2024 MoneyMind. All rights reserved."}</p>
                <div class="mt-2 flex flex-col md:flex-row gap-1 md:gap-4 justify-center items-center text-xs md:text-sm">
                    <a href={Route::Privacy.path()} class="text-[#20D982] hover:text-[#bbe86f] underline">{"Privacy Policy"}</a>
                    <span class="hidden md:inline-block text-gray-500">{"|"}</span>
                    <a href={Route::Terms.path()} class="text-[#20D982] hover:text-[#bbe86f] underline">{"Terms of Service"}</a>
                    <span class="hidden md:inline-block text-gray-500">{"|"}</span>
                    <a href={Route::Status.path()} class="text-[#20D982] hover:text-[#bbe86f] underline">{"Service Status"}</a>
                </div>
            </footer>
        </div>
    }
}
