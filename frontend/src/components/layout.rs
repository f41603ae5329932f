use yew::prelude::*;

use crate::components::icons::*;
use crate::route::View;

struct NavItem {
    view: View,
    icon: fn() -> Html,
}

const HEADER_ITEMS: [NavItem; 3] = [
    NavItem {
        view: View::Transactions,
        icon: icon_receipt,
    },
    NavItem {
        view: View::Overview,
        icon: icon_pie_chart,
    },
    NavItem {
        view: View::Add,
        icon: icon_plus,
    },
];

const SIDE_ITEMS: [NavItem; 4] = [
    NavItem {
        view: View::Goals,
        icon: icon_target,
    },
    NavItem {
        view: View::Budget,
        icon: icon_wallet,
    },
    NavItem {
        view: View::Reports,
        icon: icon_bar_chart,
    },
    NavItem {
        view: View::Groups,
        icon: icon_users,
    },
];

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub active: View,
    pub on_select: Callback<View>,
    pub on_logout: Callback<()>,
    #[prop_or_default]
    pub profile_picture: Option<String>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let menu_open = use_state(|| false);

    let select = {
        let on_select = props.on_select.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |view: View| {
            menu_open.set(false);
            on_select.emit(view);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };

    html! {
        <div class="min-h-screen bg-black">
            <header class="fixed top-0 w-full h-[70px] bg-[#280832] flex items-center px-2 md:px-4 z-50">
                <div class="flex justify-between items-center w-full">
                    <div class="flex items-center gap-2 md:gap-4">
                        <button class="lg:hidden p-1.5 md:p-2 text-white hover:text-[#83bce3] transition-colors" onclick={toggle_menu} aria-label="Menu">
                            { icon_menu() }
                        </button>
                        <button onclick={{
                            let select = select.clone();
                            Callback::from(move |_| select.emit(View::Overview))
                        }}>
                            <span class="text-2xl font-black tracking-tight text-white">{"Money"}<span class="text-[#83bce3]">{"Mind"}</span></span>
                        </button>
                    </div>

                    <nav class="hidden lg:flex justify-center items-center">
                        <ul class="flex gap-1.5 md:gap-3 items-center">
                            { for HEADER_ITEMS.iter().map(|item| nav_button(item, props.active, &select, true)) }
                        </ul>
                    </nav>

                    <button
                        class="flex items-center justify-center w-10 h-10 rounded-full overflow-hidden border-2 border-[#83bce3] hover:border-white transition-colors text-white"
                        onclick={{
                            let select = select.clone();
                            Callback::from(move |_| select.emit(View::Profile))
                        }}
                        aria-label="Profile"
                    >
                        {
                            match &props.profile_picture {
                                Some(src) if !src.is_empty() => html! { <img src={src.clone()} alt="Profile" class="w-full h-full object-cover" /> },
                                _ => icon_user(),
                            }
                        }
                    </button>
                </div>
            </header>

            if *menu_open {
                <div class="fixed top-[70px] left-0 w-[220px] bg-[#280832] h-[calc(100vh-70px)] z-50 lg:hidden">
                    <div class="flex flex-col h-full p-4 overflow-y-auto">
                        <ul class="flex flex-col gap-2 mb-6">
                            { for HEADER_ITEMS.iter().map(|item| nav_button(item, props.active, &select, false)) }
                        </ul>
                        <ul class="space-y-2">
                            { for SIDE_ITEMS.iter().map(|item| nav_button(item, props.active, &select, false)) }
                        </ul>
                        <div class="mt-auto pt-6">
                            <button onclick={logout.clone()} class="text-white hover:text-[#83bce3] flex items-center gap-3 text-[14px] w-full hover:bg-[#83bce3]/20 px-4 py-2 rounded-full">
                                { icon_log_out() }
                                {"Log out"}
                            </button>
                        </div>
                    </div>
                </div>
            }

            <div class="flex pt-[70px]">
                <aside class="hidden lg:flex w-[170px] bg-[#280832] min-h-screen fixed left-0 flex-col justify-between p-4 pb-20 overflow-y-auto">
                    <ul class="space-y-3">
                        { for SIDE_ITEMS.iter().map(|item| nav_button(item, props.active, &select, false)) }
                    </ul>
                    <div class="mt-auto pt-6">
                        <button onclick={logout} class="text-white transition-colors hover:text-[#83bce3] flex items-center gap-2 text-sm px-3 py-2">
                            { icon_log_out() }
                            {"Log out"}
                        </button>
                    </div>
                </aside>

                <main class="flex-1 p-4 md:p-8 lg:ml-[170px]">
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}

fn nav_button(item: &NavItem, active: View, select: &Callback<View>, pill: bool) -> Html {
    let is_active = item.view == active;
    let class_name = match (is_active, pill) {
        (true, true) => "inline-flex items-center gap-1.5 px-2 md:px-5 py-1.5 md:py-2.5 text-[12px] md:text-[15px] rounded-full text-[#83bce3] font-medium shadow-lg bg-[#83bce3]/20",
        (false, true) => "inline-flex items-center gap-1.5 px-2 md:px-5 py-1.5 md:py-2.5 text-[12px] md:text-[15px] rounded-full text-white hover:text-[#83bce3] hover:bg-[#83bce3]/20",
        (true, false) => "w-full text-[#83bce3] bg-[#83bce3]/10 shadow-lg px-3 py-2 rounded-lg flex items-center gap-2 text-sm",
        (false, false) => "w-full text-white hover:text-[#83bce3] px-3 py-2 rounded-lg flex items-center gap-2 text-sm",
    };
    let select = select.clone();
    let view = item.view;
    html! {
        <li>
            <button type="button" class={class_name} onclick={Callback::from(move |_| select.emit(view))}>
                <span class="shrink-0">{ (item.icon)() }</span>
                <span>{ item.view.label() }</span>
            </button>
        </li>
    }
}
