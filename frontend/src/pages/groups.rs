use yew::prelude::*;

use crate::components::page_shell;

#[function_component(GroupsPage)]
pub fn groups_page() -> Html {
    page_shell(
        "Groups",
        html! {},
        html! {
            <div class="bg-[#280832] rounded-xl p-8 shadow-lg text-center">
                <div class="flex justify-center text-[#83bce3] mb-4">{ crate::components::icons::icon_users() }</div>
                <h3 class="text-2xl font-semibold text-white mb-3">{"Coming Soon!"}</h3>
                <p class="text-gray-400 max-w-md mx-auto">
                    {"Group expense tracking and shared budgets are on the way. Stay tuned for new features that will help you manage finances with friends and family."}
                </p>
            </div>
        },
    )
}
