use crate::models::app_state::AppState;
use crate::routes::page_title;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_location;
use yewdux::prelude::use_selector;

/// Top bar: page title derived from the current path plus the signed-in
/// admin's name and email.
#[function_component(Header)]
pub fn header() -> Html {
    let location = use_location();
    let user = use_selector(|state: &AppState| state.user.clone());

    let title = location
        .as_ref()
        .map_or("Dashboard", |location| page_title(location.path()));

    html! {
        <header class="h-16 bg-white border-b border-gray-100 flex items-center justify-between px-4 md:px-6">
            <h1 class="text-lg font-semibold text-gray-800">{ title }</h1>
            {
                (*user).as_ref().map_or_else(|| html! {}, |user| html! {
                    <div class="flex items-center gap-3">
                        <div class="text-right hidden sm:block">
                            <div class="text-sm font-medium text-gray-800">
                                { user.admin.full_name() }
                            </div>
                            <div class="text-xs text-gray-500">{ &user.admin.email_id }</div>
                        </div>
                        <div class="w-9 h-9 rounded-full bg-linear-to-br from-[#0BCCEB] to-[#0A80F5] flex items-center justify-center text-white">
                            <Icon icon_id={IconId::HeroiconsOutlineUserCircle} class="w-5 h-5" />
                        </div>
                    </div>
                })
            }
        </header>
    }
}
