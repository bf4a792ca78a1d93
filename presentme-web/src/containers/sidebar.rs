use crate::api::PresentMeClient;
use crate::components::nav_item::SidebarNavItem;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

const COLLAPSED_KEY: &str = "presentme.sidebar.collapsed";

/// Navigation rail: brand block, page links with pending/verified badges,
/// collapse toggle (persisted across reloads), and logout.
///
/// On mount it warms the badge counts, fetching each list endpoint only
/// when its collection has not been loaded yet this session. Only the count
/// is written to the store; the list pages own the full payload.
#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let collapsed = use_state(|| LocalStorage::get(COLLAPSED_KEY).unwrap_or(false));
    let navigator = use_navigator();

    {
        let pending_loaded = state.institute.pending.is_some();
        let verified_loaded = state.institute.verified.is_some();
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = PresentMeClient::shared();
                if !pending_loaded {
                    match client.fetch_pending_institutes().await {
                        Ok(collection) => {
                            dispatch.reduce_mut(|state| state.set_pending_count(collection.len()));
                        }
                        Err(err) => web_sys::console::error_1(
                            &format!("pending count fetch failed: {err}").into(),
                        ),
                    }
                }
                if !verified_loaded {
                    match client.fetch_verified_institutes().await {
                        Ok(collection) => {
                            dispatch.reduce_mut(|state| state.set_verified_count(collection.len()));
                        }
                        Err(err) => web_sys::console::error_1(
                            &format!("verified count fetch failed: {err}").into(),
                        ),
                    }
                }
            });
            || ()
        });
    }

    let on_toggle = {
        let collapsed = collapsed.clone();
        Callback::from(move |_: MouseEvent| {
            let next = !*collapsed;
            collapsed.set(next);
            if let Err(err) = LocalStorage::set(COLLAPSED_KEY, next) {
                web_sys::console::error_1(&format!("sidebar state not saved: {err}").into());
            }
        })
    };

    let on_logout = {
        let dispatch = dispatch;
        Callback::from(move |_: MouseEvent| {
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = PresentMeClient::shared();
                if let Err(err) = client.logout().await {
                    web_sys::console::error_1(&format!("logout failed: {err}").into());
                }
                // Local session state is dropped regardless of the network
                // outcome; the cookie is the server's problem.
                dispatch.set(AppState::default());
                if let Some(navigator) = navigator {
                    navigator.push(&MainRoute::SignIn);
                }
            });
        })
    };

    let is_collapsed = *collapsed;
    let counts = state.institute.counts;
    let badge_for = |route: &MainRoute| match route {
        MainRoute::PendingInstitutes => Some(counts.pending),
        MainRoute::VerifiedInstitutes => Some(counts.verified),
        _ => None,
    };

    html! {
        <aside class={classes!(
            "flex", "flex-col", "min-h-screen", "bg-white", "border-r", "border-gray-100",
            "transition-all",
            if is_collapsed { "w-20" } else { "w-64" }
        )}>
            <div class={classes!("h-24", "flex", "items-center", if is_collapsed { "justify-center" } else { "px-4" })}>
                <div class="w-10 h-10 rounded-md bg-linear-to-br from-[#0BCCEB] to-[#0A80F5] flex items-center justify-center text-white font-semibold mr-3">
                    { "PM" }
                </div>
                if !is_collapsed {
                    <div>
                        <div class="font-semibold">{ "Present-Me" }</div>
                        <div class="text-xs text-gray-500">{ "Admin Panel" }</div>
                    </div>
                }
            </div>

            <nav class="flex-1 px-2 py-4 space-y-1">
                { for MainRoute::sidebar_routes().into_iter().map(|route| {
                    let badge = badge_for(&route);
                    html! { <SidebarNavItem {route} collapsed={is_collapsed} {badge} /> }
                }) }
            </nav>

            <div class="p-4 space-y-2">
                <button
                    onclick={on_toggle}
                    class="flex items-center gap-3 w-full px-3 py-2 rounded-lg text-sm text-gray-600 hover:bg-gray-50"
                >
                    <Icon icon_id={IconId::HeroiconsOutlineBars3} class="w-5 h-5" />
                    if !is_collapsed {
                        <span>{ "Collapse" }</span>
                    }
                </button>
                <button
                    onclick={on_logout}
                    class="flex items-center gap-3 w-full px-3 py-2 rounded-lg text-sm text-red-600 hover:bg-red-50"
                >
                    <Icon icon_id={IconId::HeroiconsOutlineArrowRightOnRectangle} class="w-5 h-5" />
                    if !is_collapsed {
                        <span>{ "Logout" }</span>
                    }
                </button>
            </div>
        </aside>
    }
}
