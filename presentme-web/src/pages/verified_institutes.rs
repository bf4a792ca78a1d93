use crate::api::PresentMeClient;
use crate::components::loading::Loading;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use shared::models::InstituteSummary;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

/// Verified-institute list with a client-side search filter over the
/// institution name and the contact person's first name.
#[function_component(VerifiedInstitutesPage)]
pub fn verified_institutes_page() -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let search_query = use_state(String::new);
    let loading = use_state(|| state.institute.verified.is_none());
    let error = use_state(|| None::<String>);
    let navigator = use_navigator();

    {
        let dispatch = dispatch;
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = PresentMeClient::shared();
                match client.fetch_verified_institutes().await {
                    Ok(collection) => {
                        dispatch.reduce_mut(|state| state.set_verified_institutes(collection));
                        error.set(None);
                    }
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Error fetching verified institutes: {err}").into(),
                        );
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_search = {
        let search_query = search_query.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                search_query.set(input.value());
            }
        })
    };

    let filtered: Vec<InstituteSummary> = state
        .institute
        .verified
        .as_ref()
        .map(|collection| {
            collection
                .data
                .iter()
                .filter(|institute| institute.matches_query(&search_query))
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    let body = if *loading {
        html! { <Loading /> }
    } else if let Some(message) = &*error {
        html! {
            <div class="bg-red-50 border border-red-200 text-red-600 text-sm rounded-lg px-4 py-3">
                { message.clone() }
            </div>
        }
    } else if filtered.is_empty() {
        html! { <p class="text-gray-500">{ "No verified institutes found." }</p> }
    } else {
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for filtered.into_iter().map(|institute| {
                    let id = institute.institution_id.clone();
                    let navigator = navigator.clone();
                    let on_view = Callback::from(move |_: MouseEvent| {
                        if let Some(navigator) = &navigator {
                            navigator.push(&MainRoute::VerifiedInstituteDetails { id: id.clone() });
                        }
                    });
                    let initial = institute
                        .institution_name
                        .chars()
                        .next()
                        .map(|c| c.to_uppercase().to_string())
                        .unwrap_or_default();
                    html! {
                        <div class="bg-white rounded-2xl p-6 shadow-sm border border-gray-100">
                            <div class="flex items-center gap-4 mb-4">
                                <div class="w-12 h-12 rounded-full bg-indigo-100 flex items-center justify-center text-indigo-600 font-semibold">
                                    { initial }
                                </div>
                                <div>
                                    <h3 class="text-lg font-semibold text-gray-800">
                                        { &institute.institution_name }
                                    </h3>
                                    <p class="text-xs text-gray-500">{ &institute.kind }</p>
                                </div>
                            </div>
                            <div class="space-y-2 text-sm text-gray-600 mb-4">
                                <div class="flex items-center gap-2">
                                    <Icon icon_id={IconId::HeroiconsOutlineEnvelope} class="w-4 h-4 text-gray-400" />
                                    { &institute.email_id }
                                </div>
                                <div class="flex items-center gap-2">
                                    <Icon icon_id={IconId::HeroiconsOutlineUser} class="w-4 h-4 text-gray-400" />
                                    { institute.contact_name() }
                                </div>
                            </div>
                            <button
                                onclick={on_view}
                                class="w-full flex items-center justify-center gap-2 px-4 py-2 border border-gray-200 rounded-lg text-sm hover:bg-gray-50"
                            >
                                <Icon icon_id={IconId::HeroiconsOutlineEye} class="w-4 h-4" />
                                { "View Details" }
                            </button>
                        </div>
                    }
                }) }
            </div>
        }
    };

    html! {
        <div>
            <div class="mb-6">
                <h2 class="text-2xl font-semibold text-gray-800">{ "Verified Institutes" }</h2>
                <p class="text-sm text-gray-500">{ "All verified and active institutes" }</p>
            </div>

            <div class="mb-6 relative">
                <input
                    type="text"
                    placeholder="Search institutes..."
                    value={(*search_query).clone()}
                    oninput={on_search}
                    class="w-full md:w-96 px-4 py-3 pl-12 border border-gray-200 rounded-xl shadow focus:outline-none"
                />
                <Icon
                    icon_id={IconId::HeroiconsOutlineMagnifyingGlass}
                    class="w-5 h-5 text-gray-400 absolute left-4 top-1/2 -translate-y-1/2"
                />
            </div>

            { body }
        </div>
    }
}
