use crate::api::PresentMeClient;
use crate::components::{
    institute_profile::{InstituteDocuments, InstituteProfile},
    loading::Loading,
    status_badge::StatusBadge,
};
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::workflow::{self, CollectionKind, Lookup};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
pub struct VerifiedInstituteDetailsProps {
    pub id: String,
}

/// Detail view for one verified institute: same store-first lookup as the
/// pending page, read-only (no status controls), with a shortcut to chat.
#[function_component(VerifiedInstituteDetailsPage)]
pub fn verified_institute_details_page(props: &VerifiedInstituteDetailsProps) -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let lookup = use_state(|| Lookup::CheckingStore);
    let navigator = use_navigator();

    {
        let id = props.id.clone();
        let cached = state.institute.verified.clone();
        let dispatch = dispatch;
        let lookup = lookup.clone();
        use_effect_with(props.id.clone(), move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            dispatch.reduce_mut(|state| state.set_selected_institute(id.clone()));
            {
                let dispatch = dispatch.clone();
                spawn_local(async move {
                    let client = PresentMeClient::shared();
                    let (resolved, fetched) = workflow::resolve_institute(
                        &client,
                        cached.as_ref(),
                        CollectionKind::Verified,
                        &id,
                    )
                    .await;
                    if let Some(collection) = fetched {
                        dispatch.reduce_mut(|state| state.set_verified_institutes(collection));
                    }
                    lookup.set(resolved);
                });
            }
            move || dispatch.reduce_mut(AppState::clear_selected_institute)
        });
    }

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&MainRoute::VerifiedInstitutes);
            }
        })
    };

    let on_chat = {
        let navigator = navigator;
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&MainRoute::Chat);
            }
        })
    };

    match &*lookup {
        Lookup::CheckingStore | Lookup::Fetching => html! { <Loading /> },
        Lookup::NotFound => html! {
            <div class="bg-white rounded-lg p-6 text-center">
                <p class="text-gray-500 text-lg">{ "Institute not found" }</p>
                <button
                    onclick={on_back}
                    class="mt-4 bg-cyan-500 hover:bg-cyan-600 text-white px-4 py-2 rounded-lg"
                >
                    { "Back to List" }
                </button>
            </div>
        },
        Lookup::Failed(message) => html! {
            <div class="bg-white rounded-lg p-6 text-center">
                <p class="text-red-600">{ format!("Failed to load institute details: {message}") }</p>
                <button
                    onclick={on_back}
                    class="mt-4 bg-cyan-500 hover:bg-cyan-600 text-white px-4 py-2 rounded-lg"
                >
                    { "Back to List" }
                </button>
            </div>
        },
        Lookup::Found(institute) => html! {
            <div class="max-w-7xl mx-auto">
                <button
                    onclick={on_back}
                    class="mb-4 flex items-center gap-2 text-gray-600 hover:text-gray-800"
                >
                    <Icon icon_id={IconId::HeroiconsOutlineArrowLeft} class="w-5 h-5" />
                    <span>{ "Back to List" }</span>
                </button>

                <div class="bg-white rounded-xl shadow-sm p-6 mb-6">
                    <div class="flex items-start justify-between gap-4">
                        <div class="flex items-start gap-4">
                            <div class="w-16 h-16 bg-indigo-100 rounded-xl flex items-center justify-center shrink-0 text-indigo-600 text-2xl font-semibold">
                                {
                                    institute
                                        .institution_name
                                        .chars()
                                        .next()
                                        .map(|c| c.to_uppercase().to_string())
                                        .unwrap_or_default()
                                }
                            </div>
                            <div>
                                <h1 class="text-2xl font-semibold text-gray-800">
                                    { &institute.institution_name }
                                </h1>
                                <p class="text-sm text-gray-500 mt-1">{ &institute.kind }</p>
                                <div class="mt-2">
                                    <StatusBadge status={institute.status} />
                                </div>
                            </div>
                        </div>
                        <button
                            onclick={on_chat}
                            class="flex items-center gap-2 px-4 py-2 bg-indigo-500 hover:bg-indigo-600 text-white rounded-lg text-sm font-medium"
                        >
                            <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="w-4 h-4" />
                            { "Message" }
                        </button>
                    </div>
                </div>

                <div class="bg-white rounded-xl shadow-sm mb-6">
                    <InstituteProfile institute={institute.clone()} />
                    <InstituteDocuments institute={institute.clone()} />
                </div>
            </div>
        },
    }
}
