use crate::api::PresentMeClient;
use crate::components::{
    institute_profile::{InstituteDocuments, InstituteProfile},
    loading::Loading,
    status_badge::StatusBadge,
};
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::workflow::{self, CollectionKind, Lookup};
use shared::models::{InstituteStatus, InstituteSummary};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Details,
    Documents,
}

#[derive(Properties, PartialEq)]
pub struct PendingInstituteDetailsProps {
    pub id: String,
}

/// Detail view for one pending institute: store-first lookup, tabbed
/// details/documents body, and the approve/reject controls.
#[function_component(PendingInstituteDetailsPage)]
pub fn pending_institute_details_page(props: &PendingInstituteDetailsProps) -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let lookup = use_state(|| Lookup::CheckingStore);
    let active_tab = use_state(|| Tab::Details);
    let submitting = use_state(|| false);
    let submit_error = use_state(|| None::<String>);
    let navigator = use_navigator();

    {
        let id = props.id.clone();
        let cached = state.institute.pending.clone();
        let dispatch = dispatch.clone();
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
                    let (resolved, fetched) =
                        workflow::resolve_institute(&client, cached.as_ref(), CollectionKind::Pending, &id)
                            .await;
                    if let Some(collection) = fetched {
                        dispatch.reduce_mut(|state| state.set_pending_institutes(collection));
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
                navigator.push(&MainRoute::PendingInstitutes);
            }
        })
    };

    match &*lookup {
        Lookup::CheckingStore | Lookup::Fetching => html! { <Loading /> },
        Lookup::NotFound => html! {
            <div class="bg-white rounded-lg p-6 text-center">
                <p class="text-gray-500">{ "Institute not found" }</p>
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
        Lookup::Found(institute) => {
            let institute = institute.clone();
            html! {
                <FoundView
                    {institute}
                    active_tab={*active_tab}
                    on_tab_change={{
                        let active_tab = active_tab.clone();
                        Callback::from(move |tab| active_tab.set(tab))
                    }}
                    submitting={*submitting}
                    submit_error={(*submit_error).clone()}
                    on_back={on_back}
                    on_decision={{
                        let id = props.id.clone();
                        let submitting = submitting.clone();
                        let submit_error = submit_error.clone();
                        let navigator = navigator;
                        let dispatch = dispatch;
                        Callback::from(move |status: InstituteStatus| {
                            submitting.set(true);
                            submit_error.set(None);
                            let id = id.clone();
                            let submitting = submitting.clone();
                            let submit_error = submit_error.clone();
                            let navigator = navigator.clone();
                            let dispatch = dispatch.clone();
                            spawn_local(async move {
                                let client = PresentMeClient::shared();
                                match workflow::submit_status_change(&client, &id, status).await {
                                    Ok(destination) => {
                                        dispatch.reduce_mut(AppState::invalidate_institutes);
                                        if let Some(navigator) = &navigator {
                                            navigator.push(&destination);
                                        }
                                    }
                                    Err(err) => {
                                        submit_error.set(Some(err.to_string()));
                                        submitting.set(false);
                                    }
                                }
                            });
                        })
                    }}
                />
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct FoundViewProps {
    institute: InstituteSummary,
    active_tab: Tab,
    on_tab_change: Callback<Tab>,
    submitting: bool,
    submit_error: Option<String>,
    on_back: Callback<MouseEvent>,
    on_decision: Callback<InstituteStatus>,
}

#[function_component(FoundView)]
fn found_view(props: &FoundViewProps) -> Html {
    let institute = &props.institute;

    let tab_button = |tab: Tab, label: &str| {
        let on_tab_change = props.on_tab_change.clone();
        let is_active = props.active_tab == tab;
        let onclick = Callback::from(move |_: MouseEvent| on_tab_change.emit(tab));
        html! {
            <button
                {onclick}
                class={classes!(
                    "px-6", "py-3", "text-sm", "font-medium",
                    if is_active { "text-indigo-600" } else { "text-gray-500" },
                    if is_active { "border-b-2" } else { "" },
                    if is_active { "border-indigo-600" } else { "" }
                )}
            >
                { label }
            </button>
        }
    };

    let approve = {
        let on_decision = props.on_decision.clone();
        Callback::from(move |_: MouseEvent| on_decision.emit(InstituteStatus::Verified))
    };
    let reject = {
        let on_decision = props.on_decision.clone();
        Callback::from(move |_: MouseEvent| on_decision.emit(InstituteStatus::Rejected))
    };

    html! {
        <div class="max-w-7xl mx-auto">
            <button
                onclick={props.on_back.clone()}
                class="mb-4 flex items-center gap-2 text-gray-600 hover:text-gray-800"
            >
                <Icon icon_id={IconId::HeroiconsOutlineArrowLeft} class="w-5 h-5" />
                <span>{ "Back to List" }</span>
            </button>

            <div class="bg-white rounded-xl shadow-sm p-6 mb-6">
                <div class="flex items-start gap-4">
                    <div class="w-16 h-16 bg-indigo-100 rounded-xl flex items-center justify-center shrink-0">
                        <Icon icon_id={IconId::HeroiconsOutlineBuildingOffice2} class="w-8 h-8 text-indigo-600" />
                    </div>
                    <div>
                        <h1 class="text-2xl font-semibold text-gray-800">{ &institute.institution_name }</h1>
                        <p class="text-sm text-gray-500 mt-1">{ &institute.kind }</p>
                        <div class="mt-2">
                            <StatusBadge status={institute.status} />
                        </div>
                    </div>
                </div>
            </div>

            <div class="bg-white rounded-xl shadow-sm mb-6">
                <div class="border-b flex">
                    { tab_button(Tab::Details, "Details") }
                    { tab_button(Tab::Documents, "Documents") }
                </div>
                {
                    match props.active_tab {
                        Tab::Details => html! { <InstituteProfile institute={institute.clone()} /> },
                        Tab::Documents => html! { <InstituteDocuments institute={institute.clone()} /> },
                    }
                }
            </div>

            if let Some(message) = &props.submit_error {
                <div class="mb-4 text-sm text-red-600 bg-red-50 border border-red-200 rounded-lg px-3 py-2">
                    { message.clone() }
                </div>
            }

            <div class="flex gap-3">
                <button
                    onclick={approve}
                    disabled={props.submitting}
                    class="flex-1 bg-emerald-500 hover:bg-emerald-600 disabled:opacity-60 text-white px-6 py-3 rounded-lg font-medium"
                >
                    { if props.submitting { "Working..." } else { "Approve Institute" } }
                </button>
                <button
                    onclick={reject}
                    disabled={props.submitting}
                    class="flex-1 bg-red-400 hover:bg-red-500 disabled:opacity-60 text-white px-6 py-3 rounded-lg font-medium"
                >
                    { "Reject" }
                </button>
            </div>
        </div>
    }
}
