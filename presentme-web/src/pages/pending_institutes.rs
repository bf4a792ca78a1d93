use crate::api::PresentMeClient;
use crate::components::{loading::Loading, status_badge::StatusBadge};
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use shared::models::InstituteSummary;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

pub(crate) const EMPTY_MESSAGE: &str = "No pending institutes found.";

#[derive(Properties, PartialEq)]
pub struct PendingListViewProps {
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
    pub institutes: Vec<InstituteSummary>,
    pub on_view: Callback<String>,
}

/// Presentational list body: spinner while loading, inline error, the
/// empty-state message, or one review card per institute.
#[function_component(PendingListView)]
pub fn pending_list_view(props: &PendingListViewProps) -> Html {
    if props.loading {
        return html! { <Loading /> };
    }
    if let Some(message) = &props.error {
        return html! {
            <div class="bg-red-50 border border-red-200 text-red-600 text-sm rounded-lg px-4 py-3">
                { message.clone() }
            </div>
        };
    }
    if props.institutes.is_empty() {
        return html! { <p class="text-gray-500">{ EMPTY_MESSAGE }</p> };
    }

    html! {
        <div class="space-y-6">
            { for props.institutes.iter().cloned().map(|institute| {
                let id = institute.institution_id.clone();
                let on_view = props.on_view.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_view.emit(id.clone()));
                html! {
                    <div class="bg-white rounded-2xl p-6 shadow-sm border border-gray-100">
                        <div class="flex flex-col lg:flex-row items-start justify-between gap-4 mb-6">
                            <div class="flex items-start gap-4">
                                <div class="w-12 h-12 bg-indigo-100 rounded-lg flex items-center justify-center shrink-0">
                                    <Icon icon_id={IconId::HeroiconsOutlineBuildingOffice2} class="w-6 h-6 text-indigo-600" />
                                </div>
                                <div>
                                    <h3 class="text-lg font-semibold text-gray-800">
                                        { &institute.institution_name }
                                    </h3>
                                    <div class="flex flex-wrap items-center gap-2 mt-2">
                                        <StatusBadge status={institute.status} />
                                        <span class="text-xs bg-gray-100 text-gray-600 px-2 py-1 rounded-full">
                                            { &institute.kind }
                                        </span>
                                    </div>
                                </div>
                            </div>
                            <button
                                {onclick}
                                class="flex items-center gap-2 px-4 py-2 border border-gray-200 rounded-lg text-sm hover:bg-gray-50"
                            >
                                <Icon icon_id={IconId::HeroiconsOutlineEye} class="w-4 h-4" />
                                { "View Details" }
                            </button>
                        </div>

                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-6">
                            <div class="space-y-4">
                                <div class="flex items-start gap-3">
                                    <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="w-5 h-5 text-gray-400 mt-0.5" />
                                    <div>
                                        <div class="text-xs text-gray-500">{ "Address" }</div>
                                        <div class="text-sm text-gray-800 mt-0.5">{ &institute.address }</div>
                                    </div>
                                </div>
                                <div class="flex items-start gap-3">
                                    <Icon icon_id={IconId::HeroiconsOutlineEnvelope} class="w-5 h-5 text-gray-400 mt-0.5" />
                                    <div>
                                        <div class="text-xs text-gray-500">{ "Email" }</div>
                                        <div class="text-sm text-gray-800 mt-0.5">{ &institute.email_id }</div>
                                    </div>
                                </div>
                                <div class="flex items-start gap-3">
                                    <Icon icon_id={IconId::HeroiconsOutlinePhone} class="w-5 h-5 text-gray-400 mt-0.5" />
                                    <div>
                                        <div class="text-xs text-gray-500">{ "Phone" }</div>
                                        <div class="text-sm text-gray-800 mt-0.5">{ &institute.phone }</div>
                                    </div>
                                </div>
                            </div>
                            <div class="space-y-4">
                                <div class="flex items-start gap-3">
                                    <Icon icon_id={IconId::HeroiconsOutlineUser} class="w-5 h-5 text-gray-400 mt-0.5" />
                                    <div>
                                        <div class="text-xs text-gray-500">{ "Contact Person" }</div>
                                        <div class="text-sm text-gray-800 mt-0.5">{ institute.contact_name() }</div>
                                    </div>
                                </div>
                                <div class="flex items-start gap-3">
                                    <Icon icon_id={IconId::HeroiconsOutlineCalendar} class="w-5 h-5 text-gray-400 mt-0.5" />
                                    <div>
                                        <div class="text-xs text-gray-500">{ "Registered Date" }</div>
                                        <div class="text-sm text-gray-800 mt-0.5">{ &institute.created_at }</div>
                                    </div>
                                </div>
                                <div class="flex items-start gap-3">
                                    <Icon icon_id={IconId::HeroiconsOutlineUsers} class="w-5 h-5 text-gray-400 mt-0.5" />
                                    <div>
                                        <div class="text-xs text-gray-500">{ "Expected Students" }</div>
                                        <div class="text-sm text-gray-800 mt-0.5">
                                            { format!("{} students", institute.expected_students) }
                                        </div>
                                    </div>
                                </div>
                            </div>
                        </div>

                        if !institute.bio.is_empty() {
                            <div class="border-t pt-4">
                                <div class="text-xs text-gray-500 mb-1">{ "Description" }</div>
                                <p class="text-sm text-gray-700">{ &institute.bio }</p>
                            </div>
                        }
                    </div>
                }
            }) }
        </div>
    }
}

/// Pending-institute list. Fetches the collection on mount and writes it
/// into the store, which is what lets the detail page short-circuit.
#[function_component(PendingInstitutesPage)]
pub fn pending_institutes_page() -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let loading = use_state(|| state.institute.pending.is_none());
    let error = use_state(|| None::<String>);
    let navigator = use_navigator();

    {
        let dispatch = dispatch;
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = PresentMeClient::shared();
                match client.fetch_pending_institutes().await {
                    Ok(collection) => {
                        dispatch.reduce_mut(|state| state.set_pending_institutes(collection));
                        error.set(None);
                    }
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Error fetching pending institutes: {err}").into(),
                        );
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let institutes: Vec<InstituteSummary> = state
        .institute
        .pending
        .as_ref()
        .map(|collection| collection.data.clone())
        .unwrap_or_default();

    let on_view = {
        let navigator = navigator;
        Callback::from(move |id: String| {
            if let Some(navigator) = &navigator {
                navigator.push(&MainRoute::PendingInstituteDetails { id });
            }
        })
    };

    html! {
        <div>
            <div class="mb-6">
                <h2 class="text-2xl font-semibold text-gray-800">{ "Pending Institutes" }</h2>
                <p class="text-sm text-gray-500">{ "Review and verify institute registration requests" }</p>
            </div>
            <PendingListView
                loading={*loading}
                error={(*error).clone()}
                {institutes}
                {on_view}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_message_is_the_literal_copy() {
        assert_eq!(EMPTY_MESSAGE, "No pending institutes found.");
    }
}
