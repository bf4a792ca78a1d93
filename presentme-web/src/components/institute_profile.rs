use shared::models::InstituteSummary;
use yew::{Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct InstituteProfileProps {
    pub institute: InstituteSummary,
}

/// Detail body shared by the pending and verified detail pages: contact
/// information, the contact person, the bio, and expected capacity.
#[function_component(InstituteProfile)]
pub fn institute_profile(props: &InstituteProfileProps) -> Html {
    let institute = &props.institute;

    html! {
        <div class="p-6 space-y-6">
            <div>
                <h3 class="text-base font-semibold text-gray-800 mb-4">{ "Institute Information" }</h3>
                <div class="bg-gray-50 rounded-lg p-4">
                    <h4 class="text-sm font-medium text-gray-700 mb-3">{ "Contact Information" }</h4>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <div class="flex items-start gap-3">
                            <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="w-5 h-5 text-gray-400 mt-0.5" />
                            <div>
                                <div class="text-xs text-gray-500 mb-1">{ "Address" }</div>
                                <div class="text-sm text-gray-800">{ &institute.address }</div>
                            </div>
                        </div>
                        <div class="space-y-4">
                            <div class="flex items-start gap-3">
                                <Icon icon_id={IconId::HeroiconsOutlineEnvelope} class="w-5 h-5 text-gray-400 mt-0.5" />
                                <div>
                                    <div class="text-xs text-gray-500 mb-1">{ "Email" }</div>
                                    <div class="text-sm text-gray-800">{ &institute.email_id }</div>
                                </div>
                            </div>
                            <div class="flex items-start gap-3">
                                <Icon icon_id={IconId::HeroiconsOutlinePhone} class="w-5 h-5 text-gray-400 mt-0.5" />
                                <div>
                                    <div class="text-xs text-gray-500 mb-1">{ "Phone" }</div>
                                    <div class="text-sm text-gray-800">{ &institute.phone }</div>
                                </div>
                            </div>
                            if let Some(website) = &institute.website {
                                <div class="flex items-start gap-3">
                                    <Icon icon_id={IconId::HeroiconsOutlineGlobeAlt} class="w-5 h-5 text-gray-400 mt-0.5" />
                                    <div>
                                        <div class="text-xs text-gray-500 mb-1">{ "Website" }</div>
                                        <a href={website.clone()} class="text-sm text-indigo-600 hover:underline">
                                            { website }
                                        </a>
                                    </div>
                                </div>
                            }
                        </div>
                    </div>
                </div>
            </div>

            <div>
                <h4 class="text-sm font-medium text-gray-700 mb-3">{ "Contact Person Details" }</h4>
                <div class="bg-gray-50 rounded-lg p-4">
                    <div class="flex items-start gap-3">
                        <Icon icon_id={IconId::HeroiconsOutlineUser} class="w-5 h-5 text-gray-400 mt-0.5" />
                        <div>
                            <div class="text-xs text-gray-500 mb-1">{ "Name" }</div>
                            <div class="text-sm font-medium text-gray-800">{ institute.contact_name() }</div>
                            <div class="text-xs text-gray-500 mt-1">{ &institute.email_id }</div>
                        </div>
                    </div>
                </div>
            </div>

            if !institute.bio.is_empty() {
                <div>
                    <h4 class="text-sm font-medium text-gray-700 mb-3">{ "About" }</h4>
                    <p class="text-sm text-gray-600 leading-relaxed">{ &institute.bio }</p>
                </div>
            }

            <div>
                <h4 class="text-sm font-medium text-gray-700 mb-3">{ "Expected Capacity" }</h4>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div>
                        <div class="text-xs text-gray-500 mb-1">{ "Expected Students" }</div>
                        <div class="text-2xl font-semibold text-gray-800">{ institute.expected_students }</div>
                    </div>
                    <div>
                        <div class="text-xs text-gray-500 mb-1">{ "Expected Teachers" }</div>
                        <div class="text-2xl font-semibold text-gray-800">{ institute.expected_teachers }</div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Documents tab body: the uploaded verification documents with view links.
#[function_component(InstituteDocuments)]
pub fn institute_documents(props: &InstituteProfileProps) -> Html {
    let institute = &props.institute;

    let document_row = |name: &str, description: &str, url: &Option<String>| {
        html! {
            <div class="flex items-center justify-between p-4 bg-gray-50 rounded-lg border border-gray-200">
                <div class="flex items-center gap-3">
                    <div class="w-10 h-10 bg-blue-100 rounded-lg flex items-center justify-center shrink-0">
                        <Icon icon_id={IconId::HeroiconsOutlineDocumentText} class="w-5 h-5 text-blue-600" />
                    </div>
                    <div>
                        <div class="text-sm font-medium text-gray-800">{ name }</div>
                        <div class="text-xs text-gray-500">{ description }</div>
                    </div>
                </div>
                {
                    url.as_ref().map_or_else(
                        || html! {
                            <span class="text-xs text-gray-400">{ "Not uploaded" }</span>
                        },
                        |url| html! {
                            <a
                                href={url.clone()}
                                target="_blank"
                                class="flex items-center gap-2 px-4 py-2 bg-indigo-500 hover:bg-indigo-600 text-white rounded-lg text-sm font-medium"
                            >
                                <Icon icon_id={IconId::HeroiconsOutlineEye} class="w-4 h-4" />
                                { "View" }
                            </a>
                        },
                    )
                }
            </div>
        }
    };

    html! {
        <div class="p-6">
            <h3 class="text-base font-semibold text-gray-800 mb-4">{ "Uploaded Documents" }</h3>
            <div class="space-y-3">
                { document_row("Aadhar Card", "Identity verification document", &institute.aadhar_url) }
                { document_row("Designation ID", "Official designation document", &institute.designation_id_url) }
            </div>
        </div>
    }
}
