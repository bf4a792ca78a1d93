use crate::{containers::layout::Layout, models::app_state::AppState, pages::*};
use strum::{EnumIter, IntoEnumIterator};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Dashboard,
    #[at("/signin")]
    SignIn,
    #[at("/teachers")]
    Teachers,
    #[at("/students")]
    Students,
    #[at("/pending-institutes")]
    PendingInstitutes,
    #[at("/pending-institutes/:id")]
    PendingInstituteDetails { id: String },
    #[at("/verified-institutes")]
    VerifiedInstitutes,
    #[at("/verified-institutes/:id")]
    VerifiedInstituteDetails { id: String },
    #[at("/chat")]
    Chat,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Routes listed in the sidebar, in display order.
    pub fn sidebar_routes() -> Vec<MainRoute> {
        Self::iter().filter(Self::in_sidebar).collect()
    }

    fn in_sidebar(&self) -> bool {
        matches!(
            self,
            Self::Dashboard
                | Self::Teachers
                | Self::Students
                | Self::PendingInstitutes
                | Self::VerifiedInstitutes
                | Self::Chat
        )
    }

    /// Sidebar label; empty for routes that never appear there.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Teachers => "Teachers",
            Self::Students => "Students",
            Self::PendingInstitutes => "Pending Institutes",
            Self::VerifiedInstitutes => "Verified Institutes",
            Self::Chat => "Chat",
            _ => "",
        }
    }

    /// Sidebar icon.
    pub fn icon(&self) -> IconId {
        match self {
            Self::Teachers => IconId::HeroiconsOutlineUsers,
            Self::Students => IconId::HeroiconsOutlineAcademicCap,
            Self::PendingInstitutes => IconId::HeroiconsOutlineClock,
            Self::VerifiedInstitutes => IconId::HeroiconsOutlineCheckCircle,
            Self::Chat => IconId::HeroiconsOutlineChatBubbleLeftRight,
            _ => IconId::HeroiconsOutlineSquares2X2,
        }
    }
}

const TITLES: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/teachers", "Teachers"),
    ("/students", "Students"),
    ("/pending-institutes", "Pending Institutes"),
    ("/verified-institutes", "Verified Institutes"),
    ("/chat", "Chat"),
];

/// Header title for a location path. Exact matches come from the static
/// table; the two detail-path families fall back by prefix so dynamic
/// routes still get a sensible header; anything else reads "Dashboard".
pub fn page_title(path: &str) -> &'static str {
    if let Some((_, title)) = TITLES.iter().find(|(candidate, _)| *candidate == path) {
        return title;
    }
    if path.starts_with("/pending-institutes/") || path.starts_with("/verified-institutes/") {
        return "Institute Details";
    }
    "Dashboard"
}

#[derive(Properties, PartialEq)]
struct MainRouteViewProps {
    route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let user = use_selector(|state: &AppState| state.user.clone());
    let is_authenticated = user.is_some();

    match props.route.clone() {
        MainRoute::SignIn => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Dashboard} /> }
            } else {
                html! { <SignInPage /> }
            }
        }
        MainRoute::Dashboard => html! { <Layout><DashboardPage /></Layout> },
        MainRoute::Teachers => html! { <Layout><TeachersPage /></Layout> },
        MainRoute::Students => html! { <Layout><StudentsPage /></Layout> },
        MainRoute::PendingInstitutes => html! { <Layout><PendingInstitutesPage /></Layout> },
        MainRoute::PendingInstituteDetails { id } => {
            html! { <Layout><PendingInstituteDetailsPage {id} /></Layout> }
        }
        MainRoute::VerifiedInstitutes => html! { <Layout><VerifiedInstitutesPage /></Layout> },
        MainRoute::VerifiedInstituteDetails { id } => {
            html! { <Layout><VerifiedInstituteDetailsPage {id} /></Layout> }
        }
        MainRoute::Chat => html! { <Layout><ChatPage /></Layout> },
        MainRoute::NotFound => html! { <ErrorPage /> },
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to route: {:?}", route).as_str());
    html! { <MainRouteView {route} /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_match_the_static_table() {
        assert_eq!(page_title("/"), "Dashboard");
        assert_eq!(page_title("/teachers"), "Teachers");
        assert_eq!(page_title("/students"), "Students");
        assert_eq!(page_title("/pending-institutes"), "Pending Institutes");
        assert_eq!(page_title("/verified-institutes"), "Verified Institutes");
        assert_eq!(page_title("/chat"), "Chat");
    }

    #[test]
    fn detail_paths_fall_back_by_prefix() {
        assert_eq!(page_title("/pending-institutes/inst-7"), "Institute Details");
        assert_eq!(
            page_title("/verified-institutes/inst-12"),
            "Institute Details"
        );
    }

    #[test]
    fn unknown_paths_read_dashboard() {
        assert_eq!(page_title("/no-such-page"), "Dashboard");
    }

    #[test]
    fn detail_routes_carry_the_id() {
        let route = MainRoute::PendingInstituteDetails {
            id: "inst-7".to_string(),
        };
        assert_eq!(route.to_path(), "/pending-institutes/inst-7");

        let route = MainRoute::VerifiedInstituteDetails {
            id: "inst-12".to_string(),
        };
        assert_eq!(route.to_path(), "/verified-institutes/inst-12");
    }

    #[test]
    fn sidebar_lists_the_six_main_pages_in_order() {
        let labels: Vec<&str> = MainRoute::sidebar_routes()
            .iter()
            .map(MainRoute::label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Dashboard",
                "Teachers",
                "Students",
                "Pending Institutes",
                "Verified Institutes",
                "Chat",
            ]
        );
    }

    #[test]
    fn sign_in_and_detail_routes_stay_out_of_the_sidebar() {
        let sidebar = MainRoute::sidebar_routes();
        assert!(!sidebar.contains(&MainRoute::SignIn));
        assert!(!sidebar.contains(&MainRoute::NotFound));
        assert!(
            !sidebar
                .iter()
                .any(|route| matches!(route, MainRoute::PendingInstituteDetails { .. }))
        );
    }
}
