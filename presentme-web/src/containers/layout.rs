use crate::api::PresentMeClient;
use crate::components::loading::Loading;
use crate::containers::{header::Header, sidebar::Sidebar};
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use shared::models::{AdminUser, ApiError};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// What the shell does with the outcome of the mount-time profile refresh.
#[derive(Debug, Clone, PartialEq)]
enum SessionAction {
    Store(AdminUser),
    RedirectSignIn,
    Keep(String),
}

/// Only an expired session sends the admin back to sign-in; a transient
/// failure keeps whatever profile the store already holds.
fn session_action(result: Result<AdminUser, ApiError>) -> SessionAction {
    match result {
        Ok(user) => SessionAction::Store(user),
        Err(ApiError::Unauthorized) => SessionAction::RedirectSignIn,
        Err(err) => SessionAction::Keep(err.to_string()),
    }
}

/// Persistent shell around every authenticated page: sidebar, header, and
/// the session gate. On mount it refreshes the admin profile so a hard
/// refresh does not look like a logout; a 401 redirects to sign-in.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (_state, dispatch) = use_store::<AppState>();
    let loading = use_state(|| true);
    let navigator = use_navigator();

    {
        let dispatch = dispatch.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = PresentMeClient::shared();
                match session_action(client.fetch_profile().await) {
                    SessionAction::Store(user) => {
                        dispatch.reduce_mut(|state| state.set_user(user));
                    }
                    SessionAction::RedirectSignIn => {
                        dispatch.reduce_mut(AppState::clear_user);
                        if let Some(navigator) = navigator {
                            navigator.push(&MainRoute::SignIn);
                        }
                    }
                    SessionAction::Keep(message) => {
                        web_sys::console::error_1(
                            &format!("profile refresh failed: {message}").into(),
                        );
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <Loading /> };
    }

    html! {
        <div class="flex">
            <Sidebar />
            <main class="flex-1 bg-gray-50 min-h-screen">
                <Header />
                <div class="p-4 md:p-6">
                    { props.children.clone() }
                </div>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::AdminProfile;

    fn admin() -> AdminUser {
        AdminUser {
            admin: AdminProfile {
                first_name: "Asha".to_string(),
                last_name: "Verma".to_string(),
                email_id: "asha@present-me.example".to_string(),
            },
        }
    }

    #[test]
    fn profile_success_is_stored() {
        assert_eq!(
            session_action(Ok(admin())),
            SessionAction::Store(admin())
        );
    }

    #[test]
    fn expired_session_redirects_to_sign_in() {
        assert_eq!(
            session_action(Err(ApiError::Unauthorized)),
            SessionAction::RedirectSignIn
        );
    }

    #[test]
    fn transient_failure_keeps_current_state() {
        match session_action(Err(ApiError::Network("offline".to_string()))) {
            SessionAction::Keep(message) => assert!(message.contains("offline")),
            other => panic!("expected Keep, got {other:?}"),
        }

        match session_action(Err(ApiError::Server {
            status: 500,
            message: "boom".to_string(),
        })) {
            SessionAction::Keep(message) => assert!(message.contains("boom")),
            other => panic!("expected Keep, got {other:?}"),
        }
    }
}
