use crate::api::PresentMeClient;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

/// The sign-in form. On success the profile lands in the store and the
/// admin is sent to the dashboard; on failure the server's message (or the
/// default fallback) renders inline and the store stays untouched.
#[function_component(SignInPage)]
pub fn sign_in_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let remember = use_state(|| false);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let (_state, dispatch) = use_store::<AppState>();

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let navigator = navigator;
        let dispatch = dispatch;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email_value = (*email).clone();
            let password_value = (*password).clone();
            loading.set(true);
            error.set(None);
            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let client = PresentMeClient::shared();
                match client.login(&email_value, &password_value).await {
                    Ok(user) => {
                        dispatch.reduce_mut(|state| state.set_user(user));
                        if let Some(navigator) = navigator {
                            navigator.push(&MainRoute::Dashboard);
                        }
                    }
                    Err(err) => {
                        web_sys::console::log_1(&format!("Error during sign in: {err}").into());
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let on_remember_toggle = {
        let remember = remember.clone();
        Callback::from(move |_: Event| remember.set(!*remember))
    };

    let is_busy = *loading;

    html! {
        <div class="min-h-screen bg-linear-to-br from-[#f0fbff] to-[#eef8ff] flex items-center justify-center px-4">
            <div class="w-full max-w-md">
                <div class="flex flex-col items-center mb-6">
                    <div class="bg-linear-to-br from-[#0BCCEB] to-[#0A80F5] rounded-xl p-3 shadow-md mb-4 text-white font-semibold">
                        { "PM" }
                    </div>
                    <h1 class="text-2xl font-semibold text-gray-800">{ "Present-Me Super Admin" }</h1>
                    <p class="text-sm text-gray-500">{ "Sign in to your super admin account" }</p>
                </div>

                <div class="bg-white rounded-2xl shadow-xl p-6">
                    <h2 class="text-gray-800 font-semibold mb-1">{ "Sign In" }</h2>
                    <p class="text-sm text-gray-500 mb-6">
                        { "Enter your credentials to access the super admin panel" }
                    </p>

                    <form {onsubmit}>
                        if let Some(message) = &*error {
                            <div class="mb-4 text-sm text-red-600 bg-red-50 border border-red-200 rounded-lg px-3 py-2">
                                { message.clone() }
                            </div>
                        }

                        <label class="block text-sm text-gray-600 mb-2" for="email">{ "Email" }</label>
                        <input
                            id="email"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email_change}
                            placeholder="Enter your email"
                            class="w-full border border-gray-200 rounded-lg bg-gray-50 px-3 py-2 mb-4 text-sm text-gray-700 outline-none"
                        />

                        <label class="block text-sm text-gray-600 mb-2" for="password">{ "Password" }</label>
                        <input
                            id="password"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                            placeholder="Enter your password"
                            class="w-full border border-gray-200 rounded-lg bg-gray-50 px-3 py-2 mb-3 text-sm text-gray-700 outline-none"
                        />

                        <div class="flex items-center justify-between mb-4">
                            <label class="inline-flex items-center text-sm text-gray-600">
                                <input
                                    type="checkbox"
                                    checked={*remember}
                                    onchange={on_remember_toggle}
                                    class="h-4 w-4 mr-2"
                                />
                                { "Remember me" }
                            </label>
                        </div>

                        <button
                            type="submit"
                            disabled={is_busy}
                            class="w-full bg-linear-to-br from-[#0BCCEB] to-[#0A80F5] text-white font-medium py-2 rounded-lg shadow-md mb-4"
                        >
                            { if is_busy { "Signing in..." } else { "Sign in" } }
                        </button>
                    </form>
                </div>

                <p class="text-center text-xs text-gray-400 mt-6">
                    { "© 2024 Present-Me. All rights reserved." }
                </p>
            </div>
        </div>
    }
}
