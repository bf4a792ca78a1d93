use yew::{Html, function_component, html};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

/// `ErrorPage` page component, rendered for unknown routes.
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-50 text-center px-4">
            <h1 class="text-6xl font-bold text-gray-300">{ "404" }</h1>
            <p class="mt-4 text-lg font-medium text-gray-700">{ "Page not found" }</p>
            <p class="mt-1 text-sm text-gray-500">{ "The page you are looking for does not exist." }</p>
            <Link<MainRoute> to={MainRoute::Dashboard} classes="mt-6 bg-indigo-500 hover:bg-indigo-600 text-white text-sm px-4 py-2 rounded-lg">
                { "Back to Dashboard" }
            </Link<MainRoute>>
        </div>
    }
}
