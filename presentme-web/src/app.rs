use crate::routes::{self, MainRoute};
use yew::{Html, function_component, html};
use yew_router::prelude::*;
use yewdux::YewduxRoot;

/// Root component: the store context and the router. Session bootstrap
/// (profile refresh, 401 redirect) lives in the authenticated layout, which
/// every non-sign-in route renders through.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <YewduxRoot>
            <BrowserRouter>
                <Switch<MainRoute> render={routes::switch} />
            </BrowserRouter>
        </YewduxRoot>
    }
}
