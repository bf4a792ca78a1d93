use crate::routes::MainRoute;
use yew::{Html, Properties, classes, function_component, html};
use yew_icons::Icon;
use yew_router::hooks::use_route;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct SidebarNavItemProps {
    pub route: MainRoute,
    pub collapsed: bool,
    #[prop_or_default]
    pub badge: Option<usize>,
}

/// One sidebar link: icon, label, and an optional count badge.
#[function_component(SidebarNavItem)]
pub fn sidebar_nav_item(props: &SidebarNavItemProps) -> Html {
    let current = use_route::<MainRoute>();
    let is_active = current.as_ref() == Some(&props.route);

    html! {
        <Link<MainRoute>
            to={props.route.clone()}
            classes={classes!(
                "flex", "items-center", "py-3", "rounded-lg", "text-sm",
                if props.collapsed { "justify-center" } else { "gap-3" },
                if props.collapsed { "" } else { "px-4" },
                if is_active { "bg-gray-100" } else { "text-gray-600" },
                if is_active { "text-gray-900" } else { "hover:bg-gray-50" }
            )}
        >
            <Icon icon_id={props.route.icon()} class="w-5 h-5" />
            if !props.collapsed {
                <span class="flex-1">{ props.route.label() }</span>
                if let Some(count) = props.badge {
                    <span class="text-xs bg-gray-100 text-gray-600 px-2 py-0.5 rounded-full">
                        { count }
                    </span>
                }
            }
        </Link<MainRoute>>
    }
}
