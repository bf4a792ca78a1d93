use yew::{AttrValue, Html, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub icon: IconId,
    pub accent: AttrValue,
}

/// Dashboard metric tile.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-white rounded-xl p-4 shadow-sm">
            <div class="flex items-start justify-between">
                <div>
                    <div class="text-xs text-gray-500">{ &props.title }</div>
                    <div class="text-2xl font-semibold text-gray-800 mt-2">{ &props.value }</div>
                    if let Some(subtitle) = &props.subtitle {
                        <div class="text-xs text-gray-400 mt-1">{ subtitle }</div>
                    }
                </div>
                <div class={classes!(
                    "w-10", "h-10", "rounded-md", "flex", "items-center", "justify-center",
                    "text-white", props.accent.to_string()
                )}>
                    <Icon icon_id={props.icon} class="w-5 h-5" />
                </div>
            </div>
        </div>
    }
}
