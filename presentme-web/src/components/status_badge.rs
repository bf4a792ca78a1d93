use shared::models::InstituteStatus;
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: InstituteStatus,
}

/// Pill classes per review status: amber while pending, emerald once
/// verified, red when rejected.
pub(crate) fn badge_classes(status: InstituteStatus) -> &'static str {
    match status {
        InstituteStatus::Pending => {
            "capitalize text-xs bg-amber-100 text-amber-700 px-2 py-1 rounded-full"
        }
        InstituteStatus::Verified => {
            "capitalize text-xs bg-emerald-100 text-emerald-700 px-2 py-1 rounded-full"
        }
        InstituteStatus::Rejected => {
            "capitalize text-xs bg-red-100 text-red-700 px-2 py-1 rounded-full"
        }
    }
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    html! {
        <span class={badge_classes(props.status)}>{ props.status.as_str() }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_status_gets_its_own_color() {
        assert!(badge_classes(InstituteStatus::Pending).contains("amber"));
        assert!(badge_classes(InstituteStatus::Verified).contains("emerald"));
        assert!(badge_classes(InstituteStatus::Rejected).contains("red"));
    }
}
