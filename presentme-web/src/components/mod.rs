pub(crate) mod institute_profile;
pub(crate) mod loading;
pub(crate) mod nav_item;
pub(crate) mod stat_card;
pub(crate) mod status_badge;
