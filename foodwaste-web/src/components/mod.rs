pub(crate) mod charity_card;
pub(crate) mod error_alert;
pub(crate) mod header_nav_item;
pub(crate) mod hero;
pub(crate) mod loading;
pub(crate) mod nav_bar;
pub(crate) mod prediction_result;
pub(crate) mod user_menu;
