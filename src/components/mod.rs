pub mod anime_card;
pub mod badge;
pub mod endpoint_debugger;
pub mod footer;
pub mod hero_slider;
pub mod icons;
pub mod json_view;
pub mod navbar;
