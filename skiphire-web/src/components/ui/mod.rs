pub mod error_display;
pub mod loading_spinner;
pub mod selection_bar;
pub mod skip_card;
