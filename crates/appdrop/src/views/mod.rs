pub mod error_view;
pub mod loading;
pub mod main_view;
