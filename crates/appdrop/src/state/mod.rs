mod main;

pub use main::*;

use crate::error::AppError;

#[derive(Debug)]
#[allow(clippy::large_enum_variant)]
pub enum AppState {
    Loading,
    Main(MainState),
    Failed(AppError),
}
