//! Per-user directories where appdrop keeps its settings and logs.

mod paths;

pub use paths::{AppPaths, AppPathsError};
