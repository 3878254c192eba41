mod config;
mod ui;
mod viewport;

pub use config::ConfigState;
pub use ui::{Page, UIState};
pub use viewport::{LoadStatus, ViewerState};
