//! Native UI for the Redraft application

pub mod app;
pub mod components;
pub mod state;
pub mod theme;

pub use app::RedraftApp;
pub use state::AppState;
pub use theme::Theme;
