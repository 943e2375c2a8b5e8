pub mod app;
pub mod events;
pub mod layout;
pub mod theme;
pub mod views;

pub use app::AppState;
