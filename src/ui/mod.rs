pub mod app;
pub mod chrome;
pub mod components;
pub mod state;

pub use app::ChatApp;
