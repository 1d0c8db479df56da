pub mod animator;
pub mod controller;
pub mod renderer;

pub use controller::SendController;
pub use renderer::ChannelRenderer;
