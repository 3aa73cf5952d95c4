//! winit host for the walkthrough

mod app;
mod input_adapter;

pub use app::run;
pub use input_adapter::WinitInput;
