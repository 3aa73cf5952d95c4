pub mod camera;
pub mod cli;
pub mod config;
pub mod frame;
pub mod headless;
pub mod input;
pub mod interaction;
pub mod lighting;
pub mod loaders;
pub mod math;
pub mod nav;
pub mod platform;
pub mod scene;
pub mod session;

pub use camera::Camera;
pub use config::LayoutConfig;
pub use nav::NavigationController;
pub use session::Session;
