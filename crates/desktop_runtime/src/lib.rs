pub mod apps;
pub mod components;
pub mod model;
pub mod motion;
pub mod reducer;
pub mod runtime_context;
pub mod window_manager;

pub use components::DesktopShell;
pub use model::*;
pub use motion::MotionDriver;
pub use reducer::{reduce_desktop, DesktopAction};
pub use runtime_context::{use_desktop_runtime, DesktopHost, DesktopProvider, DesktopRuntimeContext};
