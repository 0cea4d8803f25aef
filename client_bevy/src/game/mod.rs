pub(crate) mod core;
mod crosshair;
mod hud;
mod input;
mod menu;
mod session;
mod targets;

pub use core::CorePlugin;
pub(crate) use core::UpdateSet;
pub use crosshair::CrosshairPlugin;
pub use hud::HudPlugin;
pub use input::InputPlugin;
pub use menu::MenuPlugin;
pub use session::SessionPlugin;
pub use targets::TargetsPlugin;
