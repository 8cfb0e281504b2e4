//! Widgets and screen effects drawn on top of the board

pub mod menu;
pub mod overlay;

pub use menu::{MenuItem, MenuWidget, WidgetSignal};
pub use overlay::{GoalBanner, Overlay, Overlays};
