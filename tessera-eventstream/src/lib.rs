pub mod event;
pub mod hover;
pub mod style;

pub use event::{HoverEnterEvent, HoverEvent, HoverLeaveEvent};
pub use hover::{HoverTracker, HoverTrackerConfig, PointLocator};
pub use style::HoverStyle;
