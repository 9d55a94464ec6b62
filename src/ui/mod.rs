pub mod palette;
pub mod widget;

pub use palette::{Command, filter_commands};
pub use widget::{FloatingWidget, Position, Size, WidgetState};
