//! Built-in widgets for WeSplit UI

mod container;
mod text;
mod button;
mod input;
mod list;
mod picker;
mod navigation;

pub use container::*;
pub use text::*;
pub use button::*;
pub use input::*;
pub use list::*;
pub use picker::*;
pub use navigation::*;
