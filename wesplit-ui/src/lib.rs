//! WeSplit UI - small declarative form toolkit
//!
//! Views describe their widget tree from the current values of their state
//! cells; the [`Runtime`] rebuilds that tree whenever a cell changes and
//! routes input to the widgets of the latest build.

pub mod core;
pub mod widgets;
pub mod render;
pub mod layout;
pub mod style;
pub mod app;
pub mod runtime;
mod error;

pub use app::{App, WindowConfig};
pub use error::UiError;
pub use runtime::Runtime;
pub use widgets::*;
pub use style::*;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::app::{App, WindowConfig};
    pub use crate::widgets::*;
    pub use crate::style::*;
    pub use crate::core::{Binding, BoxedWidget, Context, Invalidator, Node, State, View, Widget};
    pub use crate::runtime::Runtime;
    pub use crate::UiError;
}
