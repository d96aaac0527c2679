//! Core types and traits for WeSplit UI

mod widget;
mod state;
pub mod context;
mod events;
mod node;
mod view;

pub use widget::*;
pub use state::*;
pub use context::*;
pub use events::*;
pub use node::*;
pub use view::*;
