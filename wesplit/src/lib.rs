//! WeSplit - a single form with a tap counter, a bound name field, a fixed
//! list of rows and a student picker, built on `wesplit-ui`

pub mod config;
pub mod content_view;

pub use config::{Config, ConfigError, ThemeMode};
pub use content_view::{ContentView, Student, ROSTER};
