//! Terminal helpers shared by every hangar crate: styling, prefixed
//! printing and interactive prompts.

mod error;
mod style;

pub mod print;
pub mod prompt;

pub use error::HangarStdError;
pub use style::is_no_color_set;
pub use style::Style;
