pub mod cli;
pub mod command;
mod error;
pub mod options;
pub mod utils;

pub use command::HangarOutput;
pub use error::{HangarError, HangarErrorCode, HangarErrorSuggestion, HangarResult};

pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
