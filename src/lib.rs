//! tagline - colorized, tagged status messages for terminal tools

pub mod commands;
pub mod config;
pub mod reporter;
pub mod utils;

pub use config::Settings;
pub use reporter::{Continuation, Reporter};
pub use utils::ReporterError;
