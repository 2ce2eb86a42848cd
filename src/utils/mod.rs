//! Utility modules for tagline

pub mod errors;
pub mod logger;
pub mod template;

// Re-export commonly used items
pub use errors::ReporterError;
pub use logger::{log_debug, log_error, log_info, log_warn};
pub use template::get_text;
