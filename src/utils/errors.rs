//! Reporter error types

use colored::Colorize;
use thiserror::Error;

/// Faults raised by the reporter
///
/// None of these terminate the process on their own. The host decides,
/// usually through [`ReporterError::exit`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReporterError {
    /// The configured accent color is not a hex color. Unrecoverable
    /// misconfiguration: hosts are expected to stop.
    #[error("Invalid accent color: {value}")]
    InvalidAccentColor { value: String },

    #[error("Invalid hex color: {value}")]
    InvalidColor { value: String },
}

impl ReporterError {
    /// Whether the host should stop after this error
    pub fn is_fatal(&self) -> bool {
        matches!(self, ReporterError::InvalidAccentColor { .. })
    }

    /// Process exit status for this error
    ///
    /// A bad accent color exits with 0; the warning line is the only signal.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReporterError::InvalidAccentColor { .. } => 0,
            ReporterError::InvalidColor { .. } => 1,
        }
    }

    /// Suggestions shown alongside the error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            ReporterError::InvalidAccentColor { .. } => vec![
                "Set style.accent_color in .tagline.toml to a value like \"#9900FF\"".to_string(),
                "Or pass --accent-color / TAGLINE_ACCENT_COLOR".to_string(),
            ],
            ReporterError::InvalidColor { .. } => {
                vec!["Use #RGB, #RGBA, #RRGGBB or #RRGGBBAA".to_string()]
            }
        }
    }

    /// Display the error with suggestions on stderr
    pub fn display(&self) {
        crate::log_error!("{}", self);

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            eprintln!("{}", "Suggestions:".yellow().bold());
            for suggestion in &suggestions {
                eprintln!("  {} {}", "->".blue(), suggestion);
            }
        }
    }

    /// Terminate the process with this error's exit status
    pub fn exit(self) -> ! {
        crate::log_debug!("exiting with status {}: {}", self.exit_code(), self);
        std::process::exit(self.exit_code());
    }
}
