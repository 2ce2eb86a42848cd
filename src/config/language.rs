//! Localized message table

use serde::{Deserialize, Serialize};

use crate::utils::template::get_text;

/// Message templates used by the reporter
///
/// Templates take positional placeholders (`%1`, `%2`, ...), see
/// [`get_text`].
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Language {
    /// Shown when the accent color is invalid. `%1` is the offending value.
    #[serde(default = "default_invalid_accent_color")]
    pub invalid_accent_color: String,

    /// Shown before an error line that has no message
    #[serde(default = "default_faulty_notice")]
    pub faulty_notice: String,
}

fn default_invalid_accent_color() -> String {
    "Invalid accent color: %1, please use a hex color such as #9900FF".to_string()
}

fn default_faulty_notice() -> String {
    "Already faulty, please contact support".to_string()
}

impl Default for Language {
    fn default() -> Self {
        Self {
            invalid_accent_color: default_invalid_accent_color(),
            faulty_notice: default_faulty_notice(),
        }
    }
}

impl Language {
    pub fn invalid_accent_color(&self, value: &str) -> String {
        get_text(&self.invalid_accent_color, &[value])
    }
}
