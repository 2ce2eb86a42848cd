//! Configuration check command

use anyhow::{Result, anyhow};
use std::io::Write;

use crate::config::Settings;
use crate::reporter::{Continuation, Reporter, is_hex_color};

/// Validate the reporter's colors, reporting each through the reporter itself
pub fn check<W: Write>(reporter: &mut Reporter<W>) -> Result<()> {
    crate::log_info!("Checking style configuration...");

    let style = reporter.style().clone();
    let colors = [
        ("accent_color", &style.accent_color),
        ("status_color", &style.status_color),
    ];

    let mut invalid = Vec::new();
    for (field, value) in colors {
        if is_hex_color(value) {
            reporter.success(format!("style.{} = {}", field, value), Continuation::none());
        } else {
            reporter.error(
                Some(format!("style.{} = {:?} is not a hex color", field, value)),
                Continuation::none(),
            );
            invalid.push(field);
        }
    }

    match Settings::config_path() {
        Some(path) => reporter.info(
            format!("Config file: {}", path.display()),
            Continuation::none(),
        ),
        None => reporter.info("No config file found, using defaults", Continuation::none()),
    };

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("Invalid colors: {}", invalid.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Language, Style};

    #[test]
    fn test_check_valid_settings() {
        let settings = Settings::default();
        let mut r = Reporter::from_settings(&settings, Vec::new());
        assert!(check(&mut r).is_ok());

        let out = String::from_utf8(r.into_inner()).unwrap();
        assert!(out.contains("style.accent_color = #9900FF"));
        assert!(out.contains("style.status_color = #9900FF"));
    }

    #[test]
    fn test_check_reports_invalid_colors() {
        let mut settings = Settings::default();
        settings.style.accent_color = "notacolor".to_string();
        let mut r = Reporter::from_settings(&settings, Vec::new());

        let err = check(&mut r).unwrap_err();
        assert!(err.to_string().contains("accent_color"));
        assert!(!err.to_string().contains("status_color"));

        let out = String::from_utf8(r.into_inner()).unwrap();
        assert!(out.contains("\"notacolor\" is not a hex color"));
    }

    #[test]
    fn test_check_uses_reporter_style() {
        let style = Style {
            status_color: "lime".to_string(),
            ..Style::default()
        };
        let mut r = Reporter::new(style, Language::default(), Vec::new());

        let err = check(&mut r).unwrap_err();
        assert!(err.to_string().contains("status_color"));
        assert!(!err.to_string().contains("accent_color"));
    }
}
