//! Emit command implementations

use std::io::Write;

use crate::reporter::{Continuation, Reporter};
use crate::utils::errors::ReporterError;

/// Which emit operation to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitKind {
    Normal,
    Warning,
    Error,
    Success,
    Info,
}

/// Options for a single emit call from the command line
#[derive(Debug, Clone, Default)]
pub struct EmitOptions {
    pub message: Option<String>,
    /// Handed back by the reporter and echoed on its own line
    pub value: Option<String>,
}

/// Run one emit operation and return the value it resolved to
pub fn emit<W: Write>(
    reporter: &mut Reporter<W>,
    kind: EmitKind,
    options: EmitOptions,
) -> Result<Option<String>, ReporterError> {
    let continuation = options
        .value
        .map(Continuation::value)
        .unwrap_or_default();
    let message = options.message.unwrap_or_default();

    let resolved = match kind {
        EmitKind::Normal => reporter.normal(message, continuation, Continuation::Absent)?,
        EmitKind::Warning => reporter.warning(message, continuation),
        EmitKind::Error => reporter.error(Some(message), continuation),
        EmitKind::Success => reporter.success(message, continuation),
        EmitKind::Info => reporter.info(message, continuation),
    };

    crate::log_debug!("{:?} resolved to {:?}", kind, resolved);
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Language, Style};

    fn reporter(accent_color: &str) -> Reporter<Vec<u8>> {
        let style = Style {
            accent_color: accent_color.to_string(),
            ..Style::default()
        };
        Reporter::new(style, Language::default(), Vec::new())
    }

    fn output(reporter: Reporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_emit_each_kind() {
        for kind in [
            EmitKind::Normal,
            EmitKind::Warning,
            EmitKind::Error,
            EmitKind::Success,
            EmitKind::Info,
        ] {
            let mut r = reporter("#9900FF");
            let resolved = emit(
                &mut r,
                kind,
                EmitOptions {
                    message: Some("hello".to_string()),
                    value: None,
                },
            )
            .unwrap();
            assert_eq!(resolved, None);

            let out = output(r);
            assert_eq!(out.lines().count(), 1, "{:?}", kind);
            assert!(out.contains("hello"));
        }
    }

    #[test]
    fn test_emit_returns_value() {
        let mut r = reporter("#9900FF");
        let resolved = emit(
            &mut r,
            EmitKind::Info,
            EmitOptions {
                message: Some("x".to_string()),
                value: Some("42".to_string()),
            },
        )
        .unwrap();
        assert_eq!(resolved.as_deref(), Some("42"));
    }

    #[test]
    fn test_emit_error_without_message() {
        let mut r = reporter("#9900FF");
        emit(&mut r, EmitKind::Error, EmitOptions::default()).unwrap();
        assert_eq!(output(r).lines().count(), 2);
    }

    #[test]
    fn test_emit_normal_invalid_accent_color() {
        let mut r = reporter("notacolor");
        let err = emit(
            &mut r,
            EmitKind::Normal,
            EmitOptions {
                message: Some("x".to_string()),
                value: Some("unused".to_string()),
            },
        )
        .unwrap_err();
        assert!(err.is_fatal());
        assert!(output(r).contains("notacolor"));
    }
}
