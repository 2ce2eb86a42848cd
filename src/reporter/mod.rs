//! Colorized, tagged status lines
//!
//! A [`Reporter`] prints one line per call: a bold colored tag such as
//! `[ WARNING ] > ` followed by the message. Each emit operation then
//! resolves its trailing [`Continuation`]:
//!
//! - `Callable`: invoked once before returning; its result is dropped
//!   (except for `normal`'s `data`, whose result is returned)
//! - `Value`: returned as-is
//! - `Absent`: nothing is returned
//!
//! ```no_run
//! use tagline::config::{Language, Style};
//! use tagline::reporter::{Continuation, Reporter};
//!
//! let mut reporter = Reporter::stdout(Style::default(), Language::default());
//! let answer = reporter.warning("disk almost full", Continuation::value(42));
//! assert_eq!(answer, Some(42));
//! ```

pub mod color;
pub mod continuation;

use colored::{ColoredString, Colorize};
use std::fmt::Display;
use std::io::{self, Write};

use crate::config::{Language, Settings, Style};
use crate::utils::errors::ReporterError;

pub use color::{HexColor, is_hex_color};
pub use continuation::Continuation;

/// Tag for `normal` when no display name is configured
pub const DEFAULT_TAG: &str = "[ TAGLINE ]";
/// Tag for `success` and `info` when no display name is configured
pub const STATUS_TAG: &str = "[ STATUS ]";
pub const WARNING_TAG: &str = "[ WARNING ]";
pub const ERROR_TAG: &str = "[ ERROR ]";
pub const SEPARATOR: &str = " > ";

const FALLBACK_STATUS_COLOR: HexColor = HexColor::rgb(0x99, 0x00, 0xff);

/// Prints status lines to `W` (stdout by default)
pub struct Reporter<W: Write = io::Stdout> {
    style: Style,
    status_color: HexColor,
    language: Language,
    out: W,
}

impl Reporter<io::Stdout> {
    pub fn stdout(style: Style, language: Language) -> Self {
        Self::new(style, language, io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(style: Style, language: Language, out: W) -> Self {
        let status_color = style.status_color.parse().unwrap_or_else(|_| {
            crate::log_warn!(
                "Invalid status color {:?}, falling back to {}",
                style.status_color,
                FALLBACK_STATUS_COLOR
            );
            FALLBACK_STATUS_COLOR
        });

        Self {
            style,
            status_color,
            language,
            out,
        }
    }

    pub fn from_settings(settings: &Settings, out: W) -> Self {
        Self::new(settings.style.clone(), settings.language.clone(), out)
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Consume the reporter and hand back its sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print `message` under the accent-colored tag.
    ///
    /// `data` wins over `continuation`: a callable `data` is invoked and its
    /// result returned, a `data` value is returned as-is. Only when `data`
    /// is absent is `continuation` resolved.
    ///
    /// An accent color that is not a hex color prints a warning line and
    /// returns [`ReporterError::InvalidAccentColor`] without touching either
    /// continuation. Callers should treat it as fatal.
    pub fn normal<'a, T>(
        &mut self,
        message: impl Display,
        data: Continuation<'a, T>,
        continuation: Continuation<'a, T>,
    ) -> Result<Option<T>, ReporterError> {
        let accent: HexColor = match self.style.accent_color.parse() {
            Ok(color) => color,
            Err(_) => {
                let value = self.style.accent_color.clone();
                let text = self.language.invalid_accent_color(&value);
                self.warning(text, Continuation::none());
                return Err(ReporterError::InvalidAccentColor { value });
            }
        };

        let tag = Self::named_tag(self.style.name.as_deref().unwrap_or(DEFAULT_TAG), accent);
        self.write_line(tag, message);

        Ok(data.take().or_else(|| continuation.resolve()))
    }

    pub fn warning<'a, T>(
        &mut self,
        message: impl Display,
        continuation: Continuation<'a, T>,
    ) -> Option<T> {
        self.write_line(Self::fixed_tag(WARNING_TAG), message.to_string().yellow());
        continuation.resolve()
    }

    /// Print an error line. A missing or empty message is preceded by the
    /// faulty notice line.
    pub fn error<'a, T, M: Display>(
        &mut self,
        message: Option<M>,
        continuation: Continuation<'a, T>,
    ) -> Option<T> {
        let body = message.map(|m| m.to_string()).unwrap_or_default();
        if body.is_empty() {
            let notice = self.language.faulty_notice.clone();
            self.write_line(Self::fixed_tag(ERROR_TAG), notice.red());
        }
        self.write_line(Self::fixed_tag(ERROR_TAG), body.red());
        continuation.resolve()
    }

    pub fn success<'a, T>(
        &mut self,
        message: impl Display,
        continuation: Continuation<'a, T>,
    ) -> Option<T> {
        let tag = self.status_tag();
        self.write_line(tag, message.to_string().green());
        continuation.resolve()
    }

    pub fn info<'a, T>(
        &mut self,
        message: impl Display,
        continuation: Continuation<'a, T>,
    ) -> Option<T> {
        let tag = self.status_tag();
        self.write_line(tag, message.to_string().blue());
        continuation.resolve()
    }

    fn status_tag(&self) -> ColoredString {
        Self::named_tag(
            self.style.name.as_deref().unwrap_or(STATUS_TAG),
            self.status_color,
        )
    }

    fn named_tag(name: &str, color: HexColor) -> ColoredString {
        format!("{}{}", name, SEPARATOR)
            .truecolor(color.r, color.g, color.b)
            .bold()
    }

    fn fixed_tag(name: &str) -> ColoredString {
        format!("{}{}", name, SEPARATOR).magenta().bold()
    }

    // Emitting never fails from the caller's point of view
    fn write_line(&mut self, tag: ColoredString, body: impl Display) {
        if let Err(e) = writeln!(self.out, "{}{}", tag, body) {
            crate::log_debug!("Failed to write status line: {}", e);
        }
    }
}
