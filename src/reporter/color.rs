//! Hex color parsing

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::utils::errors::ReporterError;

static HEX_COLOR: OnceLock<Regex> = OnceLock::new();

fn hex_color_regex() -> &'static Regex {
    HEX_COLOR.get_or_init(|| {
        Regex::new(r"^#(?i:[0-9a-f]{3,4}|[0-9a-f]{6}|[0-9a-f]{8})$").expect("valid hex color regex")
    })
}

/// Check that `value` is `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`
pub fn is_hex_color(value: &str) -> bool {
    hex_color_regex().is_match(value)
}

/// An RGB color with optional alpha, parsed from hex notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Parsed but never rendered; terminals have no alpha channel
    pub alpha: Option<u8>,
}

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: None }
    }
}

impl FromStr for HexColor {
    type Err = ReporterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_hex_color(s) {
            return Err(ReporterError::InvalidColor {
                value: s.to_string(),
            });
        }

        let digits = &s[1..];
        // Short forms double each nibble: #fa0 -> #ffaa00
        let expanded: String = if digits.len() <= 4 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits.to_string()
        };

        let channel = |i: usize| {
            u8::from_str_radix(&expanded[i * 2..i * 2 + 2], 16).map_err(|_| {
                ReporterError::InvalidColor {
                    value: s.to_string(),
                }
            })
        };

        Ok(Self {
            r: channel(0)?,
            g: channel(1)?,
            b: channel(2)?,
            alpha: if expanded.len() == 8 {
                Some(channel(3)?)
            } else {
                None
            },
        })
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if let Some(a) = self.alpha {
            write!(f, "{:02X}", a)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_colors() {
        for color in ["#fff", "#FFF", "#1A2B3C", "#1a2b3c", "#ffff", "#1A2B3C4D", "#9900FF"] {
            assert!(is_hex_color(color), "{} should be valid", color);
        }
    }

    #[test]
    fn test_invalid_colors() {
        for color in [
            "notacolor",
            "",
            "#",
            "fff",
            "#ff",
            "#fffff",
            "#1A2B3C4",
            "#1A2B3C4D5",
            "#ggg",
            " #fff",
            "#fff ",
        ] {
            assert!(!is_hex_color(color), "{:?} should be invalid", color);
        }
    }

    #[test]
    fn test_parse_long_form() {
        let color: HexColor = "#1A2B3C".parse().unwrap();
        assert_eq!(color, HexColor::rgb(0x1a, 0x2b, 0x3c));
    }

    #[test]
    fn test_parse_short_form_with_alpha() {
        let color: HexColor = "#fa08".parse().unwrap();
        assert_eq!((color.r, color.g, color.b), (0xff, 0xaa, 0x00));
        assert_eq!(color.alpha, Some(0x88));
    }

    #[test]
    fn test_parse_error() {
        let err = "red".parse::<HexColor>().unwrap_err();
        assert_eq!(
            err,
            ReporterError::InvalidColor {
                value: "red".to_string()
            }
        );
    }

    #[test]
    fn test_display() {
        assert_eq!("#abc".parse::<HexColor>().unwrap().to_string(), "#AABBCC");
        assert_eq!(
            "#11223344".parse::<HexColor>().unwrap().to_string(),
            "#11223344"
        );
    }
}
