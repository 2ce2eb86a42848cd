//! Configuration for tagline

pub mod language;
pub mod settings;

pub use language::Language;
pub use settings::{Colors, Settings, Style};
