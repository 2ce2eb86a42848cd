//! Command implementations for the tagline binary

pub mod check;
pub mod config;
pub mod emit;
