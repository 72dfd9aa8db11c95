//! LaserPath Settings Crate
//!
//! Handles configuration files, defaults and validation.

pub mod config;
pub mod error;

pub use config::{
    Config, DecompositionSettings, ExtractionSettings, OutputFormat, OutputSettings, TieBreak,
};
pub use error::{SettingsError, SettingsResult};
