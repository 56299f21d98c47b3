//! Observability for the EcoShop storefront tools.
//!
//! This crate provides:
//! - `LogLevel` / `LogFormat` - Logging knobs shared with the CLI config
//! - `LoggingConfig` - Serde-friendly logging section
//! - `init` - Installs the global `tracing` subscriber

mod logging;

pub use logging::*;
