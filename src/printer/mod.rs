//! # Printer Module
//!
//! This module provides printer-specific configuration.
//!
//! ## Modules
//!
//! - [`config`]: Character grid and width policy
//! - [`registry`]: Named print targets

pub mod config;
pub mod registry;

pub use config::{CHARS_PER_LINE_58MM, LayoutConfig, WidthPolicy};
pub use registry::{PrinterRegistry, PrinterTarget};
