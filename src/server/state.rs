//! Server state and configuration.

use crate::printer::{PrinterRegistry, WidthPolicy};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8000")
    pub listen_addr: String,
    /// Printers a request may name.
    pub printers: PrinterRegistry,
    /// Width used when a request does not ask for one.
    pub width: WidthPolicy,
}

/// Application state shared across handlers.
///
/// Read-only after startup: each request resolves its own layout from
/// `config.width`.
pub struct AppState {
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}
