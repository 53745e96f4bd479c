//! # HTTP Ticket Server
//!
//! Receives ticket JSON over HTTP, formats it, and sends the bytes to a
//! configured printer.
//!
//! ## Usage
//!
//! ```bash
//! tiquetera serve --listen 0.0.0.0:8000 --printer caja=tcp://192.168.1.50:9100
//! ```
//!
//! ## Routes
//!
//! | Method | Path | Body | Response |
//! |--------|------|------|----------|
//! | GET | `/printers` | | JSON array of printer names |
//! | POST | `/print` | Ticket | `{"status": "Printed successfully", ...}` |
//! | POST | `/render` | Ticket | `application/octet-stream` ticket bytes |

mod handlers;
mod state;

pub use state::{AppState, ServerConfig};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::TiqueteraError;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/printers", get(handlers::printers::list))
        .route("/print", post(handlers::tickets::print))
        .route("/render", post(handlers::tickets::render))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use tiquetera::printer::{PrinterRegistry, WidthPolicy};
/// use tiquetera::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), tiquetera::TiqueteraError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8000".to_string(),
///     printers: PrinterRegistry::from_args(&["caja=/dev/usb/lp0".to_string()])?,
///     width: WidthPolicy::default(),
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), TiqueteraError> {
    let listen_addr = config.listen_addr.clone();
    info!(
        listen = %listen_addr,
        printers = ?config.printers.names(),
        width = config.width.current(),
        "tiquetera HTTP server starting"
    );

    let app = router(Arc::new(AppState::new(config)));

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .map_err(|e| {
            TiqueteraError::Transport(format!("Failed to bind to {}: {}", listen_addr, e))
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| TiqueteraError::Transport(format!("Server error: {}", e)))?;

    Ok(())
}
