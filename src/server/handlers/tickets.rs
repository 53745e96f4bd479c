//! Ticket handlers: render to bytes, or render and print.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::error::TiqueteraError;
use crate::ticket::{Ticket, format_ticket};
use crate::transport;

use super::super::state::AppState;

fn error_response(status: StatusCode, detail: impl std::fmt::Display) -> Response {
    (
        status,
        Json(json!({"status": "error", "detail": detail.to_string()})),
    )
        .into_response()
}

/// Handle POST /render - formatted bytes, without printing.
pub async fn render(
    State(state): State<Arc<AppState>>,
    Json(ticket): Json<Ticket>,
) -> Response {
    let layout = state.config.width.resolve(ticket.printer_width);
    let rendered = format_ticket(&ticket, &layout);

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (
                header::HeaderName::from_static("x-ticket-rows"),
                rendered.report.rows.to_string(),
            ),
        ],
        rendered.bytes,
    )
        .into_response()
}

/// Handle POST /print - format the ticket and send it to the named printer.
pub async fn print(
    State(state): State<Arc<AppState>>,
    Json(ticket): Json<Ticket>,
) -> Response {
    let target = match state.config.printers.get(&ticket.printer_name) {
        Ok(target) => target.clone(),
        Err(e) => {
            warn!(printer = %ticket.printer_name, "print request for unknown printer");
            return error_response(StatusCode::NOT_FOUND, e);
        }
    };

    let layout = state.config.width.resolve(ticket.printer_width);
    let rendered = format_ticket(&ticket, &layout);
    info!(
        printer = %ticket.printer_name,
        target = %target,
        sections = ticket.sections.len(),
        rows = rendered.report.rows,
        bytes = rendered.bytes.len(),
        "printing ticket"
    );

    let bytes = rendered.bytes;
    let print_result =
        tokio::task::spawn_blocking(move || transport::send(&target, &bytes)).await;

    match print_result {
        Ok(Ok(())) => (
            StatusCode::OK,
            Json(json!({
                "status": "Printed successfully",
                "printer_width": layout.chars_per_line,
                "paper_width": format!("{} mm", layout.chars_per_line),
            })),
        )
            .into_response(),
        Ok(Err(e)) => {
            error!(printer = %ticket.printer_name, error = %e, "print failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e)
        }
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            TiqueteraError::Transport(format!("Task error: {}", e)),
        ),
    }
}
