//! # Error Types
//!
//! This module defines error types used throughout the tiquetera library.
//!
//! Text content never produces an error: unencodable characters are
//! replaced and unknown section kinds are skipped. What remains are
//! structural failures (a ticket that does not match its declared shape)
//! and failures of the outer transport and server layers.

use thiserror::Error;

/// Ticket construction failures, reported before any rendering happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TicketError {
    /// A section's payload does not match its declared kind.
    #[error("sections[{index}]: invalid content for \"{kind}\": {message}")]
    InvalidContent {
        index: usize,
        kind: String,
        message: String,
    },

    /// A section object is missing its `"type"` tag or is not an object.
    #[error("sections[{index}]: {message}")]
    MalformedSection { index: usize, message: String },

    /// An alignment string other than left/center/right.
    #[error("invalid alignment \"{0}\": expected \"left\", \"center\", or \"right\"")]
    InvalidAlignment(String),

    /// A QR section asked for a magnification of zero.
    #[error("sections[{index}]: qr_code size must be at least 1")]
    InvalidQrSize { index: usize },
}

/// QR matrix construction failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QrError {
    /// The payload does not fit any QR version at the chosen error correction.
    #[error("QR encode failed: {0}")]
    Encode(#[from] qrcode::types::QrError),
}

/// Main error type for tiquetera operations
#[derive(Debug, Error)]
pub enum TiqueteraError {
    /// Transport-level errors (connection, I/O)
    #[error("Transport error: {0}")]
    Transport(String),

    /// A print request named a printer that is not configured
    #[error("Unknown printer: {0}")]
    UnknownPrinter(String),

    /// Invalid printer or server configuration
    #[error("Invalid config: {0}")]
    Config(String),

    /// The ticket failed validation
    #[error("Invalid ticket: {0}")]
    InvalidTicket(#[from] TicketError),

    /// QR payload could not be encoded
    #[error("QR error: {0}")]
    Qr(#[from] QrError),

    /// JSON decoding error (ticket files, request bodies)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
