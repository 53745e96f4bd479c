//! HTTP handlers for the server.

pub mod printers;
pub mod tickets;
