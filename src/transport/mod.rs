//! # Printer Transport Layer
//!
//! Sends a finished byte buffer to a printer, verbatim, in one job.
//!
//! ## Available Transports
//!
//! - [`device`]: Raw device node or file (USB `lp`, serial TTY, RFCOMM)
//! - [`network`]: Raw TCP, JetDirect style (port 9100)
//!
//! Writes are blocking. Async callers run them on a blocking thread.

pub mod device;
pub mod network;

use crate::error::TiqueteraError;
use crate::printer::PrinterTarget;

pub use device::DeviceTransport;
pub use network::NetworkTransport;

/// A destination for raw printer bytes.
pub trait Transport {
    /// Send the whole buffer, flushing before returning.
    fn write_all(&mut self, data: &[u8]) -> Result<(), TiqueteraError>;
}

/// Open the transport for a configured target.
pub fn open(target: &PrinterTarget) -> Result<Box<dyn Transport>, TiqueteraError> {
    match target {
        PrinterTarget::Network(addr) => Ok(Box::new(NetworkTransport::connect(*addr)?)),
        PrinterTarget::Device(path) => Ok(Box::new(DeviceTransport::open(path)?)),
    }
}

/// Open `target` and send `data` in one shot.
pub fn send(target: &PrinterTarget, data: &[u8]) -> Result<(), TiqueteraError> {
    let mut transport = open(target)?;
    transport.write_all(data)
}
