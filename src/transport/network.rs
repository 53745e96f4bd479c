//! Raw TCP printing (port 9100).
//!
//! Most networked thermal printers accept a print job as the raw bytes of a
//! single TCP connection. The connection is closed when the transport drops.

use std::io::Write;
use std::net::{SocketAddr, TcpStream};
use std::time::Duration;

use tracing::{debug, info};

use super::Transport;
use crate::error::TiqueteraError;

/// Connect and write timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Network printer connection.
#[derive(Debug)]
pub struct NetworkTransport {
    stream: TcpStream,
    addr: SocketAddr,
}

impl NetworkTransport {
    pub fn connect(addr: SocketAddr) -> Result<Self, TiqueteraError> {
        Self::connect_timeout(addr, DEFAULT_TIMEOUT)
    }

    pub fn connect_timeout(addr: SocketAddr, timeout: Duration) -> Result<Self, TiqueteraError> {
        info!(%addr, "connecting to printer");
        let stream = TcpStream::connect_timeout(&addr, timeout)
            .map_err(|e| TiqueteraError::Transport(format!("{}: {}", addr, e)))?;
        stream
            .set_write_timeout(Some(timeout))
            .map_err(|e| TiqueteraError::Transport(format!("{}: {}", addr, e)))?;
        Ok(Self { stream, addr })
    }
}

impl Transport for NetworkTransport {
    fn write_all(&mut self, data: &[u8]) -> Result<(), TiqueteraError> {
        self.stream
            .write_all(data)
            .map_err(|e| TiqueteraError::Transport(format!("Write failed: {}", e)))?;
        self.stream
            .flush()
            .map_err(|e| TiqueteraError::Transport(format!("Flush failed: {}", e)))?;
        debug!(addr = %self.addr, bytes = data.len(), "print job sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[test]
    fn test_refused_connection_is_transport_error() {
        // Bind then drop to get a port nobody listens on.
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let err = NetworkTransport::connect_timeout(addr, Duration::from_millis(500)).unwrap_err();
        assert!(matches!(err, TiqueteraError::Transport(_)));
    }
}
