//! # Printer Registry
//!
//! Named print targets configured at startup. A print request refers to a
//! printer by name; the registry turns that name into somewhere to send
//! bytes.
//!
//! ## Target Syntax
//!
//! | Argument | Target |
//! |------|--------|
//! | `tcp://192.168.1.50:9100` | Raw TCP (JetDirect) |
//! | `192.168.1.50:9100` | Raw TCP (JetDirect) |
//! | `/dev/usb/lp0` | Raw device node |
//!
//! ```
//! use tiquetera::printer::{PrinterRegistry, PrinterTarget};
//!
//! let registry = PrinterRegistry::from_args(&[
//!     "caja=tcp://192.168.1.50:9100".to_string(),
//!     "barra=/dev/usb/lp0".to_string(),
//! ])?;
//!
//! assert_eq!(registry.names(), vec!["barra", "caja"]);
//! assert!(matches!(registry.get("caja")?, PrinterTarget::Network(_)));
//! # Ok::<(), tiquetera::TiqueteraError>(())
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::TiqueteraError;

/// Where a printer's bytes go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrinterTarget {
    /// Raw TCP socket, usually port 9100.
    Network(SocketAddr),
    /// Character device or file opened for writing.
    Device(PathBuf),
}

impl FromStr for PrinterTarget {
    type Err = TiqueteraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TiqueteraError::Config("empty printer target".to_string()));
        }

        if let Some(addr) = s.strip_prefix("tcp://") {
            return addr.parse().map(PrinterTarget::Network).map_err(|_| {
                TiqueteraError::Config(format!("Invalid address: {}", addr))
            });
        }

        if let Ok(addr) = s.parse::<SocketAddr>() {
            return Ok(PrinterTarget::Network(addr));
        }

        Ok(PrinterTarget::Device(PathBuf::from(s)))
    }
}

impl fmt::Display for PrinterTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrinterTarget::Network(addr) => write!(f, "tcp://{}", addr),
            PrinterTarget::Device(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Name → target map of configured printers.
#[derive(Debug, Clone, Default)]
pub struct PrinterRegistry {
    printers: BTreeMap<String, PrinterTarget>,
}

impl PrinterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `NAME=TARGET` arguments (as given on the command line).
    pub fn from_args(args: &[String]) -> Result<Self, TiqueteraError> {
        let mut registry = Self::new();
        for arg in args {
            let (name, target) = arg.split_once('=').ok_or_else(|| {
                TiqueteraError::Config(format!(
                    "printer \"{}\" must look like NAME=TARGET",
                    arg
                ))
            })?;
            let name = name.trim();
            if name.is_empty() {
                return Err(TiqueteraError::Config(format!(
                    "printer \"{}\" has an empty name",
                    arg
                )));
            }
            registry.insert(name, target.parse()?);
        }
        Ok(registry)
    }

    /// Add or replace a printer.
    pub fn insert(&mut self, name: impl Into<String>, target: PrinterTarget) {
        self.printers.insert(name.into(), target);
    }

    /// Configured printer names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.printers.keys().map(String::as_str).collect()
    }

    /// Look up a printer by name.
    pub fn get(&self, name: &str) -> Result<&PrinterTarget, TiqueteraError> {
        self.printers
            .get(name)
            .ok_or_else(|| TiqueteraError::UnknownPrinter(name.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.printers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tcp_url() {
        let target: PrinterTarget = "tcp://192.168.1.100:9100".parse().unwrap();
        assert_eq!(
            target,
            PrinterTarget::Network("192.168.1.100:9100".parse().unwrap())
        );
        assert_eq!(target.to_string(), "tcp://192.168.1.100:9100");
    }

    #[test]
    fn test_parse_bare_socket_addr() {
        let target: PrinterTarget = "10.0.0.7:9100".parse().unwrap();
        assert!(matches!(target, PrinterTarget::Network(_)));
    }

    #[test]
    fn test_parse_device_path() {
        let target: PrinterTarget = "/dev/usb/lp0".parse().unwrap();
        assert_eq!(target, PrinterTarget::Device(PathBuf::from("/dev/usb/lp0")));
    }

    #[test]
    fn test_invalid_tcp_url() {
        assert!("tcp://nowhere".parse::<PrinterTarget>().is_err());
        assert!("".parse::<PrinterTarget>().is_err());
    }

    #[test]
    fn test_registry_from_args() {
        let registry = PrinterRegistry::from_args(&[
            "POS-58=tcp://127.0.0.1:9100".to_string(),
            "archivo=/tmp/ticket.bin".to_string(),
        ])
        .unwrap();
        assert_eq!(registry.names(), vec!["POS-58", "archivo"]);
        assert!(registry.get("archivo").is_ok());
        assert!(matches!(
            registry.get("missing"),
            Err(TiqueteraError::UnknownPrinter(_))
        ));
    }

    #[test]
    fn test_registry_rejects_bad_argument() {
        assert!(PrinterRegistry::from_args(&["no-equals".to_string()]).is_err());
        assert!(PrinterRegistry::from_args(&["=/dev/null".to_string()]).is_err());
    }
}
