//! # Raw Device Transport
//!
//! Writes to a printer exposed as a device node: a USB printer class device
//! (`/dev/usb/lp0`), a serial adapter (`/dev/ttyUSB0`) or a bound RFCOMM
//! channel (`/dev/rfcomm0`). Plain files work too, which is handy for
//! capturing output.
//!
//! ## TTY Configuration
//!
//! When the path is a terminal it is switched to raw mode so the bytes pass
//! through unmodified:
//!
//! - **No input processing**: IGNBRK, BRKINT, PARMRK, ISTRIP, INLCR, IGNCR, ICRNL
//! - **No flow control**: IXON, IXOFF, IXANY
//! - **No output processing**: OPOST (no LF → CR LF translation)
//! - **8-bit characters**: CS8, no parity
//! - **Non-canonical, no echo**: ICANON, ECHO, ECHONL, ISIG, IEXTEN
//!
//! ## Chunked Writes
//!
//! Data goes out in 4096-byte chunks, then the device is flushed.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::Transport;
use crate::error::TiqueteraError;

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 4096;

/// # Device Printer Transport
///
/// ```no_run
/// use tiquetera::transport::{DeviceTransport, Transport};
///
/// let mut transport = DeviceTransport::open("/dev/usb/lp0")?;
/// transport.write_all(b"hola\n")?;
/// # Ok::<(), tiquetera::TiqueteraError>(())
/// ```
pub struct DeviceTransport {
    file: File,
    path: PathBuf,
    chunk_size: usize,
}

impl DeviceTransport {
    /// Open a device for writing.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The device doesn't exist
    /// - Permission denied (may need the `lp` or `dialout` group)
    /// - TTY configuration fails
    pub fn open<P: AsRef<Path>>(device: P) -> Result<Self, TiqueteraError> {
        let path = device.as_ref();

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            TiqueteraError::Transport(format!("Failed to open {}: {}", path.display(), e))
        })?;

        #[cfg(unix)]
        configure_if_tty(&file, path)?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
            chunk_size: CHUNK_SIZE,
        })
    }

    /// Set the chunk size for large writes.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }
}

impl Transport for DeviceTransport {
    fn write_all(&mut self, data: &[u8]) -> Result<(), TiqueteraError> {
        for chunk in data.chunks(self.chunk_size) {
            self.file
                .write_all(chunk)
                .map_err(|e| TiqueteraError::Transport(format!("Write failed: {}", e)))?;
        }

        self.file
            .flush()
            .map_err(|e| TiqueteraError::Transport(format!("Flush failed: {}", e)))?;

        debug!(path = %self.path.display(), bytes = data.len(), "device write complete");
        Ok(())
    }
}

#[cfg(unix)]
fn configure_if_tty(file: &File, path: &Path) -> Result<(), TiqueteraError> {
    use std::os::unix::io::AsRawFd;

    let fd = file.as_raw_fd();
    if unsafe { libc::isatty(fd) } != 1 {
        return Ok(());
    }
    debug!(path = %path.display(), "configuring TTY for raw output");
    configure_tty_raw(fd)
}

/// Configure a file descriptor for raw TTY mode.
///
/// XON/XOFF must be off: 0x11 and 0x13 are ordinary bytes in a ticket.
#[cfg(unix)]
fn configure_tty_raw(fd: i32) -> Result<(), TiqueteraError> {
    use std::io;
    use std::mem::MaybeUninit;

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(TiqueteraError::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);
    termios.c_oflag &= !libc::OPOST;
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8;

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(TiqueteraError::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}
