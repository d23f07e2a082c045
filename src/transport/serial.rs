//! Serial-port transport.
//!
//! Opens a named port at a given baud rate with a fixed read timeout.
//! Opening and closing happen here, outside the protocol core; the client
//! only sees attach/detach. Dropping the transport closes the port.

use std::io::{self, Read, Write};
use std::time::Duration;

use serialport::SerialPort;

use crate::error::Result;

/// Read deadline applied to every opened port.
///
/// A reply that does not arrive in full within this window surfaces as a
/// timed-out read on the exchange.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(1);

/// A serial port usable as the client's transport.
///
/// # Example
///
/// ```ignore
/// use tmcl_client::{SerialTransport, Tmcl, DEFAULT_SERIAL_BAUD};
///
/// let port = SerialTransport::open("/dev/ttyUSB0", DEFAULT_SERIAL_BAUD)?;
/// let board = Tmcl::builder().transport(port).build();
/// ```
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

impl SerialTransport {
    /// Open `path` at `baud_rate` with [`DEFAULT_READ_TIMEOUT`].
    pub fn open(path: &str, baud_rate: u32) -> Result<Self> {
        Self::open_with_timeout(path, baud_rate, DEFAULT_READ_TIMEOUT)
    }

    /// Open `path` at `baud_rate` with an explicit read timeout.
    pub fn open_with_timeout(path: &str, baud_rate: u32, timeout: Duration) -> Result<Self> {
        let port = serialport::new(path, baud_rate)
            .timeout(timeout)
            .open()
            .map_err(io::Error::from)?;

        Ok(Self { port })
    }

    /// Name of the underlying port, if the platform reports one.
    pub fn name(&self) -> Option<String> {
        self.port.name()
    }
}

impl Read for SerialTransport {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.port.read(buf)
    }
}

impl Write for SerialTransport {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.port.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.port.flush()
    }
}
