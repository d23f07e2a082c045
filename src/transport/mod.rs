//! Transport module - blocking byte-stream abstraction.
//!
//! The client only needs something that can write bytes and read back an
//! exact number of bytes, blocking until satisfied or until the
//! transport's own deadline elapses. Any `Read + Write + Send` type
//! qualifies, including `Box<dyn serialport::SerialPort>`.

mod serial;

pub use serial::{SerialTransport, DEFAULT_READ_TIMEOUT};

use std::io::{Read, Write};

/// An ordered, bidirectional, blocking byte stream.
///
/// Blanket-implemented for every `Read + Write + Send` type; there is
/// nothing to implement by hand. Reads must honor a deadline configured
/// on the transport itself — a stalled read is the only way the protocol
/// detects a non-responding device.
pub trait Transport: Read + Write + Send {}

impl<T: Read + Write + Send> Transport for T {}
