//! Client - the command executor.
//!
//! [`Tmcl`] owns an optional transport handle and drives one
//! request/reply exchange per [`Tmcl::exec`] call: encode, write 9 bytes,
//! read exactly 9 bytes, verify checksum, classify status. A single mutex
//! around the whole exchange serializes concurrent callers; the board
//! cannot cope with interleaved frames.
//!
//! # Example
//!
//! ```ignore
//! use tmcl_client::{SerialTransport, Tmcl, DEFAULT_SERIAL_BAUD};
//!
//! let board = Tmcl::builder()
//!     .transport(SerialTransport::open("/dev/ttyUSB0", DEFAULT_SERIAL_BAUD)?)
//!     .build();
//!
//! board.ror(0, 500)?;          // rotate motor 0 right at velocity 500
//! let pos = board.gap(1, 0)?;  // read axis parameter 1 (actual position)
//! board.mst(0)?;
//! ```

use std::sync::{Mutex, PoisonError};

use crate::error::{Result, TmclError};
use crate::observer::{NoopObserver, Observer};
use crate::protocol::{classify_status, extract_value, Reply, Request, FRAME_SIZE};
use crate::transport::Transport;

/// Builder for configuring and creating a [`Tmcl`] client.
pub struct TmclBuilder {
    transport: Option<Box<dyn Transport>>,
    observer: Box<dyn Observer>,
}

impl TmclBuilder {
    /// Create a new builder with no transport and a no-op observer.
    pub fn new() -> Self {
        Self {
            transport: None,
            observer: Box::new(NoopObserver),
        }
    }

    /// Attach a transport at construction.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Install an observer for sent and received frames.
    pub fn observer<O: Observer + 'static>(mut self, observer: O) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Build the client.
    pub fn build(self) -> Tmcl {
        Tmcl {
            transport: Mutex::new(self.transport),
            observer: self.observer,
        }
    }
}

impl Default for TmclBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A TMCL board client.
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
pub struct Tmcl {
    /// Transport handle, absent until attached. The mutex doubles as the
    /// exchange lock: it is held for the full encode-write-read-decode
    /// sequence, so exchanges never overlap.
    transport: Mutex<Option<Box<dyn Transport>>>,
    observer: Box<dyn Observer>,
}

impl Tmcl {
    /// Create a detached client with a no-op observer.
    ///
    /// Every exchange fails with [`TmclError::NotConnected`] until a
    /// transport is [attached](Tmcl::attach).
    pub fn new() -> Self {
        TmclBuilder::new().build()
    }

    /// Create a client builder.
    pub fn builder() -> TmclBuilder {
        TmclBuilder::new()
    }

    /// Attach a transport, replacing any previous one.
    ///
    /// Takes the exchange lock, so it cannot race an in-flight exchange.
    pub fn attach<T: Transport + 'static>(&self, transport: T) {
        *self.lock() = Some(Box::new(transport));
    }

    /// Detach and return the current transport, if any.
    ///
    /// The port itself is closed by dropping the returned handle.
    pub fn detach(&self) -> Option<Box<dyn Transport>> {
        self.lock().take()
    }

    /// Whether a transport is currently attached.
    pub fn is_attached(&self) -> bool {
        self.lock().is_some()
    }

    /// Execute one command on the board.
    ///
    /// Writes a 9-byte request frame and blocks until the 9-byte reply is
    /// read in full or the transport's read deadline elapses. On success
    /// returns the reply's value field.
    ///
    /// # Errors
    ///
    /// - [`TmclError::NotConnected`] when no transport is attached; the
    ///   byte stream is never touched.
    /// - [`TmclError::Transport`] on write failure, short read, EOF, or
    ///   timeout.
    /// - [`TmclError::Checksum`] when the reply checksum does not verify.
    /// - [`TmclError::Status`] when the board reports a failure status.
    ///
    /// There is no automatic retry. After a timed-out read the board's
    /// late reply, if it comes, stays unread on the wire and will be
    /// misparsed as the start of the next reply; callers that retry must
    /// account for this desynchronization hazard.
    pub fn exec(&self, command: u8, type_number: u8, motor_or_bank: u8, value: i32) -> Result<i32> {
        // One command at a time.
        let mut guard = self.lock();
        let transport = guard.as_mut().ok_or(TmclError::NotConnected)?;

        let tx = Request {
            command,
            type_number,
            motor_or_bank,
            value,
        }
        .encode();
        self.observer
            .on_send(&tx, command, type_number, motor_or_bank, value);

        transport.write_all(&tx)?;

        // Relies on the transport's read deadline; a non-responding
        // device surfaces here as a timed-out or short read.
        let mut rx = [0u8; FRAME_SIZE];
        transport.read_exact(&mut rx)?;

        self.observer.on_receive(&rx, extract_value(&rx));

        let reply = Reply::decode(&rx)?;
        classify_status(reply.status)?;

        Ok(reply.value)
    }

    /// Take the exchange lock, recovering from poisoning.
    ///
    /// A panic in a previous holder must not condemn every later
    /// exchange; the transport option itself is always in a consistent
    /// state.
    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Box<dyn Transport>>> {
        self.transport.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Tmcl {
    fn default() -> Self {
        Self::new()
    }
}
