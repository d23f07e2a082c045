//! # tmcl-client
//!
//! Rust client for the TMCL serial protocol spoken by Trinamic
//! motor-controller boards.
//!
//! ## Architecture
//!
//! - **Protocol** ([`protocol`]): fixed 9-byte request/reply frames with
//!   an additive checksum, plus total status-code classification.
//! - **Client** ([`Tmcl`]): serializes callers to one in-flight exchange
//!   at a time over an attachable blocking byte-stream transport.
//! - **Commands** ([`commands`]): the named TMCL operation set (rotate,
//!   stop, move, parameter and I/O access, application control) as thin
//!   wrappers over [`Tmcl::exec`].
//! - **Transport** ([`transport`]): anything `Read + Write + Send`;
//!   [`SerialTransport`] opens a real port via the `serialport` crate.
//! - **Observer** ([`observer`]): optional diagnostic hooks fed the raw
//!   bytes of every exchange.
//!
//! ## Example
//!
//! ```ignore
//! use tmcl_client::{SerialTransport, Tmcl, DEFAULT_SERIAL_BAUD};
//!
//! fn main() -> tmcl_client::Result<()> {
//!     let board = Tmcl::builder()
//!         .transport(SerialTransport::open("/dev/ttyUSB0", DEFAULT_SERIAL_BAUD)?)
//!         .build();
//!
//!     board.ror(0, 500)?;
//!     println!("firmware: {}", board.firmware_version()?);
//!     board.mst(0)?;
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod error;
pub mod observer;
pub mod protocol;
pub mod transport;

mod client;

pub use client::{Tmcl, TmclBuilder};
pub use commands::{bank, opcode, MoveMode, DEFAULT_SERIAL_BAUD};
pub use error::{Result, TmclError};
pub use observer::{NoopObserver, Observer, TraceObserver};
pub use protocol::{classify_status, StatusError, FRAME_SIZE};
pub use transport::{SerialTransport, Transport, DEFAULT_READ_TIMEOUT};
