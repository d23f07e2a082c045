//! Protocol module - wire format and status classification.
//!
//! This module implements the byte-level protocol:
//! - 9-byte request/reply frame encoding and decoding
//! - additive checksum computation and verification
//! - total classification of reply status codes

mod status;
mod wire_format;

pub use status::{classify_status, StatusError, STATUS_SUCCESS, STATUS_SUCCESS_STORED};
pub use wire_format::{
    checksum, extract_value, Reply, Request, CHECKSUM_SPAN, FRAME_SIZE, MODULE_ADDRESS,
};
