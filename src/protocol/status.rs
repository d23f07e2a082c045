//! Reply status classification.
//!
//! The third byte of every reply frame is a status code. Classification is
//! a total, pure function of that byte: 100 and 101 are success, 1 through
//! 6 are the defined board errors, and every other value maps to
//! [`StatusError::Unknown`] with the raw code preserved for diagnostics.

use thiserror::Error;

/// Status code: command executed successfully.
pub const STATUS_SUCCESS: u8 = 100;

/// Status code: command accepted and stored into program EEPROM.
pub const STATUS_SUCCESS_STORED: u8 = 101;

/// A failure status reported by the board.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StatusError {
    /// Status 1 — the board rejected the frame's checksum.
    #[error("wrong checksum")]
    WrongChecksum,

    /// Status 2 — the opcode is not a known command.
    #[error("invalid command")]
    InvalidCommand,

    /// Status 3 — the type number does not fit the command.
    #[error("wrong type")]
    WrongType,

    /// Status 4 — the type number is out of range.
    #[error("invalid type")]
    InvalidType,

    /// Status 5 — the target EEPROM/configuration region is
    /// write-protected.
    #[error("configuration EEPROM locked")]
    ConfigurationLocked,

    /// Status 6 — the command exists but is not available on this board.
    #[error("command not available")]
    CommandNotAvailable,

    /// Any status code outside the defined set.
    #[error("board returned unexpected status code {0}")]
    Unknown(u8),
}

/// Classify a reply status byte.
///
/// `Ok(())` for both success codes; the stored/not-stored distinction is
/// not surfaced.
///
/// # Example
///
/// ```
/// use tmcl_client::protocol::{classify_status, StatusError};
///
/// assert!(classify_status(100).is_ok());
/// assert!(classify_status(101).is_ok());
/// assert_eq!(classify_status(5), Err(StatusError::ConfigurationLocked));
/// assert_eq!(classify_status(73), Err(StatusError::Unknown(73)));
/// ```
pub fn classify_status(code: u8) -> Result<(), StatusError> {
    match code {
        STATUS_SUCCESS | STATUS_SUCCESS_STORED => Ok(()),
        1 => Err(StatusError::WrongChecksum),
        2 => Err(StatusError::InvalidCommand),
        3 => Err(StatusError::WrongType),
        4 => Err(StatusError::InvalidType),
        5 => Err(StatusError::ConfigurationLocked),
        6 => Err(StatusError::CommandNotAvailable),
        other => Err(StatusError::Unknown(other)),
    }
}
