use bytes::Bytes;
use thiserror::Error;

/// Errors produced while decoding bencode.
///
/// Every variant carries the byte offset into the input at which the
/// problem was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid token {found:?} at offset {offset}, expected one of 'i', 'l', 'd', 'f' or a digit")]
    InvalidToken { offset: usize, found: char },

    #[error("unexpected end of input at offset {offset}, expected {expected}")]
    UnexpectedEnd {
        offset: usize,
        expected: &'static str,
    },

    #[error("insufficient data at offset {offset}: need {needed} bytes, {available} available")]
    InsufficientData {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("dictionary key at offset {offset} must be a byte string, found {found:?}")]
    KeyTypeError { offset: usize, found: char },

    #[error("duplicate dictionary key {name:?} at offset {offset}", name = String::from_utf8_lossy(.key))]
    DuplicateKey { offset: usize, key: Bytes },

    #[error("nesting deeper than {limit} levels at offset {offset}")]
    NestingTooDeep { offset: usize, limit: usize },

    #[error("number at offset {offset} does not fit in {target}")]
    Overflow {
        offset: usize,
        target: &'static str,
    },

    #[error("malformed number at offset {offset}: {reason}")]
    MalformedNumber {
        offset: usize,
        reason: &'static str,
    },

    #[error("float at offset {offset} requires the float extension")]
    FloatExtensionDisallowed { offset: usize },

    #[error("{remaining} bytes of trailing data at offset {offset}")]
    TrailingData { offset: usize, remaining: usize },
}

impl DecodeError {
    /// Byte offset in the input where the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            DecodeError::InvalidToken { offset, .. }
            | DecodeError::UnexpectedEnd { offset, .. }
            | DecodeError::InsufficientData { offset, .. }
            | DecodeError::KeyTypeError { offset, .. }
            | DecodeError::DuplicateKey { offset, .. }
            | DecodeError::NestingTooDeep { offset, .. }
            | DecodeError::Overflow { offset, .. }
            | DecodeError::MalformedNumber { offset, .. }
            | DecodeError::FloatExtensionDisallowed { offset }
            | DecodeError::TrailingData { offset, .. } => *offset,
        }
    }
}

/// Errors produced while encoding a [`Value`](crate::Value).
///
/// The offset is the position in the output where the offending value
/// would have started.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("float at output offset {offset} requires the float extension")]
    FloatExtensionDisallowed { offset: usize },

    #[error("non-finite float {value} at output offset {offset} has no encoding")]
    NonFiniteFloat { offset: usize, value: f64 },
}

impl EncodeError {
    /// Output offset at which encoding stopped.
    pub fn offset(&self) -> usize {
        match self {
            EncodeError::FloatExtensionDisallowed { offset }
            | EncodeError::NonFiniteFloat { offset, .. } => *offset,
        }
    }
}
