// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! SPLICE binary codec.
//!
//! Layout (all multi-byte values little-endian):
//!
//! | Offset | Width | Field    |
//! |--------|-------|----------|
//! | 0      | 6     | magic `SPLICE` |
//! | 6      | 8     | reserved (ignored on decode, zero on encode) |
//! | 14     | 32    | version, null padded |
//! | 46     | 4     | tempo, f32 |
//! | 50..   | var   | track records until end of stream |
//!
//! Each track record is a 4 byte `i32` id, a 1 byte name length `N`,
//! `N` name bytes and 16 step bytes.
//!
//! The codec works over any [`std::io::Read`] / [`std::io::Write`] and
//! never logs; opening files is left to [`crate::file`].

pub mod decode;
pub mod encode;

pub use decode::decode;
pub use encode::{encode, encode_to_vec};

use std::fmt;
use std::io;

use thiserror::Error;

/// File identifier
pub const MAGIC: &[u8; 6] = b"SPLICE";

/// Width of the identifier field, magic included
pub const IDENTIFIER_LEN: usize = 14;

/// Width of the version field
pub const VERSION_LEN: usize = 32;

/// Longest name a track record can carry
pub const MAX_NAME_LEN: usize = u8::MAX as usize;

/// Wire field, used to give errors context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Identifier,
    Version,
    Tempo,
    TrackId,
    NameLength,
    Name,
    Steps,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Identifier => "identifier",
            Field::Version => "version",
            Field::Tempo => "tempo",
            Field::TrackId => "track id",
            Field::NameLength => "track name length",
            Field::Name => "track name",
            Field::Steps => "track steps",
        };
        f.write_str(name)
    }
}

/// Errors produced while decoding or encoding a pattern
#[derive(Debug, Error)]
pub enum CodecError {
    /// Stream does not start with `SPLICE`
    #[error("expected stream to start with 'SPLICE'")]
    MissingIdentifier,

    /// Short or failed read
    #[error("unable to read {field}")]
    StreamRead {
        field: Field,
        #[source]
        source: io::Error,
    },

    /// Failed write
    #[error("unable to write {field}")]
    StreamWrite {
        field: Field,
        #[source]
        source: io::Error,
    },

    /// Value too long for its fixed or length-prefixed field
    #[error("{field} is {len} bytes, at most {max} fit")]
    CapacityExceeded { field: Field, len: usize, max: usize },
}

impl CodecError {
    /// Field the error refers to, if any
    pub fn field(&self) -> Option<Field> {
        match self {
            CodecError::MissingIdentifier => Some(Field::Identifier),
            CodecError::StreamRead { field, .. }
            | CodecError::StreamWrite { field, .. }
            | CodecError::CapacityExceeded { field, .. } => Some(*field),
        }
    }
}

pub(crate) fn read_error(field: Field) -> impl FnOnce(io::Error) -> CodecError {
    move |source| CodecError::StreamRead { field, source }
}

pub(crate) fn write_error(field: Field) -> impl FnOnce(io::Error) -> CodecError {
    move |source| CodecError::StreamWrite { field, source }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CodecError::MissingIdentifier.to_string(),
            "expected stream to start with 'SPLICE'"
        );

        let err = CodecError::CapacityExceeded {
            field: Field::Version,
            len: 33,
            max: VERSION_LEN,
        };
        assert_eq!(err.to_string(), "version is 33 bytes, at most 32 fit");
        assert_eq!(err.field(), Some(Field::Version));

        let err = read_error(Field::NameLength)(io::ErrorKind::UnexpectedEof.into());
        assert_eq!(err.to_string(), "unable to read track name length");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_header_width() {
        assert_eq!(IDENTIFIER_LEN + VERSION_LEN + 4, 50);
    }
}
