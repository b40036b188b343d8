use core::fmt;

use thiserror::Error;

/// Why a fallible extraction (`try_*`) on a [`View`](crate::View) failed.
///
/// The infallible getters swallow these and return the zero value instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    /// The view has no content, usually the result of a failed lookup.
    #[error("view is empty")]
    Empty,
    /// The view holds a different kind of JSON value.
    #[error("expected {expected}, found {found}")]
    Mismatch {
        /// What the extraction needed.
        expected: Kind,
        /// What the view holds.
        found: Kind,
    },
    /// The numeric parse did not consume the whole token.
    #[error("numeric literal is not fully consumed by the parse")]
    InvalidNumber,
    /// A numeric token in a wide encoding is longer than the transcoding
    /// buffer.
    #[error("numeric literal of {len} code units is too long")]
    TooLong {
        /// Token length in code units.
        len: usize,
    },
    /// The raw string bytes are not UTF-8.
    #[error("string is not valid UTF-8")]
    Utf8,
}

/// Coarse classification of what a [`View`](crate::View) holds, derived
/// from its first and last characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `{...}`
    Object,
    /// `[...]`
    Array,
    /// A quoted string with no key.
    String,
    /// A bare token made of number characters.
    Number,
    /// `true` or `false`.
    Boolean,
    /// `null`.
    Null,
    /// An object member, `"key": value`.
    Member,
    /// Empty or unrecognised content.
    Unknown,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Object => "object",
            Kind::Array => "array",
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::Null => "null",
            Kind::Member => "member",
            Kind::Unknown => "unknown",
        })
    }
}
