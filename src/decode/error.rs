//! Error Handling.
//!
//! This is a private module. Its public content is being re-exported by the
//! parent.

use std::{error, fmt};
use crate::ident::Ident;
use crate::string::CharSetError;
use super::source::Pos;


//------------ DecodeError ---------------------------------------------------

/// An error happened while decoding data.
///
/// The error knows the position in the input where the problem was
/// detected as well as what kind of problem it was. Decoding never returns
/// partial results: either the requested value has been decoded completely
/// or an error is returned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodeError {
    /// What went wrong.
    kind: ErrorKind,

    /// The position in the input where the problem was found.
    pos: Pos,
}

impl DecodeError {
    /// Creates a new error of the given kind at the given position.
    pub fn new(kind: impl Into<ErrorKind>, pos: impl Into<Pos>) -> Self {
        DecodeError { kind: kind.into(), pos: pos.into() }
    }

    /// Creates an error signalling the end of data at the given position.
    pub fn unexpected_end(pos: impl Into<Pos>) -> Self {
        Self::new(ErrorKind::UnexpectedEnd, pos)
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the position in the input where the error was detected.
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Returns the offset into the input where the error was detected.
    pub fn offset(&self) -> usize {
        self.pos.into()
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "decode error at offset {}: {}", self.pos, self.kind)
    }
}

impl error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.kind {
            ErrorKind::Value(ref err) => Some(err),
            _ => None
        }
    }
}


//------------ ErrorKind -----------------------------------------------------

/// The kinds of problems that can happen while decoding.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The data ended before the value was complete.
    #[error("unexpected end of data")]
    UnexpectedEnd,

    /// The length octets signal an indefinite length.
    #[error("indefinite length values are not supported")]
    IndefiniteLength,

    /// The length octets are malformed.
    #[error("invalid length: {0}")]
    InvalidLength(&'static str),

    /// The length doesn’t fit into a `usize`.
    #[error("excessive length")]
    ExcessiveLength,

    /// The tag number doesn’t fit into a `u32`.
    #[error("tag number too large")]
    TagNumberTooLarge,

    /// A known tag was used with the wrong encoding form.
    #[error("{0} not allowed")]
    InvalidForm(Ident),

    /// There is no type for the tag.
    #[error("no decoder for {0}")]
    UnknownTag(Ident),

    /// The encoding is valid BER but not allowed in DER.
    #[error("{0} not allowed in DER")]
    NonCanonical(&'static str),

    /// The content violates the rules of its type.
    #[error(transparent)]
    Value(#[from] ValueError),

    /// There is data left after the value.
    #[error("trailing data")]
    TrailingData,

    /// Values are nested too deeply.
    #[error("values nested too deeply")]
    TooDeep,
}

impl From<CharSetError> for ErrorKind {
    fn from(err: CharSetError) -> Self {
        ErrorKind::Value(err.into())
    }
}


//------------ ValueError ----------------------------------------------------

/// A value violates the rules of its type.
///
/// This error is returned both when decoding content and when constructing
/// values from native data.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ValueError {
    #[error("BOOLEAN content must be one octet, got {0}")]
    BooleanLength(usize),

    #[error("NULL content must be empty, got {0} octets")]
    NullLength(usize),

    #[error("empty INTEGER content")]
    EmptyInteger,

    #[error("ENUMERATED value out of range")]
    EnumeratedRange,

    #[error("empty BIT STRING content")]
    EmptyBitString,

    #[error("invalid number of unused bits {0}")]
    UnusedBits(u8),

    #[error(transparent)]
    CharSet(#[from] CharSetError),

    #[error("empty OBJECT IDENTIFIER content")]
    EmptyOid,

    #[error("unterminated OBJECT IDENTIFIER component")]
    UnterminatedOid,

    #[error("OBJECT IDENTIFIER component too large")]
    OidComponentOverflow,

    #[error("invalid OBJECT IDENTIFIER: {0}")]
    InvalidOid(&'static str),

    #[error("explicitly tagged value must contain exactly one value, got {0}")]
    ExplicitContent(usize),

    #[error("explicit tag must be application or context specific")]
    ExplicitClass,
}
