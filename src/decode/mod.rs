//! Decoding BER encoded values.
//!
//! The entry point is the [`decode`] function which decodes a single value
//! at a given offset of the input and returns the value together with the
//! offset of the first octet after it. This makes it possible to decode a
//! sequence of values concatenated together. The [`iter`] function and the
//! [`Objects`] iterator it returns make that a little more convenient.
//!
//! Decoding happens in one of two modes, see [`Mode`]. The functions here
//! use BER, the methods on [`Mode`] allow choosing.
//!
//! Value types decode their content from a [`Content`] which provides the
//! exact content octets of a value and, for constructed values, allows
//! decoding the nested values one by one.

pub use self::error::{DecodeError, ErrorKind, ValueError};
pub use self::source::{Content, Pos};

use crate::ident::Ident;
use crate::length;
use crate::mode::Mode;
use crate::object::Object;
use crate::registry;

mod error;
mod source;


//------------ Configuration -------------------------------------------------

/// The maximum number of values a value can be nested in.
///
/// Values nested deeper than this are rejected with an error.
pub const MAX_DEPTH: usize = 64;


//------------ Functions -----------------------------------------------------

/// Decodes the value starting at `offset` in `data` using BER.
///
/// Returns the value and the offset of the first octet after the value.
pub fn decode(
    data: &[u8], offset: usize
) -> Result<(Object, usize), DecodeError> {
    Mode::Ber.decode(data, offset)
}

/// Decodes all values concatenated in `data` using BER.
pub fn decode_all(data: &[u8]) -> Result<Vec<Object>, DecodeError> {
    iter(data).collect()
}

/// Returns an iterator over the values concatenated in `data`.
pub fn iter(data: &[u8]) -> Objects<'_> {
    Objects::new(Mode::Ber, data)
}

/// Decodes one complete value.
///
/// The identifier and length octets are read starting at `offset`, the
/// content is handed to the content decoder selected by the registry.
pub(crate) fn take_value(
    mode: Mode, data: &[u8], offset: usize, depth: usize
) -> Result<(Object, usize), DecodeError> {
    if offset >= data.len() {
        return Err(DecodeError::unexpected_end(offset))
    }
    if depth > MAX_DEPTH {
        return Err(DecodeError::new(ErrorKind::TooDeep, offset))
    }
    let (ident, pos) = Ident::take_from(mode, data, offset)?;
    let (len, pos) = length::take_from(mode, data, pos)?;
    let end = match pos.checked_add(len) {
        Some(end) if end <= data.len() => end,
        _ => return Err(DecodeError::unexpected_end(pos))
    };
    log::trace!("{} with {} content octets at offset {}", ident, len, offset);
    let mut content = Content::new(mode, &data[..end], pos, depth);
    let res = registry::decode_content(ident, offset, &mut content)?;
    Ok((res, end))
}


//------------ Objects -------------------------------------------------------

/// An iterator over a sequence of concatenated values.
///
/// The iterator returns each value in turn until the end of the data is
/// reached. If decoding a value fails, the error is returned and the
/// iterator ends.
#[derive(Clone, Debug)]
pub struct Objects<'a> {
    /// The mode to decode in.
    mode: Mode,

    /// The complete data.
    data: &'a [u8],

    /// The offset of the next value.
    ///
    /// If this is `None`, an error happened and iteration is over.
    pos: Option<usize>,
}

impl<'a> Objects<'a> {
    pub(crate) fn new(mode: Mode, data: &'a [u8]) -> Self {
        Objects { mode, data, pos: Some(0) }
    }

    /// Returns the offset of the next value to be decoded.
    pub fn pos(&self) -> Option<usize> {
        self.pos
    }
}

impl<'a> Iterator for Objects<'a> {
    type Item = Result<Object, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.pos?;
        if pos == self.data.len() {
            return None
        }
        match self.mode.decode(self.data, pos) {
            Ok((res, end)) => {
                self.pos = Some(end);
                Some(Ok(res))
            }
            Err(err) => {
                self.pos = None;
                Some(Err(err))
            }
        }
    }
}
