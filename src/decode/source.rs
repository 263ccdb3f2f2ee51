//! The content octets handed to value decoders.
//!
//! This is a private module. Its public content is being re-exported by the
//! parent.

use std::{fmt, ops};
use crate::mode::Mode;
use crate::object::Object;
use super::error::{DecodeError, ErrorKind};


//------------ Content -------------------------------------------------------

/// The content octets of a single encoded value.
///
/// A value of this type is given to the content decoders of the various
/// value types. It provides access to exactly the content octets of the
/// value, the mode decoding happens in, and the position of the octets
/// within the original input so that errors can be reported with the
/// correct offset.
///
/// For constructed values, the content can be walked value by value via
/// [`take_value`][Self::take_value]. The content keeps track of how far it
/// has been walked.
#[derive(Clone, Debug)]
pub struct Content<'a> {
    /// The input data up to the end of the content.
    ///
    /// Offsets into this slice are offsets into the original input.
    data: &'a [u8],

    /// The offset of the first content octet.
    start: usize,

    /// The offset of the next value of constructed content.
    pos: usize,

    /// The mode we are decoding in.
    mode: Mode,

    /// The number of values this content is nested in.
    depth: usize,
}

impl<'a> Content<'a> {
    /// Creates new content.
    ///
    /// The content are the octets of `data` starting at `start`.
    pub(crate) fn new(
        mode: Mode, data: &'a [u8], start: usize, depth: usize
    ) -> Self {
        debug_assert!(start <= data.len());
        Content { data, start, pos: start, mode, depth }
    }

    /// Returns the mode the content is decoded in.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the position of the first content octet.
    pub fn start(&self) -> Pos {
        self.start.into()
    }

    /// Returns the position of the end of the content.
    pub fn end(&self) -> Pos {
        self.data.len().into()
    }

    /// Returns the content octets.
    pub fn as_slice(&self) -> &'a [u8] {
        let data = self.data;
        &data[self.start..]
    }

    /// Returns the number of content octets.
    pub fn len(&self) -> usize {
        self.data.len() - self.start
    }

    /// Returns whether the content is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether all values of constructed content have been taken.
    pub fn is_exhausted(&self) -> bool {
        self.pos == self.data.len()
    }

    /// Takes the next value from constructed content.
    ///
    /// Returns `Ok(None)` if the end of the content has been reached. A
    /// value that extends beyond the end of the content results in an
    /// error.
    pub fn take_value(&mut self) -> Result<Option<Object>, DecodeError> {
        if self.is_exhausted() {
            return Ok(None)
        }
        let (res, end) = super::take_value(
            self.mode, self.data, self.pos, self.depth + 1
        )?;
        self.pos = end;
        Ok(Some(res))
    }

    /// Takes all remaining values from constructed content.
    pub fn take_all_values(&mut self) -> Result<Vec<Object>, DecodeError> {
        let mut res = Vec::new();
        while let Some(value) = self.take_value()? {
            res.push(value)
        }
        Ok(res)
    }

    /// Returns an error at the start of the content.
    pub fn content_err(&self, kind: impl Into<ErrorKind>) -> DecodeError {
        DecodeError::new(kind, self.start)
    }

    /// Returns an error at the given index into the content octets.
    pub fn content_err_at(
        &self, index: usize, kind: impl Into<ErrorKind>
    ) -> DecodeError {
        DecodeError::new(kind, self.start + index)
    }
}


//------------ Pos -----------------------------------------------------------

/// The logical position within the input.
///
/// This is the offset of an octet from the start of the data given to the
/// decoder. We use a newtype so that positions used for diagnostics don’t
/// get mixed up with other numbers.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Pos(usize);

impl From<usize> for Pos {
    fn from(pos: usize) -> Pos {
        Pos(pos)
    }
}

impl From<Pos> for usize {
    fn from(pos: Pos) -> usize {
        pos.0
    }
}

impl ops::Add<usize> for Pos {
    type Output = Self;

    fn add(self, rhs: usize) -> Self {
        Pos(self.0 + rhs)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}
