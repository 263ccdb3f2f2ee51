//! The decoding mode.
//!
//! This is a private module. Its public items are re-exported by the parent.

use crate::decode::{self, DecodeError, Objects};
use crate::object::Object;


//------------ Mode ----------------------------------------------------------

/// The encoding rules to apply when decoding.
///
/// The mode only affects how strictly input is checked. Encoding always
/// produces the shortest possible form and thus valid DER.
///
/// The Canonical Encoding Rules aren’t supported since they require
/// indefinite length values for constructed types.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Mode {
    /// Basic Encoding Rules.
    ///
    /// These are the most flexible rules. Identifier octets, length octets,
    /// integers, and object identifier components may use more octets than
    /// necessary and any non-zero octet is accepted as a true boolean.
    #[default]
    Ber,

    /// Distinguished Encoding Rules.
    ///
    /// These rules require the shortest possible encoding everywhere and
    /// only allow `0x00` and `0xFF` as boolean content.
    Der,
}

impl Mode {
    /// Returns whether this mode is one of the restricted rules.
    pub fn is_restricted(self) -> bool {
        matches!(self, Mode::Der)
    }

    /// Decodes the value starting at `offset` in `data`.
    ///
    /// Returns the value and the offset of the first octet after it.
    pub fn decode(
        self, data: &[u8], offset: usize
    ) -> Result<(Object, usize), DecodeError> {
        decode::take_value(self, data, offset, 0).map_err(|err| {
            log::debug!("{:?} decoding failed: {}", self, err);
            err
        })
    }

    /// Decodes `data` which must contain exactly one value.
    pub fn decode_exact(self, data: &[u8]) -> Result<Object, DecodeError> {
        let (res, end) = self.decode(data, 0)?;
        if end != data.len() {
            return Err(DecodeError::new(decode::ErrorKind::TrailingData, end))
        }
        Ok(res)
    }

    /// Returns an iterator over the values concatenated in `data`.
    pub fn iter(self, data: &[u8]) -> Objects<'_> {
        Objects::new(self, data)
    }
}
