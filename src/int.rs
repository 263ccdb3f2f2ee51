//! BER encoded integers.
//!
//! This module provides two types: [`Integer`] for INTEGER values of
//! arbitrary size and [`Enumerated`] for ENUMERATED values which are
//! limited to non-negative values that fit into a `u64`.

use std::fmt;
use num::{BigInt, ToPrimitive};
use crate::decode::{Content, DecodeError, ErrorKind, ValueError};
use crate::encode::PrimitiveContent;
use crate::ident::Tag;


//------------ Integer -------------------------------------------------------

/// A BER encoded integer.
///
/// Integers in BER are variable length. We therefore keep them as a
/// [`BigInt`] which can hold any value. If the range of a native integer
/// type is enough, the various `to_*` methods can be used to convert.
///
/// # BER Encoding
///
/// In BER, an INTEGER is encoded as a primitive value with the content octets
/// providing a variable-length, big-endian, two‘s complement byte sequence of
/// that integer. Thus, the most-significant bit of the first octet serves as
/// the sign bit.
///
/// The encoding must use the smallest possible number of octets, i.e., the
/// first nine bits of a multi-octet integer must not all be the same. BER
/// mode decoding doesn’t enforce this, but encoding always produces the
/// minimal form.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Integer(BigInt);

impl Integer {
    /// Creates a new integer from a big integer.
    pub fn new(value: BigInt) -> Self {
        Integer(value)
    }

    /// Returns a reference to the big integer value.
    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    /// Converts the integer into the big integer value.
    pub fn into_bigint(self) -> BigInt {
        self.0
    }

    /// Returns the value as an `i64` if it fits.
    pub fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }

    /// Returns the value as a `u64` if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    /// Decodes the content of an INTEGER value.
    pub fn take_content_from(
        content: &mut Content
    ) -> Result<Self, DecodeError> {
        let octets = Self::check_head(content)?;
        Ok(Integer(BigInt::from_signed_bytes_be(octets)))
    }

    /// Checks that an integer is started correctly.
    ///
    /// Specifically, checks that there is at least one octet and, in DER
    /// mode, that the first nine bits of a multi-octet integer are not all
    /// the same.
    ///
    /// Returns the content octets.
    fn check_head<'a>(content: &Content<'a>) -> Result<&'a [u8], DecodeError> {
        let octets = content.as_slice();
        let first = match octets.first() {
            Some(first) => *first,
            None => return Err(content.content_err(ValueError::EmptyInteger))
        };
        if content.mode().is_restricted() {
            match (first, octets.get(1).map(|x| x & 0x80 != 0)) {
                (0, Some(false)) | (0xFF, Some(true)) => {
                    return Err(content.content_err(
                        ErrorKind::NonCanonical("non-minimal INTEGER")
                    ))
                }
                _ => { }
            }
        }
        Ok(octets)
    }
}


//--- From

impl From<BigInt> for Integer {
    fn from(value: BigInt) -> Self {
        Integer(value)
    }
}

impl From<Integer> for BigInt {
    fn from(value: Integer) -> Self {
        value.0
    }
}

macro_rules! from_builtin {
    ( $( $type:ident ),* ) => {
        $(
            impl From<$type> for Integer {
                fn from(value: $type) -> Self {
                    Integer(BigInt::from(value))
                }
            }
        )*
    }
}

from_builtin!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);


//--- PrimitiveContent

impl PrimitiveContent for Integer {
    const TAG: Tag = Tag::INTEGER;

    fn content_len(&self) -> usize {
        self.0.to_signed_bytes_be().len()
    }

    fn append_content(&self, target: &mut Vec<u8>) {
        target.extend_from_slice(&self.0.to_signed_bytes_be())
    }
}


//--- Display

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}


//------------ Enumerated ----------------------------------------------------

/// A BER encoded ENUMERATED value.
///
/// The content of an ENUMERATED value is encoded exactly like an INTEGER
/// but with tag 10. We only support the non-negative values that fit into a
/// `u64` which is what enumerations use in practice. Anything else is
/// rejected as a content error.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Enumerated(u64);

impl Enumerated {
    /// Creates a new value from the index.
    pub const fn new(value: u64) -> Self {
        Enumerated(value)
    }

    /// Returns the index.
    pub const fn to_u64(self) -> u64 {
        self.0
    }

    /// Decodes the content of an ENUMERATED value.
    pub fn take_content_from(
        content: &mut Content
    ) -> Result<Self, DecodeError> {
        let octets = Integer::check_head(content)?;
        match BigInt::from_signed_bytes_be(octets).to_u64() {
            Some(value) => Ok(Enumerated(value)),
            None => Err(content.content_err(ValueError::EnumeratedRange))
        }
    }

    /// Returns the index of the first content octet in the big-endian
    /// representation of the value.
    fn start_idx(self) -> usize {
        (self.0.leading_zeros() / 8) as usize
    }

    /// Returns whether the content needs a leading zero for the sign bit.
    fn needs_pad(self) -> bool {
        self.0 == 0 || self.0.leading_zeros() % 8 == 0
    }
}

impl From<u64> for Enumerated {
    fn from(value: u64) -> Self {
        Enumerated(value)
    }
}

impl From<Enumerated> for u64 {
    fn from(value: Enumerated) -> Self {
        value.0
    }
}

impl PrimitiveContent for Enumerated {
    const TAG: Tag = Tag::ENUMERATED;

    fn content_len(&self) -> usize {
        let len = 8 - self.start_idx();
        if self.needs_pad() {
            len + 1
        }
        else {
            len
        }
    }

    fn append_content(&self, target: &mut Vec<u8>) {
        if self.needs_pad() {
            target.push(0)
        }
        target.extend_from_slice(&self.0.to_be_bytes()[self.start_idx()..])
    }
}

impl fmt::Display for Enumerated {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::mode::Mode;
    use super::*;

    fn int(mode: Mode, data: &[u8]) -> Result<Integer, DecodeError> {
        Integer::take_content_from(&mut Content::new(mode, data, 0, 0))
    }

    fn enumerated(
        mode: Mode, data: &[u8]
    ) -> Result<Enumerated, DecodeError> {
        Enumerated::take_content_from(&mut Content::new(mode, data, 0, 0))
    }

    #[test]
    fn decode_integer() {
        assert_eq!(int(Mode::Der, b"\x00"), Ok(Integer::from(0)));
        assert_eq!(int(Mode::Der, b"\x7B"), Ok(Integer::from(123)));
        assert_eq!(int(Mode::Der, b"\xFF"), Ok(Integer::from(-1)));
        assert_eq!(int(Mode::Der, b"\x00\x80"), Ok(Integer::from(128)));
        assert_eq!(int(Mode::Der, b"\x80\xFF"), Ok(Integer::from(-32513)));
        assert_eq!(
            int(Mode::Der, b"\x01\x00\x00\x00\x00\x00\x00\x00\x00"),
            Ok(Integer::from(1u128 << 64))
        );
        assert_eq!(
            int(Mode::Der, b"").unwrap_err().kind(),
            &ErrorKind::Value(ValueError::EmptyInteger)
        );
    }

    #[test]
    fn decode_non_minimal_integer() {
        assert_eq!(int(Mode::Ber, b"\x00\x7F"), Ok(Integer::from(127)));
        assert_eq!(int(Mode::Ber, b"\xFF\x80"), Ok(Integer::from(-128)));
        assert!(int(Mode::Der, b"\x00\x7F").is_err());
        assert!(int(Mode::Der, b"\xFF\x80").is_err());
    }

    #[test]
    fn encode_integer() {
        fn step(value: i64, content: &[u8]) {
            let value = Integer::from(value);
            assert_eq!(value.content_to_vec(), content);
            assert_eq!(value.content_len(), content.len());
        }

        step(0, b"\x00");
        step(127, b"\x7F");
        step(128, b"\x00\x80");
        step(256, b"\x01\x00");
        step(-1, b"\xFF");
        step(-128, b"\x80");
        step(-129, b"\xFF\x7F");
    }

    #[test]
    fn enumerated_values() {
        assert_eq!(enumerated(Mode::Der, b"\x03"), Ok(Enumerated::new(3)));
        assert_eq!(
            enumerated(Mode::Der, b"\x00\xFF\xFF\xFF\xFF\xFF\xFF\xFF\xFF"),
            Ok(Enumerated::new(u64::MAX))
        );
        assert_eq!(
            enumerated(Mode::Der, b"\xFF").unwrap_err().kind(),
            &ErrorKind::Value(ValueError::EnumeratedRange)
        );
        assert_eq!(
            enumerated(
                Mode::Der, b"\x01\x00\x00\x00\x00\x00\x00\x00\x00"
            ).unwrap_err().kind(),
            &ErrorKind::Value(ValueError::EnumeratedRange)
        );

        assert_eq!(Enumerated::new(0).content_to_vec(), b"\x00");
        assert_eq!(Enumerated::new(3).content_to_vec(), b"\x03");
        assert_eq!(Enumerated::new(0x80).content_to_vec(), b"\x00\x80");
        assert_eq!(Enumerated::new(0x1234).content_to_vec(), b"\x12\x34");
        assert_eq!(Enumerated::new(u64::MAX).content_len(), 9);
    }
}
