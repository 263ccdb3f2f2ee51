//! BER-encoded bit strings.
//!
//! This is a private module. Its public items are re-exported by the parent.

use bytes::Bytes;
use crate::decode::{Content, DecodeError, ValueError};
use crate::encode::PrimitiveContent;
use crate::ident::Tag;


//------------ BitString -----------------------------------------------------

/// A bit string value.
///
/// Bit strings are a sequence of bits. Unlike
/// [`OctetString`][crate::string::OctetString]s, they do not need to contain
/// a multiple of eight bits.
///
/// You can create a new bit string via the [`new`][Self::new] method. The
/// [`take_content_from`][Self::take_content_from] function parses the
/// content octets of a bit string value.
///
/// There are two types of methods for accessing the data in a bit string.
/// Methods starting with `bit` operate on the individual bits while those
/// prefixed with `octet` access entire octets and ignore the fact that there
/// may be unused bits in the final octet. The unused bits are kept exactly
/// as they were given or decoded.
///
/// # BER Encoding
///
/// If encoded as a primitive value, the first octet of the
/// content contains the number of unused bits in the last octet and the
/// following octets contain the bits with the first bit in the most
/// significant bit of the octet.
///
/// BER also allows a constructed encoding as a sequence of bit strings.
/// This encoding is not supported and results in an error.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct BitString {
    /// The number of unused bits in the last byte.
    unused: u8,

    /// The bytes of the bit string.
    bits: Bytes,
}

impl BitString {
    /// Creates a new bit string.
    ///
    /// Returns an error if `unused` is larger than 7 or if it isn’t zero
    /// for empty `bits`.
    pub fn new(unused: u8, bits: Bytes) -> Result<Self, ValueError> {
        if unused > 7 || (bits.is_empty() && unused != 0) {
            return Err(ValueError::UnusedBits(unused))
        }
        Ok(Self { unused, bits })
    }

    /// Returns the value of the given bit.
    ///
    /// Bits beyond the end of the bit string are `false`.
    pub fn bit(&self, bit: usize) -> bool {
        if bit >= self.bit_len() {
            return false
        }
        let idx = bit >> 3;
        let bit = 7 - (bit as u8 & 7);
        self.bits[idx] & (1 << bit) != 0
    }

    /// Returns the number of bits in the bit string.
    ///
    /// An empty bit string has no bits even if it claims unused bits.
    pub fn bit_len(&self) -> usize {
        (self.bits.len() << 3).saturating_sub(usize::from(self.unused))
    }

    /// Returns the number of unused bits in the last octet.
    pub fn unused(&self) -> u8 {
        self.unused
    }

    /// Returns the number of octets in the bit string.
    pub fn octet_len(&self) -> usize {
        self.bits.len()
    }

    /// Returns an iterator over the octets in the bit string.
    pub fn octets(&self) -> BitStringIter {
        BitStringIter(self.bits.iter())
    }

    /// Returns a slice of the octets in the bit string.
    pub fn octet_slice(&self) -> &[u8] {
        self.bits.as_ref()
    }

    /// Returns a bytes value of the octets of the bit string.
    pub fn octet_bytes(&self) -> Bytes {
        self.bits.clone()
    }

    /// Parses the content octets of a bit string value.
    ///
    /// In DER mode, an empty bit string must not claim unused bits.
    pub fn take_content_from(
        content: &mut Content
    ) -> Result<Self, DecodeError> {
        let (unused, bits) = match content.as_slice().split_first() {
            Some((unused, bits)) => (*unused, bits),
            None => {
                return Err(content.content_err(ValueError::EmptyBitString))
            }
        };
        if unused > 7 {
            return Err(content.content_err(ValueError::UnusedBits(unused)))
        }
        if bits.is_empty() && unused != 0 && content.mode().is_restricted() {
            return Err(content.content_err(ValueError::UnusedBits(unused)))
        }
        Ok(BitString { unused, bits: Bytes::copy_from_slice(bits) })
    }
}


//--- PrimitiveContent

impl PrimitiveContent for BitString {
    const TAG: Tag = Tag::BIT_STRING;

    fn content_len(&self) -> usize {
        self.bits.len() + 1
    }

    fn append_content(&self, target: &mut Vec<u8>) {
        target.push(self.unused);
        target.extend_from_slice(self.bits.as_ref())
    }
}


//------------ BitStringIter -------------------------------------------------

/// An iterator over the octets in the bit string.
#[derive(Clone, Debug)]
pub struct BitStringIter<'a>(::std::slice::Iter<'a, u8>);

impl<'a> Iterator for BitStringIter<'a> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.0.next().cloned()
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::decode::ErrorKind;
    use crate::mode::Mode;
    use super::*;

    fn take(mode: Mode, data: &[u8]) -> Result<BitString, DecodeError> {
        BitString::take_content_from(&mut Content::new(mode, data, 0, 0))
    }

    #[test]
    fn decode() {
        let bits = take(Mode::Der, b"\x05\xFF\xA0").unwrap();
        assert_eq!(bits.unused(), 5);
        assert_eq!(bits.octet_slice(), b"\xFF\xA0");
        assert_eq!(bits.bit_len(), 11);

        let bits = take(Mode::Der, b"\x00").unwrap();
        assert_eq!(bits.unused(), 0);
        assert_eq!(bits.octet_len(), 0);

        assert_eq!(
            take(Mode::Der, b"").unwrap_err().kind(),
            &ErrorKind::Value(ValueError::EmptyBitString)
        );
        assert_eq!(
            take(Mode::Ber, b"\x08\xFF").unwrap_err().kind(),
            &ErrorKind::Value(ValueError::UnusedBits(8))
        );
        assert!(take(Mode::Ber, b"\x03").is_ok());
        assert!(take(Mode::Der, b"\x03").is_err());
    }

    #[test]
    fn empty_with_unused_bits() {
        let bits = take(Mode::Ber, b"\x04").unwrap();
        assert_eq!(bits.unused(), 4);
        assert_eq!(bits.bit_len(), 0);
        assert!(!bits.bit(0));
        assert!(!bits.bit(7));
        assert_eq!(bits.octets().count(), 0);
        assert_eq!(bits.content_to_vec(), b"\x04");
    }

    #[test]
    fn unused_bits_preserved() {
        let bits = take(Mode::Der, b"\x04\xAF").unwrap();
        assert_eq!(bits.content_to_vec(), b"\x04\xAF");
    }

    #[test]
    fn new() {
        assert!(BitString::new(0, Bytes::new()).is_ok());
        assert!(BitString::new(1, Bytes::new()).is_err());
        assert!(BitString::new(8, Bytes::from_static(b"\x00")).is_err());
        assert!(BitString::new(7, Bytes::from_static(b"\x80")).is_ok());
    }

    #[test]
    fn bits() {
        let bits = BitString::new(4, Bytes::from_static(b"\xA5\xF0")).unwrap();
        assert!(bits.bit(0));
        assert!(!bits.bit(1));
        assert!(bits.bit(2));
        assert!(bits.bit(7));
        assert!(bits.bit(11));
        assert!(!bits.bit(12));
        assert!(!bits.bit(100));
        assert_eq!(bits.octets().collect::<Vec<_>>(), vec![0xA5, 0xF0]);
    }
}
