//! Everything related to the `Values` trait.
//!
//! This is an internal module. The relevant items are re-exported by the
//! parent.

use crate::ident::Ident;
use crate::length;


//------------ Values --------------------------------------------------------

/// A type that can be encoded.
///
/// Types implementing this trait encode themselves into one or more
/// complete BER values, i.e., identifier octets, length octets, and
/// content. A slice of values encodes as the concatenation of the
/// encodings of its elements which is what the content of a constructed
/// value looks like.
pub trait Values {
    /// Returns the length of the encoded values.
    fn encoded_len(&self) -> usize;

    /// Appends the encoded values to the end of `target`.
    fn append_encoded(&self, target: &mut Vec<u8>);


    //--- Provided methods

    /// Returns the encoded values in a new vec.
    fn to_vec(&self) -> Vec<u8> {
        let mut target = Vec::with_capacity(self.encoded_len());
        self.append_encoded(&mut target);
        target
    }
}


//--- Blanket impls

impl<V: Values> Values for [V] {
    fn encoded_len(&self) -> usize {
        self.iter().map(Values::encoded_len).sum()
    }

    fn append_encoded(&self, target: &mut Vec<u8>) {
        self.iter().for_each(|item| item.append_encoded(target))
    }
}

impl<V: Values + ?Sized> Values for &'_ V {
    fn encoded_len(&self) -> usize {
        (*self).encoded_len()
    }

    fn append_encoded(&self, target: &mut Vec<u8>) {
        (*self).append_encoded(target)
    }
}


//------------ Helper Functions ----------------------------------------------

/// Returns the length for a value with the given identifier and content.
///
/// The returned length is the sum of the length of the identifier octets,
/// the length of the length octets, and `content_len`.
pub fn total_len(ident: Ident, content_len: usize) -> usize {
    ident.encoded_len() + length::encoded_len(content_len) + content_len
}

/// Appends the header of a value to `target`.
///
/// The header consists of the identifier octets and the length octets
/// for content of the given length.
pub fn append_header(target: &mut Vec<u8>, ident: Ident, content_len: usize) {
    ident.append_encoded(target);
    length::append_encoded(content_len, target);
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::ident::Tag;
    use super::*;

    #[test]
    fn header() {
        let mut target = Vec::new();
        append_header(&mut target, Tag::SEQUENCE.ident(true), 0x80);
        assert_eq!(target, b"\x30\x81\x80");
        assert_eq!(total_len(Tag::SEQUENCE.ident(true), 0x80), 3 + 0x80);

        let mut target = Vec::new();
        append_header(&mut target, Tag::ctx(31).ident(false), 2);
        assert_eq!(target, b"\x9f\x1f\x02");
        assert_eq!(total_len(Tag::ctx(31).ident(false), 2), 5);
    }
}
