//! A BER-encoded OCTET STRING.
//!
//! This is an internal module. It’s public types are re-exported by the
//! parent.

use std::ops;
use bytes::Bytes;
use crate::decode::{Content, DecodeError};
use crate::encode::PrimitiveContent;
use crate::ident::Tag;


//------------ OctetString ---------------------------------------------------

/// An octet string value.
///
/// An octet string is a sequence of octets, i.e., a glorified `[u8]`. The
/// octets are kept in a `Bytes` value so cloning is cheap.
///
/// # BER Encoding
///
/// Octet strings are either encoded as a primitive or a constructed value.
/// In the primitive form, the content octets are the string’s octets. In a
/// constructed form, the content is a sequence of encoded octets strings
/// which in turn may be primitive or constructed.
///
/// Only the primitive form is supported. It is also the only form allowed
/// in DER.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OctetString(Bytes);

impl OctetString {
    /// Creates an octet string from a Bytes value.
    pub fn new(bytes: Bytes) -> Self {
        OctetString(bytes)
    }

    /// Returns a slice of the octets.
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_ref()
    }

    /// Returns a bytes value of the octets.
    pub fn to_bytes(&self) -> Bytes {
        self.0.clone()
    }

    /// Converts the octet string into its bytes value.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// Returns the number of octets in the octet string.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the octet string is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses the content octets of an octet string value.
    pub fn take_content_from(
        content: &mut Content
    ) -> Result<Self, DecodeError> {
        Ok(OctetString(Bytes::copy_from_slice(content.as_slice())))
    }
}


//--- From

impl From<Bytes> for OctetString {
    fn from(bytes: Bytes) -> Self {
        OctetString(bytes)
    }
}

impl From<Vec<u8>> for OctetString {
    fn from(vec: Vec<u8>) -> Self {
        OctetString(vec.into())
    }
}

impl<'a> From<&'a [u8]> for OctetString {
    fn from(slice: &'a [u8]) -> Self {
        OctetString(Bytes::copy_from_slice(slice))
    }
}


//--- Deref and AsRef

impl ops::Deref for OctetString {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for OctetString {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}


//--- PrimitiveContent

impl PrimitiveContent for OctetString {
    const TAG: Tag = Tag::OCTET_STRING;

    fn content_len(&self) -> usize {
        self.0.len()
    }

    fn append_content(&self, target: &mut Vec<u8>) {
        target.extend_from_slice(self.0.as_ref())
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::mode::Mode;
    use super::*;

    #[test]
    fn decode_and_encode() {
        let value = OctetString::take_content_from(
            &mut Content::new(Mode::Der, b"\xFF\xA0", 0, 0)
        ).unwrap();
        assert_eq!(value.as_slice(), b"\xFF\xA0");
        assert_eq!(value.len(), 2);
        assert_eq!(value.content_to_vec(), b"\xFF\xA0");

        let value = OctetString::from(b"".as_ref());
        assert!(value.is_empty());
        assert_eq!(value.encoded_len(), 2);
    }
}
