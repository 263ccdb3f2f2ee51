//! BOOLEAN and NULL values.
//!
//! Both types are represented by native Rust types, `bool` and `()`
//! respectively. This module provides their content decoders as methods on
//! [`Content`] and implements [`PrimitiveContent`] for them.

use crate::decode::{Content, DecodeError, ErrorKind, ValueError};
use crate::encode::PrimitiveContent;
use crate::ident::Tag;


//------------ Decoding ------------------------------------------------------

/// # Decoding Simple Values
///
impl<'a> Content<'a> {
    /// Decodes the content as a BOOLEAN value.
    ///
    /// The content must be exactly one octet. Any value other than zero is
    /// true in BER. DER requires true to be encoded as 0xFF.
    pub fn to_bool(&self) -> Result<bool, DecodeError> {
        let octet = match *self.as_slice() {
            [octet] => octet,
            _ => {
                return Err(
                    self.content_err(ValueError::BooleanLength(self.len()))
                )
            }
        };
        if self.mode().is_restricted() {
            match octet {
                0 => Ok(false),
                0xFF => Ok(true),
                _ => {
                    Err(self.content_err(
                        ErrorKind::NonCanonical("BOOLEAN other than 0 or 0xFF")
                    ))
                }
            }
        }
        else {
            Ok(octet != 0)
        }
    }

    /// Decodes the content as a NULL value.
    pub fn to_null(&self) -> Result<(), DecodeError> {
        if self.is_empty() {
            Ok(())
        }
        else {
            Err(self.content_err(ValueError::NullLength(self.len())))
        }
    }
}


//------------ Encoding ------------------------------------------------------

impl PrimitiveContent for bool {
    const TAG: Tag = Tag::BOOLEAN;

    fn content_len(&self) -> usize {
        1
    }

    fn append_content(&self, target: &mut Vec<u8>) {
        if *self {
            target.push(0xFF)
        }
        else {
            target.push(0)
        }
    }
}

impl PrimitiveContent for () {
    const TAG: Tag = Tag::NULL;

    fn content_len(&self) -> usize {
        0
    }

    fn append_content(&self, _: &mut Vec<u8>) { }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::mode::Mode;
    use super::*;

    fn content(mode: Mode, data: &[u8]) -> Content {
        Content::new(mode, data, 0, 0)
    }

    #[test]
    fn decode_bool() {
        assert_eq!(content(Mode::Ber, b"\x00").to_bool(), Ok(false));
        assert_eq!(content(Mode::Ber, b"\xFF").to_bool(), Ok(true));
        assert_eq!(content(Mode::Ber, b"\x01").to_bool(), Ok(true));
        assert_eq!(content(Mode::Der, b"\x00").to_bool(), Ok(false));
        assert_eq!(content(Mode::Der, b"\xFF").to_bool(), Ok(true));
        assert!(content(Mode::Der, b"\x01").to_bool().is_err());
        assert_eq!(
            content(Mode::Ber, b"").to_bool().unwrap_err().kind(),
            &ErrorKind::Value(ValueError::BooleanLength(0))
        );
        assert_eq!(
            content(Mode::Ber, b"\x00\x00").to_bool().unwrap_err().kind(),
            &ErrorKind::Value(ValueError::BooleanLength(2))
        );
    }

    #[test]
    fn decode_null() {
        assert_eq!(content(Mode::Ber, b"").to_null(), Ok(()));
        assert_eq!(
            content(Mode::Ber, b"\x00").to_null().unwrap_err().kind(),
            &ErrorKind::Value(ValueError::NullLength(1))
        );
    }

    #[test]
    fn encode() {
        assert_eq!(true.content_to_vec(), b"\xFF");
        assert_eq!(false.content_to_vec(), b"\x00");
        assert_eq!(().content_to_vec(), b"");
        let mut target = Vec::new();
        true.append_encoded(&mut target);
        ().append_encoded(&mut target);
        assert_eq!(target, b"\x01\x01\xFF\x05\x00");
    }
}
