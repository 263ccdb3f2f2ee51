//! UTF8 strings.

use std::str;
use crate::ident::Tag;
use super::charset::{CharSet, CharSetError};
use super::string::RestrictedString;


//------------ Utf8String ----------------------------------------------------

/// A restricted character string containing UTF-8 encoded characters.
///
/// This character string allows all Unicode code points. It represents them
/// as a sequence of octets according to the UTF-8 encoding defined in
/// [RFC 3629].
///
/// See [`RestrictedString`] for more details on restricted character strings
/// in general.
///
/// [RFC 3629]: https://tools.ietf.org/html/rfc3629
pub type Utf8String = RestrictedString<Utf8CharSet>;


//------------ Utf8CharSet ---------------------------------------------------

/// The character set for the UTF8String ASN.1 type.
#[derive(Clone, Copy, Debug, Default)]
pub struct Utf8CharSet;

impl CharSet for Utf8CharSet {
    const TAG: Tag = Tag::UTF8_STRING;
    const NAME: &'static str = "UTF8String";

    fn check_slice(slice: &[u8]) -> Result<(), CharSetError> {
        str::from_utf8(slice).map(|_| ()).map_err(|err| {
            CharSetError::new::<Self>(err.valid_up_to())
        })
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn check() {
        assert!(Utf8CharSet::check_slice("Grüße, 世界".as_bytes()).is_ok());
        assert_eq!(
            Utf8CharSet::check_slice(b"ab\xc3").unwrap_err().index(), 2
        );
        assert_eq!(
            Utf8CharSet::check_slice(b"\xff").unwrap_err().index(), 0
        );
    }
}
