//! Numeric strings.

use crate::ident::Tag;
use super::charset::{CharSet, CharSetError, check_octets};
use super::string::RestrictedString;


//------------ NumericString -------------------------------------------------

/// A restricted character string containing only digits and spaces.
///
/// This character string allows only decimal digits `0` to `9` and the
/// space character ` `. It encodes them with their ASCII value.
///
/// See [`RestrictedString`] for more details on restricted character strings
/// in general.
pub type NumericString = RestrictedString<NumericCharSet>;


//------------ NumericCharSet ------------------------------------------------

/// The character set for the NumericString ASN.1 type.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumericCharSet;

impl CharSet for NumericCharSet {
    const TAG: Tag = Tag::NUMERIC_STRING;
    const NAME: &'static str = "NumericString";

    fn check_slice(slice: &[u8]) -> Result<(), CharSetError> {
        check_octets::<Self>(slice, |ch| ch == b' ' || ch.is_ascii_digit())
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn check() {
        assert!(NumericCharSet::check_slice(b"0123 456789").is_ok());
        assert_eq!(
            NumericCharSet::check_slice(b"12a").unwrap_err().index(), 2
        );
        assert!(NumericCharSet::check_slice(b"-1").is_err());
    }
}
