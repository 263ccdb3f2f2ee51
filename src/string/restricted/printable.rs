//! Printable strings.

use crate::ident::Tag;
use super::charset::{CharSet, CharSetError, check_octets};
use super::string::RestrictedString;


//------------ PrintableString -----------------------------------------------

/// A restricted character string allowing a subset of ASCII characters.
///
/// This character string allows the following characters from the ASCII
/// character set and encodes them with their ASCII value:
///
/// * the letters `A` to `Z` and `a` to `z`,
/// * the digits `0` to `9`,
/// * the space character ` `,
/// * the symbols `'`, `(`, `)`, `+`, `,`, `-`, `.`, `/`, `:`, `=`, and `?`.
///
/// See [`RestrictedString`] for more details on restricted character strings
/// in general.
pub type PrintableString = RestrictedString<PrintableCharSet>;


//------------ PrintableCharSet ----------------------------------------------

/// The character set for the PrintableString ASN.1 type.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrintableCharSet;

impl CharSet for PrintableCharSet {
    const TAG: Tag = Tag::PRINTABLE_STRING;
    const NAME: &'static str = "PrintableString";

    fn check_slice(slice: &[u8]) -> Result<(), CharSetError> {
        check_octets::<Self>(slice, |x| {
            x.is_ascii_alphanumeric() || // A-Z a-z 0-9
            x == b' ' || x == b'\'' || x == b'(' || x == b')' ||
            x == b'+' || x == b',' || x == b'-' || x == b'.' ||
            x == b'/' || x == b':' || x == b'=' || x == b'?'
        })
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn check() {
        assert!(PrintableCharSet::check_slice(b"This is okay").is_ok());
        assert!(
            PrintableCharSet::check_slice(b"A-Z a-z 0-9 '()+,-./:=?").is_ok()
        );
        assert_eq!(
            PrintableCharSet::check_slice(b"This is wrong!")
                .unwrap_err().index(),
            13
        );
        assert!(PrintableCharSet::check_slice(b"a@b").is_err());
        assert!(PrintableCharSet::check_slice(b"*").is_err());
    }
}
