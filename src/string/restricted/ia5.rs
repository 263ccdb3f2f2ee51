//! IA5 strings.

use crate::ident::Tag;
use super::charset::{CharSet, CharSetError, check_octets};
use super::string::RestrictedString;


//------------ Ia5String -----------------------------------------------------

/// A restricted character string containing ASCII characters.
///
/// This character string allows all ASCII characters (i.e., octets with
/// values `0x00` to `0x7F`) and encodes them with their ASCII value.
///
/// The type’s name is derived from the name used in ASN.1. It is derived
/// from the name IA5 or International Alphabet No. 5 which is the ITU name
/// for ASCII and is specified in ITU.T recommendation T.50.
///
/// See [`RestrictedString`] for more details on restricted character strings
/// in general.
pub type Ia5String = RestrictedString<Ia5CharSet>;


//------------ Ia5CharSet ----------------------------------------------------

/// The character set for the IA5String ASN.1 type.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ia5CharSet;

impl CharSet for Ia5CharSet {
    const TAG: Tag = Tag::IA5_STRING;
    const NAME: &'static str = "IA5String";

    fn check_slice(slice: &[u8]) -> Result<(), CharSetError> {
        check_octets::<Self>(slice, |ch| ch.is_ascii())
    }
}


//============ Tests =========================================================
