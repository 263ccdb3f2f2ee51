//! The identifier octets of a BER encoded value.
//!
//! This is a private module. The relevant items are re-exported by the
//! parent.

use std::fmt;
use crate::base128;
use crate::decode::{DecodeError, ErrorKind};
use crate::mode::Mode;


//------------ Tag -----------------------------------------------------------

/// The tag of a value.
///
/// In ASN.1, tags are used to identify the type of a value. Tags consist of
/// one of four classes, represented by the [`Class`] enum, and a number
/// within this class. The number is an unsigned integer.
///
/// In BER encoding, the tag becomes part of the identifier octets by
/// combining it with a bit indicating whether a value is primitive or
/// constructed. This combination is represented by [`Ident`].
///
/// # Limitations
///
/// We only support tag numbers that fit into a `u32`. This should be more
/// than enough in practice.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Tag {
    /// The class of the tag.
    class: Class,

    /// The number of the tag within its class.
    number: u32,
}

impl Tag {
    /// Creates a tag from a class and number.
    pub const fn new(class: Class, number: u32) -> Self {
        Tag { class, number }
    }

    /// Creates a new tag in the universal class.
    pub const fn universal(number: u32) -> Self {
        Self::new(Class::Universal, number)
    }

    /// Creates a new tag in the application class.
    pub const fn application(number: u32) -> Self {
        Self::new(Class::Application, number)
    }

    /// Creates a new tag in class “context specific” with the given number.
    pub const fn ctx(number: u32) -> Self {
        Self::new(Class::Context, number)
    }

    /// Creates a new tag in the private class.
    pub const fn private(number: u32) -> Self {
        Self::new(Class::Private, number)
    }

    /// Returns the class of the tag.
    pub const fn class(self) -> Class {
        self.class
    }

    /// Returns the number of the tag.
    pub const fn number(self) -> u32 {
        self.number
    }

    /// Returns whether the tag is of the universal class.
    pub fn is_universal(self) -> bool {
        self.class == Class::Universal
    }

    /// Returns the identifier for a value of this tag.
    pub const fn ident(self, constructed: bool) -> Ident {
        Ident::new(self, constructed)
    }
}

/// # Constants for universal tags.
///
/// See clause 8.4 of ITU Recommendation X.690.
///
impl Tag {
    /// The tag for the BOOLEAN type, UNIVERSAL 1.
    pub const BOOLEAN: Self = Self::universal(1);

    /// The tag for the INTEGER type, UNIVERSAL 2.
    pub const INTEGER: Self = Self::universal(2);

    /// The tag for the BIT STRING type, UNIVERSAL 3.
    pub const BIT_STRING: Self = Self::universal(3);

    /// The tag for the OCTET STRING type, UNIVERSAL 4.
    pub const OCTET_STRING: Self = Self::universal(4);

    /// The tag for the NULL type, UNIVERSAL 5.
    pub const NULL: Self = Self::universal(5);

    /// The tag for the OBJECT IDENTIFIER type, UNIVERSAL 6.
    pub const OID: Self = Self::universal(6);

    /// The tag for the ObjectDescriptor type, UNIVERSAL 7.
    pub const OBJECT_DESCRIPTOR: Self = Self::universal(7);

    /// The tag for the EXTERNAL and Instance-of types, UNIVERSAL 8.
    pub const EXTERNAL: Self = Self::universal(8);

    /// The tag for the REAL type, UNIVERSAL 9.
    pub const REAL: Self = Self::universal(9);

    /// The tag for the ENUMERATED type, UNIVERSAL 10.
    pub const ENUMERATED: Self = Self::universal(10);

    /// The tag for the EMBEDDED PDV type, UNIVERSAL 11.
    pub const EMBEDDED_PDV: Self = Self::universal(11);

    /// The tag for the UTF8String type, UNIVERSAL 12
    pub const UTF8_STRING: Self = Self::universal(12);

    /// The tag for the RELATIVE-OID type, UNIVERSAL 13.
    pub const RELATIVE_OID: Self = Self::universal(13);

    /// The tag for the SEQUENCE and SEQUENCE OF types, UNIVERSAL 16.
    pub const SEQUENCE: Self = Self::universal(16);

    /// The tag for the SET and SET OF types, UNIVERSAL 17.
    pub const SET: Self = Self::universal(17);

    /// The tag for the NumericString type, UNIVERSAL 18.
    pub const NUMERIC_STRING: Self = Self::universal(18);

    /// The tag for the PrintableString type, UNIVERSAL 19.
    pub const PRINTABLE_STRING: Self = Self::universal(19);

    /// The tag for the TeletexString type, UNIVERSAL 20.
    pub const TELETEX_STRING: Self = Self::universal(20);

    /// The tag for the VideotexString type, UNIVERSAL 21.
    pub const VIDEOTEX_STRING: Self = Self::universal(21);

    /// The tag for the IA5String type, UNIVERSAL 22.
    pub const IA5_STRING: Self = Self::universal(22);

    /// The tag for the UTCTime type, UNIVERSAL 23.
    pub const UTC_TIME: Self = Self::universal(23);

    /// The tag for the GeneralizedType type, UNIVERSAL 24.
    pub const GENERALIZED_TIME: Self = Self::universal(24);

    /// The tag for the GraphicString type, UNIVERSAL 25.
    pub const GRAPHIC_STRING: Self = Self::universal(25);

    /// The tag for the VisibleString type, UNIVERSAL 26.
    pub const VISIBLE_STRING: Self = Self::universal(26);

    /// The tag for the GeneralString type, UNIVERSAL 27.
    pub const GENERAL_STRING: Self = Self::universal(27);

    /// The tag for the UniversalString type, UNIVERSAL 28.
    pub const UNIVERSAL_STRING: Self = Self::universal(28);

    /// The tag for the BMPString type, UNIVERSAL 30.
    pub const BMP_STRING: Self = Self::universal(30);
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Tag::BOOLEAN => write!(f, "BOOLEAN"),
            Tag::INTEGER => write!(f, "INTEGER"),
            Tag::BIT_STRING => write!(f, "BIT STRING"),
            Tag::OCTET_STRING => write!(f, "OCTET STRING"),
            Tag::NULL => write!(f, "NULL"),
            Tag::OID => write!(f, "OBJECT IDENTIFIER"),
            Tag::OBJECT_DESCRIPTOR => write!(f, "ObjectDescriptor"),
            Tag::EXTERNAL => write!(f, "EXTERNAL"),
            Tag::REAL => write!(f, "REAL"),
            Tag::ENUMERATED => write!(f, "ENUMERATED"),
            Tag::EMBEDDED_PDV => write!(f, "EMBEDDED PDV"),
            Tag::UTF8_STRING => write!(f, "UTF8String"),
            Tag::RELATIVE_OID => write!(f, "RELATIVE-OID"),
            Tag::SEQUENCE => write!(f, "SEQUENCE"),
            Tag::SET => write!(f, "SET"),
            Tag::NUMERIC_STRING => write!(f, "NumericString"),
            Tag::PRINTABLE_STRING => write!(f, "PrintableString"),
            Tag::TELETEX_STRING => write!(f, "TeletexString"),
            Tag::VIDEOTEX_STRING => write!(f, "VideotexString"),
            Tag::IA5_STRING => write!(f, "IA5String"),
            Tag::UTC_TIME => write!(f, "UTCTime"),
            Tag::GENERALIZED_TIME => write!(f, "GeneralizedTime"),
            Tag::GRAPHIC_STRING => write!(f, "GraphicString"),
            Tag::VISIBLE_STRING => write!(f, "VisibleString"),
            Tag::GENERAL_STRING => write!(f, "GeneralString"),
            Tag::UNIVERSAL_STRING => write!(f, "UniversalString"),
            Tag::BMP_STRING => write!(f, "BMPString"),
            tag => {
                match tag.class {
                    Class::Universal => write!(f, "[UNIVERSAL ")?,
                    Class::Application => write!(f, "[APPLICATION ")?,
                    Class::Context => write!(f, "[")?,
                    Class::Private => write!(f, "[PRIVATE ")?,
                }
                write!(f, "{}]", tag.number)
            }
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({})", self)
    }
}


//------------ Ident ---------------------------------------------------------

/// The identifier octets of an encoded value.
///
/// The identifier combines the [`Tag`] of a value with the information
/// whether the value uses primitive or constructed encoding.
///
/// # BER Encoding
///
/// There are two forms of identifier octets:
///
/// * low tag number (for tag numbers between 0 and 30):
///     One octet. Bits 8 and 7 specify the class, bit 6 indicates whether
///     the encoding is primitive (0), and bits 5-1 give the tag number.
/// * high tag number (for tag numbers 31 and greater):
///     Two or more octets. First octet is as in low-tag-number form,
///     except that bits 5-1 all have value 1. Second and following octets
///     give the tag number, base 128, most significant digit first, with
///     as few digits as possible, and with the bit 8 of each octet except
///     the last set to 1.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Ident {
    /// The tag.
    tag: Tag,

    /// Whether the value uses constructed encoding.
    constructed: bool,
}

impl Ident {
    /// The mask for the constructed bit in the first octet.
    const CONSTRUCTED_MASK: u8 = 0x20;

    /// The mask for the tag number bits in the first octet.
    const NUMBER_MASK: u8 = 0x1f;

    /// The largest tag number that fits into a single octet.
    const MAX_SINGLE_OCTET: u32 = 0x1e;

    /// Creates a new identifier.
    pub const fn new(tag: Tag, constructed: bool) -> Self {
        Ident { tag, constructed }
    }

    /// Returns the tag.
    pub const fn tag(self) -> Tag {
        self.tag
    }

    /// Returns the class of the tag.
    pub const fn class(self) -> Class {
        self.tag.class
    }

    /// Returns the tag number.
    pub const fn number(self) -> u32 {
        self.tag.number
    }

    /// Returns whether the value is to be a constructed value.
    pub const fn is_constructed(self) -> bool {
        self.constructed
    }

    /// Takes the identifier octets starting at `offset` in `data`.
    ///
    /// Returns the identifier and the offset of the octet following the
    /// identifier octets.
    ///
    /// In DER mode, tag numbers in high tag number form must use as few
    /// octets as possible.
    pub fn take_from(
        mode: Mode, data: &[u8], offset: usize
    ) -> Result<(Self, usize), DecodeError> {
        let first = match data.get(offset) {
            Some(first) => *first,
            None => return Err(DecodeError::unexpected_end(offset))
        };
        let class = Class::from_u8(first);
        let constructed = first & Self::CONSTRUCTED_MASK != 0;

        if first & Self::NUMBER_MASK != Self::NUMBER_MASK {
            let number = u32::from(first & Self::NUMBER_MASK);
            return Ok((
                Self::new(Tag::new(class, number), constructed), offset + 1
            ))
        }

        let sub = match base128::take(&data[offset + 1..]) {
            Ok(sub) => sub,
            Err(base128::Error::Unterminated) => {
                return Err(DecodeError::unexpected_end(data.len()))
            }
            Err(base128::Error::Overflow) => {
                return Err(
                    DecodeError::new(ErrorKind::TagNumberTooLarge, offset)
                )
            }
        };
        let number = match u32::try_from(sub.value) {
            Ok(number) => number,
            Err(_) => {
                return Err(
                    DecodeError::new(ErrorKind::TagNumberTooLarge, offset)
                )
            }
        };
        if mode.is_restricted() {
            if sub.padded {
                return Err(DecodeError::new(
                    ErrorKind::NonCanonical("padded tag number"), offset
                ))
            }
            if number <= Self::MAX_SINGLE_OCTET {
                return Err(DecodeError::new(
                    ErrorKind::NonCanonical("high tag number form"), offset
                ))
            }
        }
        Ok((
            Self::new(Tag::new(class, number), constructed),
            offset + 1 + sub.len
        ))
    }

    /// Returns the number of octets of the encoded form of the identifier.
    pub fn encoded_len(self) -> usize {
        if self.tag.number <= Self::MAX_SINGLE_OCTET {
            1
        }
        else {
            1 + base128::encoded_len(self.tag.number.into())
        }
    }

    /// Appends the encoded identifier octets to `target`.
    pub fn append_encoded(self, target: &mut Vec<u8>) {
        let mut first = self.tag.class.into_u8();
        if self.constructed {
            first |= Self::CONSTRUCTED_MASK
        }
        if self.tag.number <= Self::MAX_SINGLE_OCTET {
            target.push(first | self.tag.number as u8)
        }
        else {
            target.push(first | Self::NUMBER_MASK);
            base128::append_encoded(self.tag.number.into(), target)
        }
    }

    /// Returns the encoded identifier octets.
    pub fn to_vec(self) -> Vec<u8> {
        let mut res = Vec::with_capacity(self.encoded_len());
        self.append_encoded(&mut res);
        res
    }
}

impl From<Ident> for Tag {
    fn from(ident: Ident) -> Tag {
        ident.tag
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.constructed {
            write!(f, "constructed {}", self.tag)
        }
        else {
            write!(f, "primitive {}", self.tag)
        }
    }
}

impl fmt::Debug for Ident {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Ident({})", self)
    }
}


//------------ Class ---------------------------------------------------------

/// The class of a tag.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Class {
    /// Types defined in X.680 itself.
    Universal,

    /// Types defined by a specific application.
    Application,

    /// Types whose meaning depends on the context they appear in.
    Context,

    /// Types defined for private use.
    Private,
}

impl Class {
    const fn from_u8(octet: u8) -> Self {
        match octet {
            0x00..=0x3F => Self::Universal,
            0x40..=0x7F => Self::Application,
            0x80..=0xBF => Self::Context,
            0xC0..=0xFF => Self::Private
        }
    }

    const fn into_u8(self) -> u8 {
        match self {
            Self::Universal => 0x00,
            Self::Application => 0x40,
            Self::Context => 0x80,
            Self::Private => 0xC0,
        }
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    const CLASSES: &[Class] = &[
        Class::Universal, Class::Application, Class::Context, Class::Private
    ];

    fn take(mode: Mode, data: &[u8]) -> Result<(Ident, usize), DecodeError> {
        Ident::take_from(mode, data, 0)
    }

    #[test]
    fn single_octet_idents() {
        for &class in CLASSES {
            for number in (0..5).chain(26..31) {
                for constructed in [false, true] {
                    let ident = Ident::new(
                        Tag::new(class, number), constructed
                    );
                    let encoded = ident.to_vec();
                    assert_eq!(encoded.len(), 1);
                    assert_eq!(
                        encoded[0],
                        class.into_u8()
                            | if constructed { 0x20 } else { 0 }
                            | number as u8
                    );
                    assert_eq!(take(Mode::Der, &encoded), Ok((ident, 1)));
                }
            }
        }
    }

    #[test]
    fn multi_octet_idents() {
        let cases: &[(u32, &[u8])] = &[
            (31, b"\x1f\x1f"),
            (0x7f, b"\x1f\x7f"),
            (0x80, b"\x1f\x81\x00"),
            (0x3fff, b"\x1f\xff\x7f"),
            (0x4000, b"\x1f\x81\x80\x00"),
            (u32::MAX, b"\x1f\x8f\xff\xff\xff\x7f"),
        ];
        for &(number, encoded) in cases {
            let ident = Tag::universal(number).ident(false);
            assert_eq!(ident.to_vec(), encoded);
            assert_eq!(ident.encoded_len(), encoded.len());
            assert_eq!(
                take(Mode::Der, encoded), Ok((ident, encoded.len()))
            );
        }
    }

    #[test]
    fn take_from_offset() {
        let data = b"\x00\x00\xbf\x81\x00\x05";
        let (ident, end) = Ident::take_from(Mode::Ber, data, 2).unwrap();
        assert_eq!(ident.class(), Class::Context);
        assert!(ident.is_constructed());
        assert_eq!(ident.number(), 128);
        assert_eq!(end, 5);
    }

    #[test]
    fn non_minimal_idents() {
        // Low tag number in high tag number form.
        let data = b"\x1f\x02";
        assert_eq!(
            take(Mode::Ber, data), Ok((Tag::INTEGER.ident(false), 2))
        );
        assert_eq!(
            take(Mode::Der, data).unwrap_err().kind(),
            &ErrorKind::NonCanonical("high tag number form")
        );

        // Padding octet.
        let data = b"\x1f\x80\x81\x00";
        assert_eq!(
            take(Mode::Ber, data).map(|x| x.0.number()), Ok(128)
        );
        assert!(take(Mode::Der, data).is_err());
    }

    #[test]
    fn ident_failures() {
        assert_eq!(take(Mode::Ber, b""), Err(DecodeError::unexpected_end(0)));
        assert_eq!(
            take(Mode::Ber, b"\xff\x80"), Err(DecodeError::unexpected_end(2))
        );
        assert_eq!(
            take(Mode::Ber, b"\x1f\x90\x80\x80\x80\x00").unwrap_err().kind(),
            &ErrorKind::TagNumberTooLarge
        );
    }

    #[test]
    fn display() {
        assert_eq!(Tag::SEQUENCE.to_string(), "SEQUENCE");
        assert_eq!(Tag::ctx(3).to_string(), "[3]");
        assert_eq!(Tag::application(1).to_string(), "[APPLICATION 1]");
        assert_eq!(Tag::universal(99).to_string(), "[UNIVERSAL 99]");
        assert_eq!(
            Tag::SEQUENCE.ident(true).to_string(), "constructed SEQUENCE"
        );
    }
}
