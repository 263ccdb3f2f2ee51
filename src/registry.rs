//! Selecting the content decoder for a value.
//!
//! The registry maps the tags of the supported universal types to the
//! function decoding their content and the encoding form they require. It
//! is a static table, so there is nothing to initialize.
//!
//! This is a private module.

use crate::constructed::{Explicit, Sequence, Set};
use crate::decode::{Content, DecodeError, ErrorKind};
use crate::ident::{Class, Ident, Tag};
use crate::int::{Enumerated, Integer};
use crate::object::Object;
use crate::oid::Oid;
use crate::string::{
    BitString, Ia5String, NumericString, OctetString, PrintableString,
    Utf8String,
};


//------------ Entry ---------------------------------------------------------

/// The function decoding the content of a value.
type DecodeFn = fn(&mut Content) -> Result<Object, DecodeError>;

/// A registered type.
struct Entry {
    /// The tag of the type.
    tag: Tag,

    /// Whether the type uses constructed encoding.
    constructed: bool,

    /// The content decoder.
    decode: DecodeFn,
}

impl Entry {
    const fn primitive(tag: Tag, decode: DecodeFn) -> Self {
        Entry { tag, constructed: false, decode }
    }

    const fn constructed(tag: Tag, decode: DecodeFn) -> Self {
        Entry { tag, constructed: true, decode }
    }
}


//------------ The Registry --------------------------------------------------

/// All the types we know how to decode.
static REGISTRY: &[Entry] = &[
    Entry::primitive(Tag::BOOLEAN, |content| {
        content.to_bool().map(Object::Boolean)
    }),
    Entry::primitive(Tag::INTEGER, |content| {
        Integer::take_content_from(content).map(Object::Integer)
    }),
    Entry::primitive(Tag::BIT_STRING, |content| {
        BitString::take_content_from(content).map(Object::BitString)
    }),
    Entry::primitive(Tag::OCTET_STRING, |content| {
        OctetString::take_content_from(content).map(Object::OctetString)
    }),
    Entry::primitive(Tag::NULL, |content| {
        content.to_null().map(|_| Object::Null)
    }),
    Entry::primitive(Tag::OID, |content| {
        Oid::take_content_from(content).map(Object::Oid)
    }),
    Entry::primitive(Tag::ENUMERATED, |content| {
        Enumerated::take_content_from(content).map(Object::Enumerated)
    }),
    Entry::primitive(Tag::UTF8_STRING, |content| {
        Utf8String::take_content_from(content).map(Object::Utf8String)
    }),
    Entry::constructed(Tag::SEQUENCE, |content| {
        Sequence::take_content_from(content).map(Object::Sequence)
    }),
    Entry::constructed(Tag::SET, |content| {
        Set::take_content_from(content).map(Object::Set)
    }),
    Entry::primitive(Tag::NUMERIC_STRING, |content| {
        NumericString::take_content_from(content).map(Object::NumericString)
    }),
    Entry::primitive(Tag::PRINTABLE_STRING, |content| {
        PrintableString::take_content_from(content)
            .map(Object::PrintableString)
    }),
    Entry::primitive(Tag::IA5_STRING, |content| {
        Ia5String::take_content_from(content).map(Object::Ia5String)
    }),
];

/// Returns the registry entry for a tag.
fn lookup(tag: Tag) -> Option<&'static Entry> {
    REGISTRY.iter().find(|entry| entry.tag == tag)
}

/// Decodes the content of a value with the given identifier.
///
/// The identifier octets of the value started at `offset`, which is where
/// errors about the identifier itself are reported.
///
/// Values with a registered tag are decoded by the registered decoder if
/// they use the right form. Constructed values with unregistered
/// application or context specific tags are decoded as explicitly tagged
/// values. Everything else is an error.
pub fn decode_content(
    ident: Ident, offset: usize, content: &mut Content
) -> Result<Object, DecodeError> {
    if let Some(entry) = lookup(ident.tag()) {
        if entry.constructed != ident.is_constructed() {
            return Err(
                DecodeError::new(ErrorKind::InvalidForm(ident), offset)
            )
        }
        return (entry.decode)(content)
    }
    match ident.class() {
        Class::Application | Class::Context if ident.is_constructed() => {
            Explicit::take_content_from(ident.tag(), content)
                .map(Object::Explicit)
        }
        _ => Err(DecodeError::new(ErrorKind::UnknownTag(ident), offset))
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::mode::Mode;
    use super::*;

    fn decode(ident: Ident, data: &[u8]) -> Result<Object, DecodeError> {
        decode_content(ident, 0, &mut Content::new(Mode::Ber, data, 0, 0))
    }

    #[test]
    fn registered() {
        assert!(lookup(Tag::SEQUENCE).is_some());
        assert!(lookup(Tag::PRINTABLE_STRING).is_some());
        assert!(lookup(Tag::UTC_TIME).is_none());
        assert!(lookup(Tag::ctx(1)).is_none());
        assert_eq!(
            decode(Tag::BOOLEAN.ident(false), b"\xFF"),
            Ok(Object::Boolean(true))
        );
    }

    #[test]
    fn wrong_form() {
        let ident = Tag::SEQUENCE.ident(false);
        assert_eq!(
            decode(ident, b"").unwrap_err().kind(),
            &ErrorKind::InvalidForm(ident)
        );
        let ident = Tag::INTEGER.ident(true);
        assert_eq!(
            decode(ident, b"\x02\x01\x00").unwrap_err().kind(),
            &ErrorKind::InvalidForm(ident)
        );
    }

    #[test]
    fn explicit_fallback() {
        assert_eq!(
            decode(Tag::ctx(0).ident(true), b"\x05\x00"),
            Ok(Object::Explicit(Explicit::ctx(0, ())))
        );
        assert_eq!(
            decode(Tag::application(7).ident(true), b"\x05\x00"),
            Ok(Object::Explicit(Explicit::application(7, ())))
        );
    }

    #[test]
    fn unknown_tags() {
        for ident in [
            Tag::ctx(0).ident(false),
            Tag::private(1).ident(true),
            Tag::UTC_TIME.ident(false),
            Tag::universal(99).ident(true),
        ] {
            assert_eq!(
                decode(ident, b"").unwrap_err().kind(),
                &ErrorKind::UnknownTag(ident)
            );
        }
    }
}
