//! The object tree.
//!
//! This module contains [`Object`], the type for a decoded value of any of
//! the supported types.

use std::fmt;
use bytes::Bytes;
use num::BigInt;
use crate::constructed::{Explicit, Sequence, Set};
use crate::encode::{PrimitiveContent, Values, append_header, total_len};
use crate::ident::{Ident, Tag};
use crate::int::{Enumerated, Integer};
use crate::oid::Oid;
use crate::string::{
    BitString, Ia5String, NumericString, OctetString, PrintableString,
    Utf8String,
};


//------------ Object --------------------------------------------------------

/// A value of one of the supported ASN.1 types.
///
/// Objects form a tree: constructed values own the values they contain.
/// Each object knows its identifier and how to encode itself. Decoding
/// produces objects through [`decode`][crate::decode::decode] and friends.
///
/// Objects can be created from native values through the various `From`
/// impls. Integers become INTEGER values, `bool` becomes BOOLEAN, `()`
/// becomes NULL, byte slices become OCTET STRING values, and a vec of
/// objects becomes a SEQUENCE.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Object {
    /// A BOOLEAN value.
    Boolean(bool),

    /// An INTEGER value.
    Integer(Integer),

    /// An ENUMERATED value.
    Enumerated(Enumerated),

    /// A NULL value.
    Null,

    /// A BIT STRING value.
    BitString(BitString),

    /// An OCTET STRING value.
    OctetString(OctetString),

    /// An OBJECT IDENTIFIER value.
    Oid(Oid),

    /// An IA5String value.
    Ia5String(Ia5String),

    /// A PrintableString value.
    PrintableString(PrintableString),

    /// A NumericString value.
    NumericString(NumericString),

    /// A UTF8String value.
    Utf8String(Utf8String),

    /// A SEQUENCE value.
    Sequence(Sequence),

    /// A SET value.
    Set(Set),

    /// An explicitly tagged value.
    Explicit(Explicit),
}

/// Dispatches to the value of a primitive variant.
///
/// Evaluates `$prim` with `$value` bound to the value of a primitive
/// variant and `$cons` with `$value` bound to a constructed variant.
macro_rules! dispatch {
    ( $object:expr, $value:ident => $prim:expr, $cons:expr ) => {
        match $object {
            Object::Boolean($value) => $prim,
            Object::Integer($value) => $prim,
            Object::Enumerated($value) => $prim,
            Object::Null => { let $value = &(); $prim }
            Object::BitString($value) => $prim,
            Object::OctetString($value) => $prim,
            Object::Oid($value) => $prim,
            Object::Ia5String($value) => $prim,
            Object::PrintableString($value) => $prim,
            Object::NumericString($value) => $prim,
            Object::Utf8String($value) => $prim,
            Object::Sequence($value) => $cons,
            Object::Set($value) => $cons,
            Object::Explicit($value) => $cons,
        }
    }
}

impl Object {
    /// Returns the identifier of the object.
    pub fn ident(&self) -> Ident {
        match self {
            Object::Boolean(_) => Tag::BOOLEAN.ident(false),
            Object::Integer(_) => Tag::INTEGER.ident(false),
            Object::Enumerated(_) => Tag::ENUMERATED.ident(false),
            Object::Null => Tag::NULL.ident(false),
            Object::BitString(_) => Tag::BIT_STRING.ident(false),
            Object::OctetString(_) => Tag::OCTET_STRING.ident(false),
            Object::Oid(_) => Tag::OID.ident(false),
            Object::Ia5String(_) => Tag::IA5_STRING.ident(false),
            Object::PrintableString(_) => Tag::PRINTABLE_STRING.ident(false),
            Object::NumericString(_) => Tag::NUMERIC_STRING.ident(false),
            Object::Utf8String(_) => Tag::UTF8_STRING.ident(false),
            Object::Sequence(inner) => inner.ident(),
            Object::Set(inner) => inner.ident(),
            Object::Explicit(inner) => inner.ident(),
        }
    }

    /// Returns the tag of the object.
    pub fn tag(&self) -> Tag {
        self.ident().tag()
    }

    /// Returns whether the object uses constructed encoding.
    pub fn is_constructed(&self) -> bool {
        self.ident().is_constructed()
    }

    /// Returns the values contained in a constructed object.
    ///
    /// For an explicitly tagged object, this is a slice with the single
    /// wrapped value. Returns `None` for primitive objects.
    pub fn children(&self) -> Option<&[Object]> {
        match self {
            Object::Sequence(inner) => Some(inner.children()),
            Object::Set(inner) => Some(inner.children()),
            Object::Explicit(inner) => {
                Some(std::slice::from_ref(inner.inner()))
            }
            _ => None
        }
    }

    /// Returns the number of content octets of the object.
    pub fn content_len(&self) -> usize {
        dispatch!(self, value => value.content_len(), value.content_len())
    }

    /// Appends the content octets of the object to `target`.
    pub fn append_content(&self, target: &mut Vec<u8>) {
        dispatch!(
            self, value => value.append_content(target),
            value.append_content(target)
        )
    }

    /// Returns the content octets of the object in a new vec.
    pub fn content_to_vec(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(self.content_len());
        self.append_content(&mut res);
        res
    }

    /// Returns the length of the complete encoding of the object.
    pub fn encoded_len(&self) -> usize {
        total_len(self.ident(), self.content_len())
    }

    /// Appends the complete encoding of the object to `target`.
    pub fn append_encoded(&self, target: &mut Vec<u8>) {
        append_header(target, self.ident(), self.content_len());
        self.append_content(target)
    }

    /// Returns the complete encoding of the object in a new vec.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(self.encoded_len());
        self.append_encoded(&mut res);
        res
    }

    /// Writes the tree starting at this object indented by `depth` levels.
    fn fmt_tree(&self, f: &mut fmt::Formatter, depth: usize) -> fmt::Result {
        if depth > 0 {
            writeln!(f)?;
        }
        write!(f, "{:width$}{}", "", self.tag(), width = depth * 2)?;
        match self {
            Object::Boolean(value) => write!(f, " {}", value)?,
            Object::Integer(value) => write!(f, " {}", value)?,
            Object::Enumerated(value) => write!(f, " {}", value)?,
            Object::Null => { }
            Object::BitString(value) => {
                write!(f, " ({} unused)", value.unused())?;
                fmt_hex(f, value.octet_slice())?;
            }
            Object::OctetString(value) => fmt_hex(f, value.as_slice())?,
            Object::Oid(value) => write!(f, " {}", value)?,
            Object::Ia5String(value) => write!(f, " {}", value)?,
            Object::PrintableString(value) => write!(f, " {}", value)?,
            Object::NumericString(value) => write!(f, " {}", value)?,
            Object::Utf8String(value) => write!(f, " {}", value)?,
            Object::Sequence(value) => write!(f, " ({} elem)", value.len())?,
            Object::Set(value) => write!(f, " ({} elem)", value.len())?,
            Object::Explicit(_) => { }
        }
        if let Some(children) = self.children() {
            for child in children {
                child.fmt_tree(f, depth + 1)?;
            }
        }
        Ok(())
    }
}

/// Writes a space and the octets in hex unless `octets` is empty.
fn fmt_hex(f: &mut fmt::Formatter, octets: &[u8]) -> fmt::Result {
    if !octets.is_empty() {
        f.write_str(" ")?;
        for octet in octets {
            write!(f, "{:02x}", octet)?;
        }
    }
    Ok(())
}


//--- Values

impl Values for Object {
    fn encoded_len(&self) -> usize {
        Object::encoded_len(self)
    }

    fn append_encoded(&self, target: &mut Vec<u8>) {
        Object::append_encoded(self, target)
    }
}


//--- From

macro_rules! from_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Object {
                fn from(value: $type) -> Self {
                    Object::$variant(value.into())
                }
            }
        )*
    }
}

from_value!(
    bool => Boolean,
    i8 => Integer, i16 => Integer, i32 => Integer, i64 => Integer,
    i128 => Integer, u8 => Integer, u16 => Integer, u32 => Integer,
    u64 => Integer, u128 => Integer,
    BigInt => Integer,
    Integer => Integer,
    Enumerated => Enumerated,
    BitString => BitString,
    OctetString => OctetString,
    Bytes => OctetString,
    &[u8] => OctetString,
    Oid => Oid,
    Ia5String => Ia5String,
    PrintableString => PrintableString,
    NumericString => NumericString,
    Utf8String => Utf8String,
    Sequence => Sequence,
    Vec<Object> => Sequence,
    Set => Set,
    Explicit => Explicit,
);

impl From<()> for Object {
    fn from(_: ()) -> Self {
        Object::Null
    }
}


//--- Display

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use std::str::FromStr;
    use super::*;

    #[test]
    fn encode_primitives() {
        assert_eq!(Object::from(true).to_vec(), b"\x01\x01\xFF");
        assert_eq!(Object::from(false).to_vec(), b"\x01\x01\x00");
        assert_eq!(Object::Null.to_vec(), b"\x05\x00");
        assert_eq!(Object::from(123).to_vec(), b"\x02\x01\x7B");
        assert_eq!(
            Object::from(Enumerated::new(3)).to_vec(), b"\x0A\x01\x03"
        );
        assert_eq!(
            Object::from(b"\xFF\xA0".as_ref()).to_vec(), b"\x04\x02\xFF\xA0"
        );
        assert_eq!(
            Object::from(Oid::from_str("1.2.3").unwrap()).to_vec(),
            b"\x06\x02\x2A\x03"
        );
    }

    #[test]
    fn encode_sequence() {
        let seq = Object::from(vec![Object::from(false), Object::from(3)]);
        assert_eq!(seq.content_len(), 6);
        assert_eq!(seq.encoded_len(), 8);
        assert_eq!(seq.to_vec(), b"\x30\x06\x01\x01\x00\x02\x01\x03");
        assert_eq!(seq.content_to_vec(), b"\x01\x01\x00\x02\x01\x03");
    }

    #[test]
    fn encode_long_content() {
        let value = Object::from(vec![0u8; 200].as_slice());
        let encoded = value.to_vec();
        assert_eq!(&encoded[..3], b"\x04\x81\xC8");
        assert_eq!(encoded.len(), value.encoded_len());
    }

    #[test]
    fn idents() {
        assert_eq!(Object::Null.ident(), Tag::NULL.ident(false));
        assert_eq!(
            Object::from(Set::new()).ident(), Tag::SET.ident(true)
        );
        let value = Object::from(Explicit::application(3, ()));
        assert_eq!(value.tag(), Tag::application(3));
        assert!(value.is_constructed());
        assert_eq!(value.children().map(|x| x.len()), Some(1));
        assert_eq!(Object::from(1).children(), None);
    }

    #[test]
    fn send_and_sync() {
        fn check<T: Send + Sync>() { }
        check::<Object>();
    }

    #[test]
    fn display() {
        let value = Object::from(vec![
            Object::from(true),
            Object::from(-3),
            Object::from(BitString::new(
                5, Bytes::from_static(b"\xFF\xA0")
            ).unwrap()),
            Object::from(vec![
                Object::Null,
                Object::from(Oid::from_str("1.2.840").unwrap()),
            ]),
            Object::from(Explicit::ctx(
                1, PrintableString::from_str("Hello").unwrap()
            )),
        ]);
        assert_eq!(
            value.to_string(),
            "SEQUENCE (5 elem)\n\
             \x20 BOOLEAN true\n\
             \x20 INTEGER -3\n\
             \x20 BIT STRING (5 unused) ffa0\n\
             \x20 SEQUENCE (2 elem)\n\
             \x20   NULL\n\
             \x20   OBJECT IDENTIFIER 1.2.840\n\
             \x20 [1]\n\
             \x20   PrintableString Hello"
        );
    }
}
