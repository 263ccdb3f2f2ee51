//! Handling of data in Basic Encoding Rules.
//!
//! This crate decodes data encoded in the Basic Encoding Rules (BER) or
//! the Distinguished Encoding Rules (DER) of ASN.1 into a tree of typed
//! values and encodes such trees back into DER.
//!
//! Decoding doesn’t need to know the ASN.1 module the data was defined in.
//! Instead, it looks at the tag of each value and picks the type for it.
//! The supported types are BOOLEAN, INTEGER, ENUMERATED, NULL, BIT STRING,
//! OCTET STRING, OBJECT IDENTIFIER, the character strings IA5String,
//! PrintableString, NumericString, and UTF8String, as well as SEQUENCE and
//! SET. Constructed values with an application or context specific tag
//! are taken to be explicitly tagged values. Every decoded value becomes an
//! [`Object`].
//!
//! ```
//! use bertree::{decode, encode, Object};
//!
//! let data = b"\x30\x06\x01\x01\x00\x02\x01\x03";
//! let (object, end) = decode::decode(data, 0).unwrap();
//! assert_eq!(end, data.len());
//! assert_eq!(
//!     object,
//!     Object::from(vec![Object::from(false), Object::from(3)])
//! );
//! assert_eq!(encode::encode(&object), data);
//! ```
//!
//! The functions in [`decode`] use BER. Use the methods of [`Mode`] for
//! decoding in DER which rejects all encodings that don’t use the shortest
//! possible form. Encoding always uses the shortest form.
//!
//! Indefinite length values as well as the constructed encoding of string
//! types are not supported.

pub use self::constructed::{Explicit, Sequence, Set};
pub use self::decode::{DecodeError, ErrorKind, ValueError};
pub use self::ident::{Class, Ident, Tag};
pub use self::int::{Enumerated, Integer};
pub use self::mode::Mode;
pub use self::object::Object;
pub use self::oid::Oid;
pub use self::string::{
    BitString, Ia5String, NumericString, OctetString, PrintableString,
    Utf8String,
};

pub mod decode;
pub mod encode;
pub mod string;

mod base128;
mod constructed;
mod ident;
mod int;
mod length;
mod mode;
mod object;
mod oid;
mod primitive;
mod registry;
