//! The string types.
//!
//! Two of the types hold binary data. An [`OctetString`] is any sequence of
//! octets. A [`BitString`] is a sequence of bits whose length doesn’t have
//! to be a multiple of eight.
//!
//! The remaining types are restricted character strings. Each of them
//! allows only the characters of its character set:
//!
//! * [`Ia5String`]: ASCII,
//! * [`NumericString`]: the digits and the space,
//! * [`PrintableString`]: letters, digits, the space, and some symbols,
//! * [`Utf8String`]: any Unicode text encoded in UTF-8.
//!
//! They all share the generic [`RestrictedString`] which is parameterized
//! by an implementation of the [`CharSet`] trait.
//!
//! Strings are only ever decoded from and encoded into primitive values.

//--- Re-exports

pub use self::bit::{BitString, BitStringIter};
pub use self::octet::OctetString;
pub use self::restricted::{
    CharSet, CharSetError,
    Ia5CharSet, NumericCharSet, PrintableCharSet, Utf8CharSet,
    RestrictedString,
    Ia5String, NumericString, PrintableString, Utf8String
};

//--- Private modules

mod bit;
mod octet;
mod restricted;
