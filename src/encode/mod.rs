//! Encoding data in BER.
//!
//! This modules provides means to encode values into their DER encoding,
//! which is always valid BER as well.
//!
//! A type that can be encoded implements the [`Values`] trait. It knows the
//! length of its complete encoding and how to append that encoding to a
//! vec. The trait [`PrimitiveContent`] helps with types that use the
//! primitive encoding: they only declare their tag and how their content
//! octets look and receive the rest automatically.
//!
//! The [`encode`] function is the entry point for encoding a complete
//! [`Object`] tree.

pub use self::primitive::PrimitiveContent;
pub use self::values::{Values, append_header, total_len};

use crate::object::Object;

mod primitive;
mod values;


//------------ Functions -----------------------------------------------------

/// Encodes an object into a new vec.
///
/// The result is identifier octets, length octets, and content octets of
/// the object. Lengths are always encoded in their minimal form.
pub fn encode(object: &Object) -> Vec<u8> {
    object.to_vec()
}
