//! PrimitiveContent and related types.
//!
//! This is an internal module. The relevant items are re-exported by the
//! parent.

use crate::ident::Tag;
use super::values::{append_header, total_len};


//------------ PrimitiveContent ----------------------------------------------

/// A type that is encoded as a primitive value.
///
/// This trait should be implemented for types that use primitive encoding.
/// It defines how the content octets of a single primitive value containing
/// a value of the type are to be created. Based on that, the types gain
/// methods for producing the complete encoding including the header.
pub trait PrimitiveContent {
    /// The natural tag of an encoded value of this type.
    const TAG: Tag;

    /// Returns the length of the encoded content of this type.
    fn content_len(&self) -> usize;

    /// Appends the encoded content to `target`.
    fn append_content(&self, target: &mut Vec<u8>);


    //--- Provided methods

    /// Returns the length of the complete encoding of the value.
    fn encoded_len(&self) -> usize {
        total_len(Self::TAG.ident(false), self.content_len())
    }

    /// Appends the complete encoding of the value to `target`.
    fn append_encoded(&self, target: &mut Vec<u8>) {
        append_header(target, Self::TAG.ident(false), self.content_len());
        self.append_content(target)
    }

    /// Writes the encoded content into a new vec.
    ///
    /// This is mostly just useful for testing.
    fn content_to_vec(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(self.content_len());
        self.append_content(&mut res);
        res
    }
}
