//! Constructed values.
//!
//! This module contains the types for values whose content consists of
//! other values: [`Sequence`] and [`Set`] which contain an ordered list of
//! values, and [`Explicit`] which wraps exactly one value in an explicit
//! tag.

use std::{ops, slice, vec};
use std::sync::OnceLock;
use crate::decode::{Content, DecodeError, ValueError};
use crate::encode::Values;
use crate::ident::{Class, Ident, Tag};
use crate::object::Object;


//------------ Macro for Sequence and Set ------------------------------------

/// Defines a type containing an ordered list of values.
///
/// The content length of the type is calculated on first use and cached
/// until the list is modified.
macro_rules! constructed_type {
    (
        $(#[$attr:meta])*
        $name:ident, $tag:expr
    ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Default)]
        pub struct $name {
            /// The values in order.
            children: Vec<Object>,

            /// The cached length of the content.
            content_len: OnceLock<usize>,
        }

        impl $name {
            /// The tag of the type.
            pub const TAG: Tag = $tag;

            /// Creates a new, empty value.
            pub fn new() -> Self {
                Self::default()
            }

            /// Returns the identifier of a value of this type.
            pub fn ident(&self) -> Ident {
                Self::TAG.ident(true)
            }

            /// Returns a slice of the values.
            pub fn children(&self) -> &[Object] {
                &self.children
            }

            /// Returns a mutable reference to the list of values.
            ///
            /// This drops the cached content length.
            pub fn children_mut(&mut self) -> &mut Vec<Object> {
                self.content_len.take();
                &mut self.children
            }

            /// Converts the value into its list of values.
            pub fn into_children(self) -> Vec<Object> {
                self.children
            }

            /// Appends a value to the end of the list.
            pub fn push(&mut self, value: impl Into<Object>) {
                self.children_mut().push(value.into())
            }

            /// Inserts a value at position `index`.
            ///
            /// # Panics
            ///
            /// Panics if `index` is larger than the number of values.
            pub fn insert(&mut self, index: usize, value: impl Into<Object>) {
                self.children_mut().insert(index, value.into())
            }

            /// Removes and returns the value at position `index`.
            ///
            /// # Panics
            ///
            /// Panics if `index` is out of bounds.
            pub fn remove(&mut self, index: usize) -> Object {
                self.children_mut().remove(index)
            }

            /// Returns the number of values.
            pub fn len(&self) -> usize {
                self.children.len()
            }

            /// Returns whether there are no values.
            pub fn is_empty(&self) -> bool {
                self.children.is_empty()
            }

            /// Returns an iterator over the values.
            pub fn iter(&self) -> slice::Iter<'_, Object> {
                self.children.iter()
            }

            /// Returns the length of the content octets.
            pub fn content_len(&self) -> usize {
                *self.content_len.get_or_init(|| {
                    self.children.encoded_len()
                })
            }

            /// Appends the content octets to `target`.
            pub fn append_content(&self, target: &mut Vec<u8>) {
                self.children.append_encoded(target)
            }

            /// Decodes the content of a value.
            ///
            /// Every value in the content is decoded in turn until the
            /// content is exhausted.
            pub fn take_content_from(
                content: &mut Content
            ) -> Result<Self, DecodeError> {
                content.take_all_values().map(Self::from)
            }
        }

        impl From<Vec<Object>> for $name {
            fn from(children: Vec<Object>) -> Self {
                $name { children, content_len: OnceLock::new() }
            }
        }

        impl FromIterator<Object> for $name {
            fn from_iter<I: IntoIterator<Item = Object>>(iter: I) -> Self {
                Self::from(iter.into_iter().collect::<Vec<_>>())
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.children == other.children
            }
        }

        impl Eq for $name { }

        impl ops::Index<usize> for $name {
            type Output = Object;

            fn index(&self, index: usize) -> &Object {
                &self.children[index]
            }
        }

        impl ops::IndexMut<usize> for $name {
            fn index_mut(&mut self, index: usize) -> &mut Object {
                &mut self.children_mut()[index]
            }
        }

        impl IntoIterator for $name {
            type Item = Object;
            type IntoIter = vec::IntoIter<Object>;

            fn into_iter(self) -> Self::IntoIter {
                self.children.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a Object;
            type IntoIter = slice::Iter<'a, Object>;

            fn into_iter(self) -> Self::IntoIter {
                self.children.iter()
            }
        }
    }
}


//------------ Sequence ------------------------------------------------------

constructed_type!(
    /// A SEQUENCE value.
    ///
    /// A sequence is an ordered list of values of arbitrary types. It is
    /// always encoded as a constructed value whose content octets are the
    /// concatenated encodings of all values in order.
    ///
    /// The length of the content is only calculated when it is needed and
    /// kept until the sequence is modified. All methods that give mutable
    /// access to the values take care of that.
    Sequence, Tag::SEQUENCE
);


//------------ Set -----------------------------------------------------------

constructed_type!(
    /// A SET value.
    ///
    /// A set is encoded exactly like a [`Sequence`] but with its own tag.
    /// Values are kept in the order given or decoded. In particular, the
    /// values are not sorted as DER would require for SET OF.
    Set, Tag::SET
);


//------------ Explicit ------------------------------------------------------

/// An explicitly tagged value.
///
/// An explicit tag wraps a single value in a constructed value with the
/// tag. The content octets of the constructed value are the complete
/// encoding of the wrapped value. Explicit tags are always of the
/// application or context specific class.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Explicit {
    /// The explicit tag.
    tag: Tag,

    /// The wrapped value.
    inner: Box<Object>,
}

impl Explicit {
    /// Creates a new explicitly tagged value.
    ///
    /// Returns an error unless `tag` is of the application or context
    /// specific class.
    pub fn new(
        tag: Tag, inner: impl Into<Object>
    ) -> Result<Self, ValueError> {
        if !matches!(tag.class(), Class::Application | Class::Context) {
            return Err(ValueError::ExplicitClass)
        }
        Ok(Explicit { tag, inner: Box::new(inner.into()) })
    }

    /// Creates a new value with a context specific tag.
    pub fn ctx(number: u32, inner: impl Into<Object>) -> Self {
        Explicit { tag: Tag::ctx(number), inner: Box::new(inner.into()) }
    }

    /// Creates a new value with an application tag.
    pub fn application(number: u32, inner: impl Into<Object>) -> Self {
        Explicit {
            tag: Tag::application(number), inner: Box::new(inner.into())
        }
    }

    /// Returns the explicit tag.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Returns the identifier of the value.
    pub fn ident(&self) -> Ident {
        self.tag.ident(true)
    }

    /// Returns a reference to the wrapped value.
    pub fn inner(&self) -> &Object {
        &self.inner
    }

    /// Returns a mutable reference to the wrapped value.
    pub fn inner_mut(&mut self) -> &mut Object {
        &mut self.inner
    }

    /// Converts the value into the wrapped value.
    pub fn into_inner(self) -> Object {
        *self.inner
    }

    /// Returns the length of the content octets.
    pub fn content_len(&self) -> usize {
        self.inner.encoded_len()
    }

    /// Appends the content octets to `target`.
    pub fn append_content(&self, target: &mut Vec<u8>) {
        self.inner.append_encoded(target)
    }

    /// Decodes the content of an explicitly tagged value.
    ///
    /// The content must contain exactly one value.
    pub fn take_content_from(
        tag: Tag, content: &mut Content
    ) -> Result<Self, DecodeError> {
        let mut children = content.take_all_values()?;
        if children.len() != 1 {
            return Err(content.content_err(
                ValueError::ExplicitContent(children.len())
            ))
        }
        match children.pop() {
            Some(inner) => Ok(Explicit { tag, inner: Box::new(inner) }),
            None => Err(content.content_err(ValueError::ExplicitContent(0)))
        }
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::decode::ErrorKind;
    use crate::int::Integer;
    use crate::mode::Mode;
    use super::*;

    fn sequence(data: &[u8]) -> Result<Sequence, DecodeError> {
        Sequence::take_content_from(&mut Content::new(Mode::Ber, data, 0, 0))
    }

    #[test]
    fn decode_sequence() {
        let seq = sequence(b"\x01\x01\x00\x02\x01\x03").unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq[0], Object::Boolean(false));
        assert_eq!(seq[1], Object::Integer(Integer::from(3)));
        assert_eq!(seq.content_len(), 6);

        assert!(sequence(b"").unwrap().is_empty());
    }

    #[test]
    fn child_overrunning_content() {
        let err = sequence(b"\x01\x01\x00\x02\x02\x03").unwrap_err();
        assert_eq!(err, DecodeError::unexpected_end(5));
    }

    #[test]
    fn length_cache() {
        let mut seq = Sequence::new();
        assert_eq!(seq.content_len(), 0);
        seq.push(true);
        assert_eq!(seq.content_len(), 3);
        seq.insert(0, ());
        assert_eq!(seq.content_len(), 5);
        seq[1] = Object::from(12345);
        assert_eq!(seq.content_len(), 6);
        assert_eq!(seq.remove(0), Object::Null);
        assert_eq!(seq.content_len(), 4);
        seq.children_mut().clear();
        assert_eq!(seq.content_len(), 0);
    }

    #[test]
    fn equality_ignores_cache() {
        let left = Sequence::from(vec![Object::from(true)]);
        let right = Sequence::from(vec![Object::from(true)]);
        left.content_len();
        assert_eq!(left, right);
    }

    #[test]
    fn set() {
        let set: Set = vec![Object::from(2), Object::from(1)].into_iter()
            .collect();
        assert_eq!(set.ident(), Tag::SET.ident(true));
        assert_eq!(set[0], Object::from(2));
        assert_eq!(set.content_len(), 6);
    }

    #[test]
    fn explicit() {
        assert_eq!(
            Explicit::new(Tag::INTEGER, 1),
            Err(ValueError::ExplicitClass)
        );
        assert_eq!(
            Explicit::new(Tag::private(2), 1),
            Err(ValueError::ExplicitClass)
        );
        let value = Explicit::new(Tag::application(2), 1).unwrap();
        assert_eq!(value.ident(), Tag::application(2).ident(true));
        assert_eq!(
            Explicit::new(Tag::ctx(0), ()),
            Ok(Explicit::ctx(0, ()))
        );

        let value = Explicit::ctx(1, true);
        assert_eq!(value.tag(), Tag::ctx(1));
        assert_eq!(value.content_len(), 3);
        assert_eq!(value.into_inner(), Object::Boolean(true));
    }

    #[test]
    fn decode_explicit() {
        fn take(data: &[u8]) -> Result<Explicit, DecodeError> {
            Explicit::take_content_from(
                Tag::ctx(0), &mut Content::new(Mode::Ber, data, 0, 0)
            )
        }

        assert_eq!(take(b"\x05\x00"), Ok(Explicit::ctx(0, ())));
        assert_eq!(
            take(b"").unwrap_err().kind(),
            &ErrorKind::Value(ValueError::ExplicitContent(0))
        );
        assert_eq!(
            take(b"\x05\x00\x05\x00").unwrap_err().kind(),
            &ErrorKind::Value(ValueError::ExplicitContent(2))
        );
    }
}
