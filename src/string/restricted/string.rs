//! The generic restricted character string.

use std::{cmp, fmt, hash, str};
use std::borrow::Cow;
use std::marker::PhantomData;
use bytes::Bytes;
use crate::decode::{Content, DecodeError};
use crate::encode::PrimitiveContent;
use crate::ident::Tag;
use super::charset::{CharSet, CharSetError};


//------------ RestrictedString ----------------------------------------------

/// A generic restricted character string.
///
/// Restricted character strings essentially are a sequence of characters from
/// a specific character set mapped into a sequence of octets. In BER, these
/// are in fact encoded just like an octet string with a different tag.
/// Consequently, this type is a wrapper around a `Bytes` value that makes
/// sure that the sequence of octets is correctly encoded for the given
/// character set.
///
/// You can create a new value from a `String` or `str` via the
/// [`from_string`][Self::from_string] function and the `FromStr` trait or
/// from octets via [`from_bytes`][Self::from_bytes]. All of them check the
/// octets against the character set.
#[derive(Default)]
pub struct RestrictedString<L> {
    /// The octets of the string.
    octets: Bytes,

    /// A marker for the character set.
    marker: PhantomData<L>,
}

impl<L: CharSet> RestrictedString<L> {
    /// Creates a restricted string from a bytes value.
    ///
    /// The octets must be a valid sequence for the character set of the
    /// string or an error is returned.
    pub fn from_bytes(octets: Bytes) -> Result<Self, CharSetError> {
        L::check_slice(octets.as_ref())?;
        Ok(RestrictedString { octets, marker: PhantomData })
    }

    /// Creates a restricted string from a string.
    pub fn from_string(s: String) -> Result<Self, CharSetError> {
        Self::from_bytes(s.into())
    }

    /// Returns the content as a string.
    ///
    /// All character sets we support are subsets of UTF-8, so this will
    /// always return a borrowed string.
    pub fn to_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.octets.as_ref())
    }

    /// Returns the octets of the string.
    pub fn as_slice(&self) -> &[u8] {
        self.octets.as_ref()
    }

    /// Converts the string into its octets.
    pub fn into_bytes(self) -> Bytes {
        self.octets
    }

    /// Returns the number of octets in the string.
    pub fn len(&self) -> usize {
        self.octets.len()
    }

    /// Returns whether the string is empty.
    pub fn is_empty(&self) -> bool {
        self.octets.is_empty()
    }

    /// Parses the content octets of a restricted string value.
    ///
    /// Invalid characters are reported at their position in the input.
    pub fn take_content_from(
        content: &mut Content
    ) -> Result<Self, DecodeError> {
        let octets = content.as_slice();
        L::check_slice(octets).map_err(|err| {
            content.content_err_at(err.index(), err)
        })?;
        Ok(RestrictedString {
            octets: Bytes::copy_from_slice(octets),
            marker: PhantomData,
        })
    }
}


//--- FromStr

impl<L: CharSet> str::FromStr for RestrictedString<L> {
    type Err = CharSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(Bytes::copy_from_slice(s.as_bytes()))
    }
}


//--- Clone

impl<L> Clone for RestrictedString<L> {
    fn clone(&self) -> Self {
        RestrictedString { octets: self.octets.clone(), marker: PhantomData }
    }
}


//--- AsRef

impl<L> AsRef<[u8]> for RestrictedString<L> {
    fn as_ref(&self) -> &[u8] {
        self.octets.as_ref()
    }
}


//--- PartialEq and Eq, PartialOrd and Ord

impl<L> PartialEq for RestrictedString<L> {
    fn eq(&self, other: &Self) -> bool {
        self.octets == other.octets
    }
}

impl<L> Eq for RestrictedString<L> { }

impl<L> PartialOrd for RestrictedString<L> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<L> Ord for RestrictedString<L> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.octets.cmp(&other.octets)
    }
}


//--- Hash

impl<L> hash::Hash for RestrictedString<L> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.octets.hash(state)
    }
}


//--- PrimitiveContent

impl<L: CharSet> PrimitiveContent for RestrictedString<L> {
    const TAG: Tag = L::TAG;

    fn content_len(&self) -> usize {
        self.octets.len()
    }

    fn append_content(&self, target: &mut Vec<u8>) {
        target.extend_from_slice(self.octets.as_ref())
    }
}


//--- Display and Debug

impl<L: CharSet> fmt::Display for RestrictedString<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_str())
    }
}

impl<L: CharSet> fmt::Debug for RestrictedString<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple(L::NAME).field(&self.to_str()).finish()
    }
}


//============ Tests =========================================================
