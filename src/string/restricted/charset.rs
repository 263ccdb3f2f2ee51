//! The character set trait and its error.
//!
//! This is a private module. Its public items are re-exported by the parent.

use crate::ident::Tag;


//------------ CharSet -------------------------------------------------------

/// The character set of a restricted character string type.
///
/// The trait only includes associated items and can thus be implemented
/// for marker types. Its main purpose is to check whether a sequence of
/// octets is a valid string in the character set. This happens in
/// [`check_slice`][Self::check_slice].
///
/// The trait is primarily used to define the character set of the
/// [`RestrictedString`][super::RestrictedString] type.
pub trait CharSet {
    /// The natural tag of the related restricted character string type.
    const TAG: Tag;

    /// The ASN.1 name of the related restricted character string type.
    const NAME: &'static str;

    /// Checks whether a sequence of octets is a valid string.
    ///
    /// Returns an error pointing to the first offending octet otherwise.
    fn check_slice(slice: &[u8]) -> Result<(), CharSetError>;
}


//------------ CharSetError --------------------------------------------------

/// An illegal value was encountered during a character set check.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid {charset} character at index {index}")]
pub struct CharSetError {
    /// The name of the character set.
    charset: &'static str,

    /// The index of the first invalid octet.
    index: usize,
}

impl CharSetError {
    /// Creates a new error for character set `L` at the given index.
    pub fn new<L: CharSet>(index: usize) -> Self {
        CharSetError { charset: L::NAME, index }
    }

    /// Returns the name of the character set.
    pub fn charset(&self) -> &'static str {
        self.charset
    }

    /// Returns the index of the first invalid octet.
    pub fn index(&self) -> usize {
        self.index
    }
}


//------------ Helpers -------------------------------------------------------

/// Checks that all octets of `slice` fulfil `allowed`.
///
/// This is the check for all the character sets that are a subset of
/// ASCII.
pub(super) fn check_octets<L: CharSet>(
    slice: &[u8], allowed: impl Fn(u8) -> bool
) -> Result<(), CharSetError> {
    match slice.iter().position(|&ch| !allowed(ch)) {
        Some(index) => Err(CharSetError::new::<L>(index)),
        None => Ok(())
    }
}
