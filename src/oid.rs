//! ASN.1 Object Identifiers.
//!
//! This module contains the [`Oid`] type that implements object identifiers,
//! a construct used by ASN.1 to uniquely identify all sorts of things. The
//! type is also re-exported at the top-level.

use std::fmt;
use std::str::FromStr;
use smallvec::SmallVec;
use crate::base128;
use crate::decode::{Content, DecodeError, ErrorKind, ValueError};
use crate::encode::PrimitiveContent;
use crate::ident::Tag;


//------------ Oid -----------------------------------------------------------

/// An object identifer.
///
/// Object identifiers are globally unique, hierarchical values that are used
/// to identify objects or their type. When written, they are presented as a
/// sequence of integers separated by dots such as ‘1.3.6.1.5.5.7.1’. These
/// integers are called arcs.
///
/// Values of this type keep the arcs as a sequence of `u64`. Most object
/// identifiers have few enough arcs to be kept without allocation.
///
/// An object identifier always has at least two arcs. The first arc is 0,
/// 1, or 2. If it is 0 or 1, the second arc must be less than 40.
///
/// # BER Encoding
///
/// Each arc is encoded as a base 128 integer with the most significant bit
/// set in all octets but the last. As an exception, the first two arcs are
/// combined into a single subidentifier with the value `arc1 * 40 + arc2`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Oid {
    /// The arcs of the object identifier.
    arcs: SmallVec<[u64; 8]>,
}

impl Oid {
    /// Creates a new object identifier from its arcs.
    ///
    /// Returns an error if the arcs don’t form a valid object identifier.
    pub fn new(arcs: &[u64]) -> Result<Self, ValueError> {
        Self::check_arcs(arcs)?;
        Ok(Oid { arcs: SmallVec::from_slice(arcs) })
    }

    /// Returns the arcs of the object identifier.
    pub fn arcs(&self) -> &[u64] {
        self.arcs.as_ref()
    }

    /// Returns an iterator over the arcs.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.arcs.iter().copied()
    }

    /// Checks that `arcs` form a valid object identifier.
    fn check_arcs(arcs: &[u64]) -> Result<(), ValueError> {
        match *arcs {
            [] | [_] => Err(ValueError::InvalidOid("fewer than two arcs")),
            [first, _, ..] if first > 2 => {
                Err(ValueError::InvalidOid("first arc larger than 2"))
            }
            [first, second, ..] if first < 2 && second >= 40 => {
                Err(ValueError::InvalidOid("second arc too large"))
            }
            [_, second, ..] if second > u64::MAX - 80 => {
                Err(ValueError::InvalidOid("second arc too large"))
            }
            _ => Ok(())
        }
    }

    /// Returns the value of the first subidentifier.
    ///
    /// This can’t overflow for a valid object identifier.
    fn first_subidentifier(&self) -> u64 {
        self.arcs[0] * 40 + self.arcs[1]
    }

    /// Decodes the content of an OBJECT IDENTIFIER value.
    ///
    /// In DER mode, subidentifiers must not start with padding octets.
    pub fn take_content_from(
        content: &mut Content
    ) -> Result<Self, DecodeError> {
        let octets = content.as_slice();
        if octets.is_empty() {
            return Err(content.content_err(ValueError::EmptyOid))
        }

        let mut arcs = SmallVec::new();
        let mut idx = 0;
        while idx < octets.len() {
            let sub = match base128::take(&octets[idx..]) {
                Ok(sub) => sub,
                Err(base128::Error::Unterminated) => {
                    return Err(content.content_err_at(
                        idx, ValueError::UnterminatedOid
                    ))
                }
                Err(base128::Error::Overflow) => {
                    return Err(content.content_err_at(
                        idx, ValueError::OidComponentOverflow
                    ))
                }
            };
            if sub.padded && content.mode().is_restricted() {
                return Err(content.content_err_at(
                    idx, ErrorKind::NonCanonical("padded OID subidentifier")
                ))
            }
            if idx == 0 {
                let (first, second) = Position::split_first(sub.value);
                arcs.push(first);
                arcs.push(second);
            }
            else {
                arcs.push(sub.value)
            }
            idx += sub.len;
        }
        Ok(Oid { arcs })
    }
}


//--- FromStr

impl FromStr for Oid {
    type Err = ValueError;

    /// Parses an object identifier in dotted notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let arcs = s.split('.').map(|arc| {
            if arc.is_empty() || !arc.bytes().all(|ch| ch.is_ascii_digit()) {
                return Err(ValueError::InvalidOid("invalid dotted notation"))
            }
            arc.parse::<u64>().map_err(|_| {
                ValueError::InvalidOid("arc too large")
            })
        }).collect::<Result<SmallVec<[u64; 8]>, _>>()?;
        Self::check_arcs(&arcs)?;
        Ok(Oid { arcs })
    }
}


//--- AsRef

impl AsRef<[u64]> for Oid {
    fn as_ref(&self) -> &[u64] {
        self.arcs()
    }
}


//--- Display

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut arcs = self.arcs.iter();
        if let Some(first) = arcs.next() {
            write!(f, "{}", first)?;
        }
        for arc in arcs {
            write!(f, ".{}", arc)?;
        }
        Ok(())
    }
}


//--- PrimitiveContent

impl PrimitiveContent for Oid {
    const TAG: Tag = Tag::OID;

    fn content_len(&self) -> usize {
        base128::encoded_len(self.first_subidentifier())
        + self.arcs[2..].iter().map(|arc| {
            base128::encoded_len(*arc)
        }).sum::<usize>()
    }

    fn append_content(&self, target: &mut Vec<u8>) {
        base128::append_encoded(self.first_subidentifier(), target);
        for arc in &self.arcs[2..] {
            base128::append_encoded(*arc, target)
        }
    }
}


//------------ Position ------------------------------------------------------

/// The position of an arc in the object identifier.
///
/// As the first two arcs of the object identifer are encoded in the
/// first subidentifier of the encoded value, they need special treatment.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
enum Position {
    /// This is the first arc of the identifier.
    ///
    /// This is 0 if the integer value of the subidentifer is 0..39,
    /// 1 for 40..79, and 2 for anything else.
    First,

    /// This is the second arc of the identifier.
    ///
    /// This is the integer value of the subidentifer module 40 if the value
    /// is below 80 and otherwise the value minus 80.
    Second,
}

impl Position {
    /// Returns the arc at this position for the first subidentifier.
    fn arc(self, sub: u64) -> u64 {
        match self {
            Position::First => {
                if sub < 40 {
                    0
                }
                else if sub < 80 {
                    1
                }
                else {
                    2
                }
            }
            Position::Second => {
                if sub < 80 {
                    sub % 40
                }
                else {
                    sub - 80
                }
            }
        }
    }

    /// Splits the first subidentifier into the first two arcs.
    fn split_first(sub: u64) -> (u64, u64) {
        (Position::First.arc(sub), Position::Second.arc(sub))
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::mode::Mode;
    use super::*;

    fn take(mode: Mode, data: &[u8]) -> Result<Oid, DecodeError> {
        Oid::take_content_from(&mut Content::new(mode, data, 0, 0))
    }

    fn oid(arcs: &[u64]) -> Oid {
        Oid::new(arcs).unwrap()
    }

    #[test]
    fn decode() {
        assert_eq!(take(Mode::Der, b"\x2A\x03"), Ok(oid(&[1, 2, 3])));
        assert_eq!(
            take(Mode::Der, b"\x2A\x86\x48\x86\xF7\x0D"),
            Ok(oid(&[1, 2, 840, 113549]))
        );
        assert_eq!(take(Mode::Der, b"\x00"), Ok(oid(&[0, 0])));
        assert_eq!(take(Mode::Der, b"\x4F"), Ok(oid(&[1, 39])));
        assert_eq!(take(Mode::Der, b"\x50"), Ok(oid(&[2, 0])));
        assert_eq!(take(Mode::Der, b"\x88\x37"), Ok(oid(&[2, 999])));
    }

    #[test]
    fn decode_failures() {
        assert_eq!(
            take(Mode::Ber, b"").unwrap_err().kind(),
            &ErrorKind::Value(ValueError::EmptyOid)
        );
        let err = take(Mode::Ber, b"\x2A\x86").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Value(ValueError::UnterminatedOid));
        assert_eq!(err.offset(), 1);
        assert_eq!(
            take(
                Mode::Ber, b"\x2A\x82\xFF\xFF\xFF\xFF\xFF\xFF\xFF\xFF\x7F"
            ).unwrap_err().kind(),
            &ErrorKind::Value(ValueError::OidComponentOverflow)
        );
        assert_eq!(
            take(Mode::Ber, b"\x2A\x80\x03"), Ok(oid(&[1, 2, 3]))
        );
        assert_eq!(
            take(Mode::Der, b"\x2A\x80\x03").unwrap_err().offset(), 1
        );
    }

    #[test]
    fn new() {
        assert!(Oid::new(&[]).is_err());
        assert!(Oid::new(&[1]).is_err());
        assert!(Oid::new(&[3, 1]).is_err());
        assert!(Oid::new(&[1, 40]).is_err());
        assert!(Oid::new(&[2, 40]).is_ok());
        assert!(Oid::new(&[2, u64::MAX]).is_err());
        assert_eq!(oid(&[1, 2, 3]).arcs().len(), 3);
    }

    #[test]
    fn dotted_notation() {
        let value = Oid::from_str("1.2.840.113549").unwrap();
        assert_eq!(value.arcs(), &[1, 2, 840, 113549]);
        assert_eq!(value.to_string(), "1.2.840.113549");
        assert!(Oid::from_str("").is_err());
        assert!(Oid::from_str("1").is_err());
        assert!(Oid::from_str("1.2.").is_err());
        assert!(Oid::from_str("1.x.3").is_err());
        assert!(Oid::from_str("7.2.3").is_err());
        assert!(Oid::from_str("+1.+2.+3").is_err());
        assert!(Oid::from_str("1.2.-3").is_err());
        assert!(Oid::from_str("1..3").is_err());
        assert!(Oid::from_str("1.2. 3").is_err());
        assert_eq!(
            Oid::from_str("1.2.99999999999999999999"),
            Err(ValueError::InvalidOid("arc too large"))
        );
    }

    #[test]
    fn encode() {
        assert_eq!(oid(&[1, 2, 3]).content_to_vec(), b"\x2A\x03");
        assert_eq!(
            oid(&[1, 2, 840, 113549]).content_to_vec(),
            b"\x2A\x86\x48\x86\xF7\x0D"
        );
        assert_eq!(oid(&[2, 999]).content_to_vec(), b"\x88\x37");
        assert_eq!(oid(&[2, 999, 3]).content_len(), 3);
    }
}
