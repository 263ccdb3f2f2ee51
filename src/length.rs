//! The length octets.
//!
//! This is a private module. Its functions are used by the decoder and the
//! encoder only.

use std::mem;
use crate::decode::{DecodeError, ErrorKind};
use crate::mode::Mode;


//------------ Decoding ------------------------------------------------------

/// Takes the length octets starting at `pos` in `data`.
///
/// Returns the length of the content and the offset of the first content
/// octet.
///
/// # BER Encoding
///
/// The length can be encoded in one of two basic ways. Which one is used is
/// determined by the most significant bit of the first octet. If it is not
/// set, the length octets is one octet long and the remaining bits of this
/// first octet provide the definite length. Thus, if the first octet is
/// less than 128, it provides the definite length already.
///
/// If the most significant bit is set, the remaining bits of the first
/// octet specify the number of octets that follow to encode the actual
/// length. If they specify that there are zero more octets, i.e., the
/// value of the first octet is 128, the length is indefinite. We don’t
/// support indefinite lengths and reject them. The value 0xFF is reserved
/// and illegal. Otherwise, the following octets give the big-endian
/// encoding of the length of the content octets.
///
/// In DER mode, the length must be encoded in the minimum number of octets.
pub fn take_from(
    mode: Mode, data: &[u8], pos: usize
) -> Result<(usize, usize), DecodeError> {
    let first = match data.get(pos) {
        Some(first) => *first,
        None => return Err(DecodeError::unexpected_end(pos))
    };
    let count = match first {
        // Bit 8 clear: single octet.
        n if n & 0x80 == 0 => return Ok((usize::from(n), pos + 1)),

        // 0x80: indefinite.
        0x80 => return Err(DecodeError::new(ErrorKind::IndefiniteLength, pos)),

        // 0xFF: illegal.
        0xFF => {
            return Err(DecodeError::new(
                ErrorKind::InvalidLength("reserved length octet"), pos
            ))
        }

        // Anything else: clear left bit, number of octets.
        n => usize::from(n & 0x7F)
    };
    let octets = match data.get(pos + 1..pos + 1 + count) {
        Some(octets) => octets,
        None => return Err(DecodeError::unexpected_end(data.len()))
    };

    // The first octet can’t be zero and it can’t be less that 0x80 if it is
    // the only octet. In both cases, there is a shorter encoding.
    if mode.is_restricted()
        && (octets[0] == 0 || (octets[0] < 0x80 && count == 1))
    {
        return Err(DecodeError::new(
            ErrorKind::NonCanonical("non-minimal length"), pos
        ))
    }

    let significant = match octets.iter().position(|&octet| octet != 0) {
        Some(start) => &octets[start..],
        None => return Ok((0, pos + 1 + count))
    };
    if significant.len() > mem::size_of::<usize>() {
        return Err(DecodeError::new(ErrorKind::ExcessiveLength, pos))
    }
    let len = significant.iter().fold(0usize, |len, &octet| {
        (len << 8) | usize::from(octet)
    });
    Ok((len, pos + 1 + count))
}


//------------ Encoding ------------------------------------------------------

/// Returns the number of length octets needed for `len` content octets.
pub fn encoded_len(len: usize) -> usize {
    if len > 0x7F {
        significant_octets(len) + 1
    }
    else {
        1
    }
}

/// Appends the length octets for `len` content octets to `target`.
///
/// This always uses the shortest form and thus is valid for DER.
pub fn append_encoded(len: usize, target: &mut Vec<u8>) {
    if len > 0x7F {
        let count = significant_octets(len);

        // A usize will never be larger than 126 octets, so this fits.
        target.push(count as u8 | 0x80);
        let octets = len.to_be_bytes();
        target.extend_from_slice(&octets[octets.len() - count..])
    }
    else {
        target.push(len as u8)
    }
}

/// Returns the number of octets of `len` without leading zero octets.
fn significant_octets(len: usize) -> usize {
    mem::size_of::<usize>() - (len.leading_zeros() / 8) as usize
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn take(mode: Mode, data: &[u8]) -> Result<usize, DecodeError> {
        let (len, pos) = take_from(mode, data, 0)?;
        assert_eq!(pos, data.len(), "trailing data");
        Ok(len)
    }

    #[test]
    fn ber_take_from() {
        assert_eq!(take(Mode::Ber, b"\x00"), Ok(0x00));
        assert_eq!(take(Mode::Ber, b"\x12"), Ok(0x12));
        assert_eq!(take(Mode::Ber, b"\x7f"), Ok(0x7f));
        assert_eq!(take(Mode::Ber, b"\x81\x00"), Ok(0));
        assert_eq!(take(Mode::Ber, b"\x81\xF0"), Ok(0xF0));
        assert_eq!(take(Mode::Ber, b"\x82\x00\x00"), Ok(0));
        assert_eq!(take(Mode::Ber, b"\x82\xF0\x0E"), Ok(0xF00E));
        assert_eq!(take(Mode::Ber, b"\x82\x00\x0E"), Ok(0x0E));
        assert_eq!(
            take(Mode::Ber, b"\x8a\x00\x00\x00\x00\x00\x00\x00\x00\x01\x00"),
            Ok(0x100)
        );
        assert_eq!(
            take(Mode::Ber, b"\x80").unwrap_err().kind(),
            &ErrorKind::IndefiniteLength
        );
        assert!(take(Mode::Ber, b"\xFF").is_err());
    }

    #[test]
    fn der_take_from() {
        assert_eq!(take(Mode::Der, b"\x00"), Ok(0x00));
        assert_eq!(take(Mode::Der, b"\x12"), Ok(0x12));
        assert_eq!(take(Mode::Der, b"\x7f"), Ok(0x7f));
        assert!(take(Mode::Der, b"\x80").is_err());
        assert!(take(Mode::Der, b"\x81\x00").is_err());
        assert!(take(Mode::Der, b"\x81\x7f").is_err());
        assert_eq!(take(Mode::Der, b"\x81\x80"), Ok(0x80));
        assert_eq!(take(Mode::Der, b"\x81\xF0"), Ok(0xF0));
        assert!(take(Mode::Der, b"\x82\x00\x00").is_err());
        assert_eq!(take(Mode::Der, b"\x82\xF0\x0E"), Ok(0xF00E));
        assert!(take(Mode::Der, b"\x82\x00\x0E").is_err());
        assert!(take(Mode::Der, b"\xFF").is_err());
    }

    #[test]
    fn take_failures() {
        assert_eq!(
            take_from(Mode::Ber, b"", 0), Err(DecodeError::unexpected_end(0))
        );
        assert_eq!(
            take_from(Mode::Ber, b"\x83\x01\x00", 0),
            Err(DecodeError::unexpected_end(3))
        );
        assert_eq!(
            take_from(
                Mode::Ber, b"\x89\x01\x00\x00\x00\x00\x00\x00\x00\x00", 0
            ).unwrap_err().kind(),
            &ErrorKind::ExcessiveLength
        );
    }

    #[test]
    fn encode() {
        fn step(len: usize, res: &[u8]) {
            let mut vec = Vec::new();
            append_encoded(len, &mut vec);
            assert_eq!(vec.as_slice(), res, "append failed for {len}");
            assert_eq!(encoded_len(len), res.len());
        }

        step(0, b"\x00");
        step(1, b"\x01");
        step(0x12, b"\x12");
        step(0x7f, b"\x7f");
        step(0x80, b"\x81\x80");
        step(0xff, b"\x81\xff");
        step(0x100, b"\x82\x01\x00");
        step(1025, b"\x82\x04\x01");
        step(0xdead, b"\x82\xde\xad");
        step(0x10000, b"\x83\x01\x00\x00");
    }
}
