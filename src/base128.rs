//! Base 128 encoded integers.
//!
//! Both the tag number in the identifier octets and the components of an
//! object identifier are encoded as a sequence of octets carrying seven
//! bits each, most significant first. All octets but the last have their
//! most significant bit set.
//!
//! This is a private module.


//------------ Subidentifier -------------------------------------------------

/// A decoded base 128 integer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Subidentifier {
    /// The value of the integer.
    pub value: u64,

    /// The number of octets the integer occupied.
    pub len: usize,

    /// Whether the encoding started with a padding octet.
    ///
    /// This happens if the first octet is `0x80` which would add nothing
    /// to the value.
    pub padded: bool,
}


//------------ Error ---------------------------------------------------------

/// Decoding a base 128 integer failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The data ended before an octet with a cleared top bit.
    Unterminated,

    /// The value doesn’t fit into a `u64`.
    Overflow,
}


//------------ Functions -----------------------------------------------------

/// Takes a base 128 integer from the beginning of `data`.
pub fn take(data: &[u8]) -> Result<Subidentifier, Error> {
    let mut value = 0u64;
    for (idx, &octet) in data.iter().enumerate() {
        if value > (u64::MAX >> 7) {
            return Err(Error::Overflow)
        }
        value = (value << 7) | u64::from(octet & 0x7F);
        if octet & 0x80 == 0 {
            return Ok(Subidentifier {
                value,
                len: idx + 1,
                padded: data[0] == 0x80,
            })
        }
    }
    Err(Error::Unterminated)
}

/// Returns the number of octets needed to encode `value`.
pub fn encoded_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    if bits == 0 {
        1
    }
    else {
        (bits + 6) / 7
    }
}

/// Appends the encoding of `value` to `target`.
pub fn append_encoded(value: u64, target: &mut Vec<u8>) {
    for idx in (1..encoded_len(value)).rev() {
        target.push(((value >> (idx * 7)) & 0x7F) as u8 | 0x80);
    }
    target.push((value & 0x7F) as u8)
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn encode(value: u64) -> Vec<u8> {
        let mut res = Vec::new();
        append_encoded(value, &mut res);
        assert_eq!(res.len(), encoded_len(value));
        res
    }

    #[test]
    fn encode_values() {
        assert_eq!(encode(0), b"\x00");
        assert_eq!(encode(0x7F), b"\x7F");
        assert_eq!(encode(0x80), b"\x81\x00");
        assert_eq!(encode(840), b"\x86\x48");
        assert_eq!(encode(113549), b"\x86\xF7\x0D");
        assert_eq!(encode(u64::MAX).len(), 10);
    }

    #[test]
    fn take_values() {
        assert_eq!(
            take(b"\x86\xF7\x0D\x01"),
            Ok(Subidentifier { value: 113549, len: 3, padded: false })
        );
        assert_eq!(
            take(b"\x80\x01"),
            Ok(Subidentifier { value: 1, len: 2, padded: true })
        );
        assert_eq!(take(&encode(u64::MAX)).map(|x| x.value), Ok(u64::MAX));
    }

    #[test]
    fn take_failures() {
        assert_eq!(take(b""), Err(Error::Unterminated));
        assert_eq!(take(b"\x81\x82"), Err(Error::Unterminated));
        assert_eq!(
            take(b"\x82\xFF\xFF\xFF\xFF\xFF\xFF\xFF\xFF\x7F"),
            Err(Error::Overflow)
        );
    }
}
