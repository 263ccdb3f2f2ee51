//! Handling of restricted character strings.
//!
//! All character sets supported here are subsets of UTF-8, so a restricted
//! string only ever needs to check its octets, never convert them.

pub use self::charset::{CharSet, CharSetError};
pub use self::ia5::{Ia5CharSet, Ia5String};
pub use self::numeric::{NumericCharSet, NumericString};
pub use self::printable::{PrintableCharSet, PrintableString};
pub use self::string::RestrictedString;
pub use self::utf8::{Utf8CharSet, Utf8String};

mod charset;
mod ia5;
mod numeric;
mod printable;
mod string;
mod utf8;
