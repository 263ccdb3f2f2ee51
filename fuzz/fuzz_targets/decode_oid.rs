#![no_main]

use std::str::{self, FromStr};
use libfuzzer_sys::fuzz_target;
use bertree::{Object, Oid};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(oid) = Oid::from_str(s) {
            assert_eq!(Oid::from_str(&oid.to_string()), Ok(oid.clone()));
            let encoded = Object::from(oid.clone()).to_vec();
            assert_eq!(
                bertree::decode::decode(&encoded, 0),
                Ok((Object::Oid(oid), encoded.len()))
            );
        }
    }
});
