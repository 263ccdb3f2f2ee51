#![no_main]

use libfuzzer_sys::fuzz_target;
use bertree::Mode;

fuzz_target!(|data: &[u8]| {
    for mode in [Mode::Ber, Mode::Der] {
        for item in mode.iter(data) {
            let object = match item {
                Ok(object) => object,
                Err(_) => break,
            };
            let _ = object.to_string();
            let encoded = object.to_vec();
            assert_eq!(encoded.len(), object.encoded_len());
            assert_eq!(mode.decode_exact(&encoded), Ok(object));
        }
    }

    // Whatever DER accepts, BER accepts, too.
    if let Ok(res) = Mode::Der.decode(data, 0) {
        assert_eq!(Mode::Ber.decode(data, 0), Ok(res));
    }
});
