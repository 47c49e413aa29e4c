#![no_main]
use libfuzzer_sys::fuzz_target;
use urin::pct_enc::{table, PercentEncoder};

fuzz_target!(|data: &str| {
    for encoder in [
        PercentEncoder::new(table::PCHAR),
        PercentEncoder::new(table::QUERY),
        PercentEncoder::ENCODE_NOTHING,
        PercentEncoder::ENCODE_EVERYTHING,
    ] {
        let encoded = encoder.encode(data);
        assert_eq!(encoder.decode(&encoded).unwrap(), data);
    }
    // Decoding arbitrary input never panics.
    let _ = PercentEncoder::ENCODE_NOTHING.decode(data);
});
