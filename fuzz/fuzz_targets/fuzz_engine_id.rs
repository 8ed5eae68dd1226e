#![no_main]

use libfuzzer_sys::fuzz_target;
use snmp_codec::decode_engine_id;

fuzz_target!(|data: &[u8]| {
    // Arbitrary identifiers must render or fail structurally, never panic
    let _ = decode_engine_id(data);
});
