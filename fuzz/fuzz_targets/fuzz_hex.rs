#![no_main]

use libfuzzer_sys::fuzz_target;
use snmp_codec::hex;

fuzz_target!(|data: &[u8]| {
    // Raw decode of arbitrary input
    let _ = hex::decode(data);

    // Our own encoding must always decode back
    let encoded = hex::encode(data);
    assert_eq!(hex::decode(&encoded).ok().as_deref(), Some(data));
});
