//! Example: Decoding engine identifiers and dumping buffers
//!
//! Decodes a handful of SNMPv3 engine identifiers and dumps a random salt
//! through the tracing sink.
//!
//! Run with: `cargo run --example dump_engine_id`

#![allow(clippy::uninlined_format_args)]

use snmp_codec::config::CodecConfig;
use snmp_codec::utils::dump::{Dumper, TracingSink};
use snmp_codec::utils::logging::init_logging;
use snmp_codec::utils::random::random_buffer;
use snmp_codec::{decode_engine_id, hex};
use tracing::Level;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CodecConfig::default_with_overrides(|c| c.logging.log_level = Level::DEBUG);
    config.validate_strict()?;
    init_logging(&config.logging);

    println!("=== Engine Identifier Decoding ===\n");

    let samples: [(&str, &str); 7] = [
        ("opaque", "000000000000000000000002"),
        ("ipv4", "8000000001c0a80001"),
        ("ipv6", "800000000220010db8000000000000000000000001"),
        ("mac", "8000000103aabbccddeeff"),
        ("text", "80001f880472747231"),
        ("truncated ipv4", "80000001010a0b"),
        ("unknown", "80000001420102"),
    ];

    for (label, text) in samples {
        let bytes = hex::decode(text)?;
        println!("{:>15}: {}", label, decode_engine_id(&bytes)?);
    }

    match decode_engine_id(&[0x80, 0x00]) {
        Ok(s) => println!("{:>15}: {}", "short", s),
        Err(e) => println!("{:>15}: error: {}", "short", e),
    }

    println!("\n=== Chunked Dump (see stderr) ===");

    let dumper = Dumper::from_config(TracingSink, &config);
    let salt = random_buffer(48)?;
    let lines = dumper.dump(Some("usm salt"), &salt);
    println!("emitted {} lines under token '{}'", lines, dumper.token());

    dumper.dump_engine_id(&hex::decode("8000000103001b213c4d5e")?)?;

    Ok(())
}
