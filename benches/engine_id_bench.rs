#![allow(clippy::unwrap_used)]

use criterion::{criterion_group, criterion_main, Criterion};
use snmp_codec::decode_engine_id;

fn bench_engine_id(c: &mut Criterion) {
    let cases: [(&str, Vec<u8>); 6] = [
        ("unstructured", vec![0x00; 12]),
        ("ipv4", vec![0x80, 0x00, 0x00, 0x01, 0x01, 192, 168, 0, 1]),
        ("ipv6", [&[0x80, 0x00, 0x00, 0x01, 0x02][..], &[0xfe; 16]].concat()),
        ("mac", vec![0x80, 0x00, 0x00, 0x01, 0x03, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]),
        ("text", [&[0x80, 0x00, 0x1f, 0x88, 0x04][..], b"core-router-01"].concat()),
        ("violation", vec![0x80, 0x00, 0x00, 0x01, 0x01, 10, 0]),
    ];

    let mut group = c.benchmark_group("engine_id");
    for (name, id) in &cases {
        group.bench_function(*name, |b| {
            b.iter(|| decode_engine_id(id).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_engine_id);
criterion_main!(benches);
