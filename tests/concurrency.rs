use snmp_codec::{decode_engine_id, hex};

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_encode_decode_heavy() {
    use tokio::task::JoinSet;

    let iterations = 20_000usize;
    let payload_sizes = [0usize, 1, 16, 64, 512];

    let mut tasks = JoinSet::new();
    for &size in &payload_sizes {
        tasks.spawn(async move {
            for i in 0..iterations {
                let payload = vec![((i + size) & 0xFF) as u8; size];
                let encoded = hex::encode(&payload);
                let decoded = hex::decode(&encoded).unwrap();
                assert_eq!(decoded, payload);
            }
        });
    }

    while let Some(res) = tasks.join_next().await {
        res.unwrap();
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_engine_id_decoding_is_consistent() {
    use tokio::task::JoinSet;

    let ids: Vec<Vec<u8>> = vec![
        vec![0x80, 0x00, 0x00, 0x01, 0x01, 10, 0, 0, 1],
        vec![0x80, 0x00, 0x1f, 0x88, 0x04, b'h', b'o', b's', b't'],
        vec![0x80, 0x00, 0x00, 0x09, 0x03, 1, 2, 3, 4, 5, 6],
        vec![0x00, 0xde, 0xad, 0xbe, 0xef],
    ];
    let expected: Vec<String> = ids.iter().map(|id| decode_engine_id(id).unwrap()).collect();

    let mut tasks = JoinSet::new();
    for _ in 0..8 {
        let ids = ids.clone();
        let expected = expected.clone();
        tasks.spawn(async move {
            for _ in 0..5_000 {
                for (id, want) in ids.iter().zip(&expected) {
                    assert_eq!(&decode_engine_id(id).unwrap(), want);
                }
            }
        });
    }

    while let Some(res) = tasks.join_next().await {
        res.unwrap();
    }
}
