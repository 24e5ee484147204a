use geocryptark_crypto::{GeoCoordinate, GeoCrypt, KdfParams, SymmetricKey};

fn make_data(size: usize) -> Vec<u8> {
    (0..size)
        .map(|i| (i.wrapping_mul(7) ^ (i >> 3)) as u8)
        .collect()
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

#[divan::bench]
fn bench_geo_hash(bencher: divan::Bencher) {
    let rt = runtime();
    let engine = GeoCrypt::default();
    bencher.bench_local(|| {
        rt.block_on(engine.generate_geo_hash(
            divan::black_box(40.7128),
            divan::black_box(-74.0060),
            "bench salt",
            "bench password",
        ))
        .unwrap()
    });
}

#[divan::bench(args = [1024, 65536, 1048576])]
fn bench_encrypt_with_key(bencher: divan::Bencher, size: usize) {
    let rt = runtime();
    let engine = GeoCrypt::default();
    let key = SymmetricKey::from_bytes([0xABu8; 32]);
    let data = make_data(size);
    bencher
        .counter(divan::counter::BytesCount::new(size))
        .bench_local(|| {
            rt.block_on(engine.encrypt_with_key(divan::black_box(&data), &key))
                .unwrap()
        });
}

#[divan::bench(args = [1, 4, 16], sample_count = 10)]
fn bench_multi_key_encrypt(bencher: divan::Bencher, recipients: usize) {
    let rt = runtime();
    let engine = GeoCrypt::default().with_kdf_params(KdfParams { iterations: 1000 });
    let coords: Vec<GeoCoordinate> = (0..recipients)
        .map(|i| GeoCoordinate::new(i as f64, -(i as f64)))
        .collect();
    bencher.bench_local(|| {
        rt.block_on(engine.multi_key_encrypt(
            "bench payload",
            divan::black_box(&coords),
            "bench salt",
            "bench password",
        ))
        .unwrap()
    });
}

fn main() {
    divan::main();
}
