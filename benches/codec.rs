//! Marshal/unmarshal cost of the text and JSON adapters, against plain serde_json.
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use md5_digest::codec::{JsonCodec, TextCodec};
use md5_digest::Md5Digest;

const HELLO_JSON: &[u8] = b"\"kC8ueJlos5hO_dK2a8jn4A\"";

fn bench_json(c: &mut Criterion) {
    let digest = Md5Digest::sum_of("HelloWorld.\n");
    let mut group = c.benchmark_group("json");

    group.bench_function("marshal_json", |b| {
        b.iter(|| black_box(&digest).marshal_json())
    });
    group.bench_function("unmarshal_json", |b| {
        let mut target = Md5Digest::default();
        b.iter(|| target.unmarshal_json(black_box(HELLO_JSON)))
    });
    group.bench_function("serde_json_to_vec", |b| {
        b.iter(|| serde_json::to_vec(black_box(&digest)))
    });
    group.bench_function("serde_json_from_slice", |b| {
        b.iter(|| serde_json::from_slice::<Md5Digest>(black_box(HELLO_JSON)))
    });
    group.finish();
}

fn bench_text(c: &mut Criterion) {
    let digest = Md5Digest::sum_of("HelloWorld.\n");
    let text = digest.marshal_text();
    let mut group = c.benchmark_group("text");

    group.bench_function("marshal_text", |b| b.iter(|| black_box(&digest).marshal_text()));
    group.bench_function("unmarshal_text", |b| {
        let mut target = Md5Digest::default();
        b.iter(|| target.unmarshal_text(black_box(&text)))
    });
    group.bench_function("reject_wrong_size", |b| {
        let mut target = Md5Digest::default();
        b.iter(|| target.unmarshal_text(black_box(b"kC8ueJlos5hO")))
    });
    group.finish();
}

criterion_group!(benches, bench_json, bench_text);
criterion_main!(benches);
