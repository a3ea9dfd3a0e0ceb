//! Token parsing performance benchmarks
//!
//! Benchmarks parsing and verification with different
//! token sizes, stages and malformed inputs.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use jawt::codec::{self, DecodeMode};
use jawt::utils::base64url;
use jawt::*;

const SECRET: &str = "test-secret-key";

/// Render an HS256 token whose claims segment is roughly `payload_size` bytes
fn token_with_payload_size(payload_size: usize) -> String {
    let mut jwt = Jwt::create(SECRET, Algorithm::HS256).unwrap();
    jwt.set_claim("sub", "user123").unwrap();
    jwt.set_claim("iss", "https://example.com").unwrap();
    jwt.set_claim("iat", 1_516_239_022i64).unwrap();
    jwt.set_claim("exp", 9_999_999_999i64).unwrap();

    let base = codec::encode(jwt.claims()).len();
    let extra = payload_size.saturating_sub(base + 10);
    if extra > 0 {
        jwt.set_claim("data", "x".repeat(extra)).unwrap();
    }

    jwt.render().unwrap()
}

fn bench_parsing_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_by_size");

    for size in [64, 256, 1024, 4096, 16384] {
        let token = token_with_payload_size(size);

        group.throughput(Throughput::Bytes(token.len() as u64));
        group.bench_function(format!("size_{size}"), |b| {
            b.iter(|| Jwt::from_token(SECRET, Algorithm::HS256, black_box(&token)).unwrap());
        });
    }

    group.finish();
}

fn bench_parsing_stages(c: &mut Criterion) {
    let token = token_with_payload_size(256);
    let parts: Vec<&str> = token.split('.').collect();

    let mut group = c.benchmark_group("parse_stages");

    group.bench_function("full_parse", |b| {
        b.iter(|| Jwt::from_token(SECRET, Algorithm::HS256, black_box(&token)).unwrap());
    });

    group.bench_function("strict_parse", |b| {
        let mut builder = TokenBuilder::default();
        builder.secret(SECRET).algorithm(Algorithm::HS256).strict(true);
        b.iter(|| builder.parse(black_box(&token)).unwrap());
    });

    group.bench_function("base64url_decode", |b| {
        b.iter(|| {
            let _ = base64url::decode(black_box(parts[0]), 64 * 1024);
            let _ = base64url::decode(black_box(parts[1]), 64 * 1024);
        });
    });

    group.bench_function("body_decode", |b| {
        let header = base64url::decode(parts[0], 64 * 1024).unwrap();
        let claims = base64url::decode(parts[1], 64 * 1024).unwrap();

        b.iter(|| {
            let mut attributes = Attributes::new();
            codec::decode_into(black_box(&header), &mut attributes, DecodeMode::Lenient).unwrap();
            codec::decode_into(black_box(&claims), &mut attributes, DecodeMode::Lenient).unwrap();
            attributes
        });
    });

    group.finish();
}

fn bench_invalid_tokens(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_invalid");

    let cases = [
        ("missing_parts", "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9".to_string()),
        ("invalid_base64", "invalid.base64.signature!!!".to_string()),
        ("malformed_body", "eyJpbnZhbGlkX2pzb24.e30.Signature".to_string()),
        (
            "wrong_signature",
            format!("{}x", token_with_payload_size(256)),
        ),
    ];

    for (name, token) in &cases {
        group.bench_function(*name, |b| {
            b.iter(|| Jwt::from_token(SECRET, Algorithm::HS256, black_box(token)).is_err());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parsing_by_size,
    bench_parsing_stages,
    bench_invalid_tokens
);
criterion_main!(benches);
