//! HS256 sign and verify benchmarks

use criterion::Criterion;
use hsjwt::{Jwt, Token};
use std::hint::black_box;

const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

fn sample_token() -> Token {
    let mut token = Token::new();
    token.claims.set_issuer("bench");
    token.claims.set_audience("api");
    token.claims.set_principal("user-1");
    token.claims.set("roles", "read,write");
    token.claims.set("level", 3);
    token
}

fn bench_sign(c: &mut Criterion) {
    let token = sample_token();
    c.bench_function("hs256_sign", |b| {
        b.iter(|| black_box(&token).sign(SECRET));
    });
}

fn bench_verify(c: &mut Criterion) {
    let compact = sample_token().sign(SECRET).unwrap_or_default();
    let mut target = Token::new();
    c.bench_function("hs256_verify", |b| {
        b.iter(|| target.verify(black_box(&compact), SECRET));
    });

    let signer = Jwt::hs256().with_secret(SECRET);
    c.bench_function("hs256_decode", |b| {
        b.iter(|| signer.decode(black_box(&compact)));
    });
}

fn main() {
    let mut c = Criterion::default().configure_from_args();
    bench_sign(&mut c);
    bench_verify(&mut c);
    c.final_summary();
}
