//! Known-answer tests against the published NIST/Keccak test vectors,
//! exercised through the public sponge API.

use fips202::sponge::{Mode, Sponge};

fn hash_in_chunks(mut ctx: Sponge, data: &[u8], chunk: usize) -> Vec<u8> {
    if chunk == 0 {
        ctx.update(data).unwrap();
    } else {
        for piece in data.chunks(chunk.max(1)) {
            ctx.update(piece).unwrap();
        }
    }
    ctx.finalize().to_vec()
}

fn sha3_256(data: &[u8], chunk: usize) -> Vec<u8> {
    let mut ctx = Sponge::init_256();
    ctx.set_mode(Mode::Sha3).unwrap();
    hash_in_chunks(ctx, data, chunk)
}

fn sha3_384(data: &[u8], chunk: usize) -> Vec<u8> {
    let mut ctx = Sponge::init_384();
    ctx.set_mode(Mode::Sha3).unwrap();
    hash_in_chunks(ctx, data, chunk)
}

fn sha3_512(data: &[u8], chunk: usize) -> Vec<u8> {
    let mut ctx = Sponge::init_512();
    ctx.set_mode(Mode::Sha3).unwrap();
    hash_in_chunks(ctx, data, chunk)
}

fn keccak_256(data: &[u8], chunk: usize) -> Vec<u8> {
    let mut ctx = Sponge::init_256();
    ctx.set_mode(Mode::Keccak).unwrap();
    hash_in_chunks(ctx, data, chunk)
}

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s.replace(' ', "")).unwrap()
}

#[test]
fn sha3_256_of_empty_input() {
    let expected = unhex(
        "a7ffc6f8 bf1ed766 51c14756 a061d662 f580ff4d e43b49fa 82d80a4b 80f8434a",
    );
    assert_eq!(sha3_256(b"", 0), expected);
}

#[test]
fn sha3_256_of_abc() {
    let expected = unhex(
        "3a985da7 4fe225b2 045c172d 6bd390bd 855f086e 3e9d525b 46bfe245 11431532",
    );
    assert_eq!(sha3_256(b"abc", 0), expected);
}

#[test]
fn sha3_256_of_200_bytes_0xa3_in_three_partitions() {
    let data = vec![0xa3u8; 200];
    let expected = unhex(
        "79f38ade c5c20307 a98ef76e 8324afbf d46cfd81 b22e3973 c65fa1bd 9de31787",
    );
    assert_eq!(sha3_256(&data, 200), expected, "single 200-byte call");
    assert_eq!(sha3_256(&data, 100), expected, "two 100-byte calls");
    assert_eq!(sha3_256(&data, 1), expected, "200 one-byte calls");
}

#[test]
fn sha3_384_of_200_bytes_0xa3_in_three_partitions() {
    let data = vec![0xa3u8; 200];
    let expected = unhex(
        "1881de2c a7e41ef9 5dc4732b 8f5f002b 189cc1e4 2b74168e d1732649 ce1dbcdd \
         76197a31 fd55ee98 9f2d7050 dd473e8f",
    );
    assert_eq!(sha3_384(&data, 200), expected);
    assert_eq!(sha3_384(&data, 100), expected);
    assert_eq!(sha3_384(&data, 1), expected);
}

#[test]
fn sha3_512_of_200_bytes_0xa3_in_three_partitions() {
    let data = vec![0xa3u8; 200];
    let expected = unhex(
        "e76dfad2 2084a8b1 467fcf2f fa58361b ec7628ed f5f3fdc0 e4805dc4 8caeeca8 \
         1b7c13c3 0adf52a3 65958473 9a2df46b e589c51c a1a4a841 6df6545a 1ce8ba00",
    );
    assert_eq!(sha3_512(&data, 200), expected);
    assert_eq!(sha3_512(&data, 100), expected);
    assert_eq!(sha3_512(&data, 1), expected);
}

#[test]
fn keccak_256_of_abc() {
    let expected = unhex(
        "4e03657a ea45a94f c7d47ba8 26c8d667 c0d1e6e3 3a64a036 ec44f58f a12d6c45",
    );
    assert_eq!(keccak_256(b"abc", 0), expected);
}

/// Validates long-stream absorb correctness: a 64-byte periodic pattern
/// repeated 16,777,216 times (just over 1 GiB). Ignored by default; run
/// explicitly with `cargo test -- --ignored`.
#[test]
#[ignore]
fn keccak_256_of_extremely_long_message() {
    const PATTERN: &[u8] =
        b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmno";
    const REPEATS: usize = 16_777_216;
    let expected = unhex(
        "5f313c39 963dcf79 2b5470d4 ade9f3a3 56a3e402 1748690a 958372e2 b06f82a4",
    );

    let mut ctx = Sponge::init_256();
    ctx.set_mode(Mode::Keccak).unwrap();
    for _ in 0..REPEATS {
        ctx.update(PATTERN).unwrap();
    }
    assert_eq!(ctx.finalize(), expected.as_slice());
}
