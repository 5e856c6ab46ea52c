//! The Keccak-_f_[1600] permutation: 24 rounds of θ, ρ, π, χ, ι over a
//! 5×5 matrix of 64-bit lanes, linearized as `lanes[x + 5*y]`.
//!
//! This is a pure function with no allocation and no failure mode, written as
//! a straightforward round loop rather than hand-unrolled: a sponge hash
//! permutes once per rate-sized block rather than once per byte, so there is
//! little to gain from unrolling the round structure here.

#![allow(clippy::unreadable_literal)]

/// Round constants for ι, FIPS 202 §3.2.5.
const RC: [u64; 24] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rotation offsets for ρ, indexed by the lane's *source* position `x + 5*y`.
/// `RHO[0]` (the (0,0) lane) is 0 by definition.
const RHO: [u32; 25] = [
    0, 1, 62, 28, 27, 36, 44, 6, 55, 20, 3, 10, 43, 25, 39, 41, 45, 15, 21, 8, 18, 2, 61, 56, 14,
];

/// Applies the Keccak-_f_[1600] permutation to a 25-lane, 64-bit-per-lane
/// state in place. The state is the lane-major (x + 5*y) layout described in
/// the data model: lane (x,y) lives at `state[x + 5*y]`.
pub(crate) fn keccak_f1600(state: &mut [u64; 25]) {
    for round in 0..24 {
        theta(state);
        rho_pi(state);
        chi(state);
        iota(state, round);
    }
}

#[inline]
fn theta(state: &mut [u64; 25]) {
    let mut c = [0u64; 5];
    for x in 0..5 {
        c[x] = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
    }
    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            state[x + 5 * y] ^= d;
        }
    }
}

#[inline]
fn rho_pi(state: &mut [u64; 25]) {
    let mut b = [0u64; 25];
    for x in 0..5 {
        for y in 0..5 {
            let src = x + 5 * y;
            let dst = y + 5 * ((2 * x + 3 * y) % 5);
            b[dst] = state[src].rotate_left(RHO[src]);
        }
    }
    *state = b;
}

#[inline]
fn chi(state: &mut [u64; 25]) {
    let mut row = [0u64; 5];
    for y in 0..5 {
        row.copy_from_slice(&state[5 * y..5 * y + 5]);
        for x in 0..5 {
            state[x + 5 * y] = row[x] ^ ((!row[(x + 1) % 5]) & row[(x + 2) % 5]);
        }
    }
}

#[inline]
fn iota(state: &mut [u64; 25], round: usize) {
    state[0] ^= RC[round];
}
