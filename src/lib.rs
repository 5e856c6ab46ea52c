#![cfg_attr(not(feature = "std"), no_std)]

//! A self-contained implementation of the FIPS 202 hash functions
//! (SHA3-256, SHA3-384, SHA3-512) and the original Keccak submission they
//! were standardized from, both built over the same Keccak-_f_[1600]
//! permutation and differing only in their domain-separation padding byte.
//!
//! Three layers, leaves first:
//!
//! 1. [`permute`] — the pure Keccak-_f_[1600] permutation: 24 rounds of
//!    θ/ρ/π/χ/ι over a 1600-bit state.
//! 2. [`sponge`] — [`sponge::Sponge`], the incremental init/absorb/squeeze
//!    context that drives the permutation over rate-sized blocks.
//! 3. [`facade`] — [`facade::hash_buffer`] and the fixed-size typed wrappers
//!    ([`Sha3_256`], [`Sha3_384`], [`Sha3_512`], [`Keccak256`],
//!    [`Keccak384`], [`Keccak512`]), a one-shot convenience layer over 1-2.
//!
//! No parallel/tree hashing, no SHAKE, and no capacities beyond the three
//! listed above are in scope.

pub mod error;
pub mod facade;
pub(crate) mod permute;
pub mod sponge;

pub use error::HashError;
pub use facade::{hash_buffer, Keccak256, Keccak384, Keccak512, Sha3_256, Sha3_384, Sha3_512};
pub use sponge::{Mode, Sponge};
