//! The streaming sponge wrapper: absorbs arbitrary-length input against a
//! rate-sized block boundary, tolerating unaligned partial-block feeds, then
//! squeezes a fixed-length digest with domain-separated multi-rate padding.
//!
//! Input bytes are XORed into a pending buffer and flushed into the
//! permutation state a full rate-sized block at a time, carrying any
//! leftover bytes across calls to `update`. Lane bytes are converted to and
//! from the permutation's `[u64; 25]` form via a little-endian read/write,
//! the common approach for Keccak state handling in Rust.

use byteorder::{ByteOrder, LittleEndian};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::HashError;
use crate::permute::keccak_f1600;

/// The full 1600-bit (200-byte) state.
const STATE_BYTES: usize = 200;

/// The largest rate among the three supported capacities (256-bit digest,
/// 64-byte capacity): `200 - 64`. Large enough to hold any pending buffer.
const MAX_RATE: usize = 136;

/// Domain-separation mode: selects the padding suffix applied at `finalize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// FIPS 202 SHA3-*: suffix "01" then the multi-rate pad, i.e. byte 0x06.
    Sha3,
    /// The original Keccak submission: multi-rate pad only, i.e. byte 0x01.
    Keccak,
}

impl Mode {
    #[inline]
    fn domain_byte(self) -> u8 {
        match self {
            Mode::Sha3 => 0x06,
            Mode::Keccak => 0x01,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Fresh,
    Absorbing,
    Finalized,
}

/// The incremental init/absorb/squeeze sponge context.
///
/// `Sponge` is a single-writer resource: there is no reset operation, and a
/// finished hash is obtained by constructing a new context.
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct Sponge {
    state: [u8; STATE_BYTES],
    pending: [u8; MAX_RATE],
    pending_len: usize,
    #[zeroize(skip)]
    capacity_bytes: usize,
    #[zeroize(skip)]
    mode: Mode,
    #[zeroize(skip)]
    phase: Phase,
    #[zeroize(skip)]
    total_consumed_bytes: u64,
}

impl Sponge {
    fn new(capacity_bytes: usize) -> Self {
        Sponge {
            state: [0u8; STATE_BYTES],
            pending: [0u8; MAX_RATE],
            pending_len: 0,
            capacity_bytes,
            mode: Mode::Sha3,
            phase: Phase::Fresh,
            total_consumed_bytes: 0,
        }
    }

    /// A context producing a 256-bit digest (capacity 512 bits / 64 bytes).
    pub fn init_256() -> Self {
        Sponge::new(64)
    }

    /// A context producing a 384-bit digest (capacity 768 bits / 96 bytes).
    pub fn init_384() -> Self {
        Sponge::new(96)
    }

    /// A context producing a 512-bit digest (capacity 1024 bits / 128 bytes).
    pub fn init_512() -> Self {
        Sponge::new(128)
    }

    /// The rate in bytes: the portion of state that interacts with input.
    #[inline]
    pub fn rate_bytes(&self) -> usize {
        STATE_BYTES - self.capacity_bytes
    }

    /// The digest length in bytes: `capacity_bytes / 2`.
    #[inline]
    pub fn digest_bytes(&self) -> usize {
        self.capacity_bytes / 2
    }

    /// Bytes absorbed since construction. Purely informational — the
    /// algorithm itself does not depend on it.
    #[inline]
    pub fn total_consumed_bytes(&self) -> u64 {
        self.total_consumed_bytes
    }

    /// Switches domain separation mode, returning the previous mode. Valid
    /// only before the first `update`; refuses otherwise rather than
    /// silently producing a hash that matches neither SHA-3 nor Keccak.
    pub fn set_mode(&mut self, mode: Mode) -> Result<Mode, HashError> {
        if self.phase != Phase::Fresh {
            return Err(HashError::ModeAlreadyAbsorbing);
        }
        let previous = self.mode;
        self.mode = mode;
        Ok(previous)
    }

    /// Absorbs `data`, buffering any bytes short of a full rate-sized block.
    pub fn update(&mut self, data: &[u8]) -> Result<(), HashError> {
        if self.phase == Phase::Finalized {
            return Err(HashError::AlreadyFinalized);
        }
        self.phase = Phase::Absorbing;
        self.total_consumed_bytes += data.len() as u64;

        let rate = self.rate_bytes();
        let mut rest = data;

        if self.pending_len > 0 {
            let need = rate - self.pending_len;
            let take = need.min(rest.len());
            self.pending[self.pending_len..self.pending_len + take].copy_from_slice(&rest[..take]);
            self.pending_len += take;
            rest = &rest[take..];
            if self.pending_len < rate {
                debug_assert!(self.pending_len < rate);
                return Ok(());
            }
            let block = self.pending;
            self.xor_into_state(&block[..rate]);
            self.permute();
            self.pending_len = 0;
        }

        while rest.len() >= rate {
            self.xor_into_state(&rest[..rate]);
            self.permute();
            rest = &rest[rate..];
        }

        self.pending[..rest.len()].copy_from_slice(rest);
        self.pending_len = rest.len();
        debug_assert!(self.pending_len < rate);
        Ok(())
    }

    /// Applies domain-separation and multi-rate padding to the remaining
    /// pending bytes, permutes once more, and returns the digest. Idempotent:
    /// a second call returns the cached digest without permuting again.
    pub fn finalize(&mut self) -> &[u8] {
        if self.phase != Phase::Finalized {
            let rate = self.rate_bytes();
            let p = self.pending_len;
            let pending = self.pending;
            self.xor_into_state(&pending[..p]);
            self.state[p] ^= self.mode.domain_byte();
            self.state[rate - 1] ^= 0x80;
            self.permute();
            self.phase = Phase::Finalized;
        }
        &self.state[..self.digest_bytes()]
    }

    #[inline]
    fn xor_into_state(&mut self, data: &[u8]) {
        for (s, b) in self.state.iter_mut().zip(data) {
            *s ^= *b;
        }
    }

    #[inline]
    fn permute(&mut self) {
        let mut lanes = [0u64; 25];
        LittleEndian::read_u64_into(&self.state, &mut lanes);
        keccak_f1600(&mut lanes);
        LittleEndian::write_u64_into(&lanes, &mut self.state);
    }
}
