//! The convenience façade: a one-shot `hash_buffer` entry point plus typed
//! wrappers fixing a (mode, digest size) pair, giving each concrete hash
//! function its own small type instead of requiring callers to juggle a
//! size argument and a mode argument by hand.

use crate::error::HashError;
use crate::sponge::{Mode, Sponge};

/// Runs init + set_mode + update + finalize for a single `(bits, mode,
/// input)` tuple, writing the digest into `output` and zeroing the
/// transient context before returning.
///
/// `bits` accepts the canonical digest sizes {256, 384, 512} directly. It
/// also accepts the doubled-alias wire contract some callers (e.g. a fuzz
/// harness passing `n << 1` for `n` in {128, 192}) use, *except* where that
/// would conflict with a canonical value: 256 is always read as "256-bit
/// digest", never as "n=256 doubled to 512".
pub fn hash_buffer(bits: u32, mode: Mode, input: &[u8], output: &mut [u8]) -> Result<(), HashError> {
    let digest_bits = match bits {
        256 | 384 | 512 => bits,
        128 | 192 => bits * 2,
        other => return Err(HashError::InvalidDigestSize { bits: other }),
    };

    let digest_bytes = (digest_bits / 8) as usize;
    if output.len() < digest_bytes {
        return Err(HashError::BufferTooSmall { need: digest_bytes, have: output.len() });
    }

    let mut ctx = match digest_bits {
        256 => Sponge::init_256(),
        384 => Sponge::init_384(),
        512 => Sponge::init_512(),
        _ => unreachable!("digest_bits was just validated against {{256,384,512}}"),
    };
    ctx.set_mode(mode).expect("a freshly constructed context always accepts set_mode");
    ctx.update(input).expect("a non-finalized context always accepts update");
    output[..digest_bytes].copy_from_slice(ctx.finalize());

    use zeroize::Zeroize;
    ctx.zeroize();
    Ok(())
}

macro_rules! typed_hash {
    ($(#[$meta:meta])* $name:ident, $mode:expr, $init:ident, $digest_len:expr) => {
        $(#[$meta])*
        #[allow(non_camel_case_types)]
        #[derive(Clone, Debug)]
        pub struct $name(Sponge);

        impl $name {
            /// Starts a new hash in this type's fixed mode and digest size.
            pub fn new() -> Self {
                let mut s = Sponge::$init();
                s.set_mode($mode).expect("a freshly constructed context always accepts set_mode");
                $name(s)
            }

            /// Absorbs more input.
            pub fn update(&mut self, data: &[u8]) {
                self.0.update(data).expect("update called on a non-finalized context");
            }

            /// Finalizes and returns the digest.
            pub fn finalize(mut self) -> [u8; $digest_len] {
                let mut out = [0u8; $digest_len];
                out.copy_from_slice(self.0.finalize());
                out
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::new()
            }
        }
    };
}

typed_hash!(
    /// SHA3-256, fixing mode=SHA3 and digest size=32 bytes.
    Sha3_256,
    Mode::Sha3,
    init_256,
    32
);
typed_hash!(
    /// SHA3-384, fixing mode=SHA3 and digest size=48 bytes.
    Sha3_384,
    Mode::Sha3,
    init_384,
    48
);
typed_hash!(
    /// SHA3-512, fixing mode=SHA3 and digest size=64 bytes.
    Sha3_512,
    Mode::Sha3,
    init_512,
    64
);
typed_hash!(
    /// The original Keccak-256 (pre-FIPS-202 padding), digest size=32 bytes.
    Keccak256,
    Mode::Keccak,
    init_256,
    32
);
typed_hash!(
    /// The original Keccak-384 (pre-FIPS-202 padding), digest size=48 bytes.
    Keccak384,
    Mode::Keccak,
    init_384,
    48
);
typed_hash!(
    /// The original Keccak-512 (pre-FIPS-202 padding), digest size=64 bytes.
    Keccak512,
    Mode::Keccak,
    init_512,
    64
);
