//! Errors surfaced at the call site that caused them. Bugs internal to this
//! crate (an invariant the sponge itself should never violate) are not
//! represented here and stay as `debug_assert!`s at their call sites rather
//! than becoming a reportable error variant.
//!
//! `Display` is implemented by hand over `core::fmt` instead of via a derive
//! macro, since the usual choice (`thiserror`) unconditionally requires
//! `std` and would quietly defeat this crate's `no_std` support the moment
//! the `std` feature is turned off. `std::error::Error` is added back only
//! under the `std` feature.

use core::fmt::{self, Display, Formatter};

/// Failure modes surfaced synchronously at the call site that produced them.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HashError {
    /// `hash_buffer` was asked for a digest size other than 256, 384, or 512
    /// bits (the doubled alias form `n << 1` for n in {128, 192, 256} is
    /// accepted, not rejected).
    InvalidDigestSize { bits: u32 },

    /// `hash_buffer`'s output buffer is smaller than `bits / 8` bytes.
    BufferTooSmall { need: usize, have: usize },

    /// `update` or `finalize` was called on a context that already
    /// finalized.
    AlreadyFinalized,

    /// `set_mode` was called after the first `update`, which would silently
    /// produce a hash that matches neither SHA-3 nor Keccak.
    ModeAlreadyAbsorbing,
}

impl Display for HashError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::InvalidDigestSize { bits } => write!(f, "unsupported digest size: {bits} bits"),
            Self::BufferTooSmall { need, have } => {
                write!(f, "output buffer too small: need {need} bytes, have {have}")
            }
            Self::AlreadyFinalized => write!(f, "operation attempted after finalize"),
            Self::ModeAlreadyAbsorbing => write!(f, "set_mode called after absorb began"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HashError {}
