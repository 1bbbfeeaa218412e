//! Core logic for the rotfold toy hash and its brute-force inverter.
//!
//! The hash is deliberately weak: a 32-bit state folded through a
//! rotate-XOR mixer. Because one mixer round can be inverted by simply
//! trying all 2^32 words, the crate pairs the hash engine with an
//! exhaustive preimage search that finds every candidate, not just the
//! first. The binaries under `src/bin/` are thin glue over these modules.

pub mod error;
pub mod hash;
pub mod search;
pub mod verify;

pub use error::RotfoldError;
pub use hash::{fold, mix, INITIAL_STATE};
pub use search::{find_preimages, find_preimages_in_range, find_preimages_with, SearchOutcome};
pub use verify::verify;

/// Demo target word used by the `preimage_find` binary when no target is
/// given. Carried over from the original tool, which documents it as a
/// post-mix state to invert.
pub const DEMO_TARGET: u32 = 0x632e4e5c;
