//! The rotate-XOR hash engine: the `mix` primitive and the `fold` message
//! hash built on top of it.
//!
//! Both functions are total and deterministic. `mix` is linear over GF(2)
//! and maps both `0x00000000` and `0xFFFFFFFF` to zero, so it is 2-to-1
//! onto its image; the preimage search in [`crate::search`] exploits this.

/// Initial internal state of [`fold`].
pub const INITIAL_STATE: u32 = 0x524f464c;

/// Number of message bytes consumed per folding step.
pub const CHUNK_SIZE: usize = 4;

/// Byte used to pad a final partial chunk up to [`CHUNK_SIZE`].
pub const PAD_BYTE: u8 = 0xFF;

/// Core mixing primitive: `word ^ rotl(word, 17)`.
///
/// Not invertible in general. The kernel of the map is
/// `{0x00000000, 0xFFFFFFFF}`, so every reachable output has exactly two
/// preimages which are bitwise complements of each other.
#[inline]
pub fn mix(word: u32) -> u32 {
    word ^ word.rotate_left(17)
}

/// Interpret one message chunk as a word.
///
/// Chunks are read big-endian. A final chunk shorter than [`CHUNK_SIZE`]
/// is padded with [`PAD_BYTE`] in the missing low-order positions, so
/// `"A"` becomes `0x41FFFFFF`. This is the one deterministic padding rule
/// that reproduces the published test vectors; changing it changes the
/// hash of every message whose length is not a multiple of four.
pub fn chunk_word(chunk: &[u8]) -> u32 {
    debug_assert!(!chunk.is_empty() && chunk.len() <= CHUNK_SIZE);
    let mut buf = [PAD_BYTE; CHUNK_SIZE];
    buf[..chunk.len()].copy_from_slice(chunk);
    u32::from_be_bytes(buf)
}

/// Hash an arbitrary-length message down to a single word.
///
/// The internal state starts at [`INITIAL_STATE`]. Each chunk word is
/// XORed into the state and the state is passed through [`mix`]; a final
/// [`mix`] is applied after the last chunk. The empty message therefore
/// hashes to `mix(INITIAL_STATE)`.
pub fn fold(message: &[u8]) -> u32 {
    let mut state = INITIAL_STATE;
    for chunk in message.chunks(CHUNK_SIZE) {
        state = mix(state ^ chunk_word(chunk));
    }
    mix(state)
}
