use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RotfoldError {
    /// A candidate or test vector failed re-verification. Signals an
    /// internal-consistency bug in the transform or the search, never an
    /// expected runtime condition.
    #[error("verification mismatch: got 0x{actual:08x}; want 0x{expected:08x}")]
    Mismatch { actual: u32, expected: u32 },

    /// Invalid command line input, e.g. a malformed hex target.
    #[error("config error: {0}")]
    Config(String),
}
