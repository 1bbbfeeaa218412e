//! Internal-consistency check used by the search binaries and the
//! self-test harness.

use crate::RotfoldError;

/// Compare two words and surface a mismatch as an error value.
///
/// On equality there is no observable effect. A mismatch carries both
/// words, hex-formatted by the error's `Display`, and the caller decides
/// whether to abort; the binaries treat it as fatal.
pub fn verify(actual: u32, expected: u32) -> Result<(), RotfoldError> {
    if actual == expected {
        Ok(())
    } else {
        Err(RotfoldError::Mismatch { actual, expected })
    }
}
