//! Error taxonomy shared across the crate.

use std::io;
use thiserror::Error;

/// Alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or driving a progress bar.
///
/// All of these are raised synchronously at the call that triggers them;
/// nothing is retried and nothing is swallowed.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested palette name is not registered.
    #[error("unknown color palette {name:?}")]
    PaletteNotFound {
        /// Name that failed to resolve.
        name: String,
    },

    /// The iteration count was not a positive integer.
    #[error("invalid iteration count {iterations}, must be positive")]
    InvalidConfiguration {
        /// Rejected count.
        iterations: usize,
    },

    /// The bar was advanced past its configured iteration count.
    #[error("ramp index {index} out of range for {len} configured iterations")]
    IndexOutOfRange {
        /// Ramp position that was requested.
        index: usize,
        /// Number of entries in the ramp.
        len: usize,
    },

    /// The display surface rejected a payload.
    #[error("display surface rejected payload")]
    Surface(#[from] io::Error),
}
