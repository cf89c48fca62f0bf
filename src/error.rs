use std::io;

use thiserror::Error;

/// A condition that cannot be recovered from.
///
/// Values of this type never leave the crate: the public functions hand them to
/// [`report_fatal_error`](crate::report::report_fatal_error), which terminates the process.
#[derive(Debug, Error)]
pub(crate) enum Fatal {
    /// The line buffer could not be grown.
    #[error("Memory allocation failed")]
    OutOfMemory,
    /// Doubling the line buffer would exceed the largest possible allocation.
    #[error("Memory allocation failed (capacity overflow)")]
    CapacityOverflow,
    /// The input stream was closed while a line was required.
    #[error("Failed to read input: end of input")]
    EndOfInput,
    /// The line read for a single character was empty or held more than one character.
    #[error("Expected a single character")]
    ExpectedSingleChar,
    /// Reading from or writing to the console failed.
    #[error("Failed to access the console: {0}")]
    Io(#[from] io::Error),
}
