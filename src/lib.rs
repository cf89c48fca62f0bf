//! Line-based console input with type validation, and colored output.
//!
//! Every typed `get_*` function reads whole lines from the standard input. Numeric getters keep
//! asking until the operator types a well-formed value, while unrecoverable conditions (such as
//! the input stream being closed) terminate the process through [`report_fatal`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

mod error;

mod line;

mod number;
pub use self::number::*;

mod console;
pub use self::console::*;

mod input;
pub use self::input::*;

mod color;
pub use self::color::*;

mod report;
pub use self::report::*;
