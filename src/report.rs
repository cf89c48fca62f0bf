use std::fmt;
use std::io::{self, Write};

use crate::error::Fatal;

/// The exit status of a process terminated by [`report_fatal`].
pub const FATAL_EXIT_CODE: i32 = 1;

/// Writes `Error: <message>` followed by a line feed to `w`.
pub(crate) fn write_fatal<W: Write + ?Sized>(w: &mut W, args: fmt::Arguments) -> io::Result<()> {
    w.write_all(b"Error: ")?;
    w.write_fmt(args)?;
    w.write_all(b"\n")?;
    w.flush()
}

/// Reports an error on the standard error and terminates the process with
/// [`FATAL_EXIT_CODE`].
///
/// This function never returns. The [`fatal!`](crate::fatal) macro is a more convenient way to
/// call it.
pub fn report_fatal(args: fmt::Arguments) -> ! {
    tracing::error!("{args}");
    // The process is going away; there is nowhere left to report a failing standard error.
    let _ = io::stdout().flush();
    let _ = write_fatal(&mut io::stderr().lock(), args);
    std::process::exit(FATAL_EXIT_CODE)
}

/// Reports a fatal condition raised by the crate itself.
pub(crate) fn report_fatal_error(err: &Fatal) -> ! {
    report_fatal(format_args!("{err}"))
}

/// Extension turning the crate's fatal conditions into process termination.
pub(crate) trait OrFatal<T> {
    /// Returns the value, or reports the error and terminates the process.
    fn or_fatal(self) -> T;
}

impl<T> OrFatal<T> for Result<T, Fatal> {
    #[inline]
    fn or_fatal(self) -> T {
        self.unwrap_or_else(|err| report_fatal_error(&err))
    }
}

/// Prints a formatted error message and terminates the process.
///
/// # Examples
///
/// ```no_run
/// let age = quark::get_int("How old are you? ");
/// if age < 0 {
///     quark::fatal!("Age cannot be negative");
/// }
/// ```
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        $crate::report_fatal(::std::format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn message_is_prefixed() {
        let mut out = Vec::new();
        write_fatal(&mut out, format_args!("Age cannot be {}", "negative")).unwrap();
        assert_eq!(out, b"Error: Age cannot be negative\n");
    }

    #[test]
    fn fatal_conditions_read_well() {
        let mut out = Vec::new();
        write_fatal(&mut out, format_args!("{}", Fatal::ExpectedSingleChar)).unwrap();
        assert_eq!(out, b"Error: Expected a single character\n");
    }
}
