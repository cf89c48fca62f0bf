use std::fmt;
use std::io::{self, Write};

/// The escape sequence restoring the default terminal formatting.
pub const RESET: &str = "\x1b[0m";

/// A foreground color text can be printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// `ESC[31m`
    Red,
    /// `ESC[32m`
    Green,
    /// `ESC[33m`
    Yellow,
    /// `ESC[34m`
    Blue,
}

impl Color {
    /// Returns the ANSI escape sequence selecting this color.
    pub const fn ansi_code(self) -> &'static str {
        match self {
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
        }
    }
}

/// Writes `args` to `w`, wrapped between the escape sequence of `color` and [`RESET`].
pub(crate) fn write_colored<W: Write + ?Sized>(
    w: &mut W,
    color: Color,
    args: fmt::Arguments,
) -> io::Result<()> {
    w.write_all(color.ansi_code().as_bytes())?;
    w.write_fmt(args)?;
    w.write_all(RESET.as_bytes())
}

/// Prints a message to the standard output in the given color.
///
/// The color codes are always emitted, whether or not the output is a terminal. Prefer the
/// [`print_red!`], [`print_green!`], [`print_yellow!`] and [`print_blue!`] macros.
///
/// # Panics
///
/// Like [`print!`], this function panics if writing to the standard output fails.
pub fn print_colored(color: Color, args: fmt::Arguments) {
    write_colored(&mut io::stdout().lock(), color, args).expect("failed to write to stdout");
}

/// Prints a formatted message in red.
///
/// # Examples
///
/// ```no_run
/// quark::print_red!("{} tries left\n", 3);
/// ```
#[macro_export]
macro_rules! print_red {
    ($($arg:tt)*) => {
        $crate::print_colored($crate::Color::Red, ::std::format_args!($($arg)*))
    };
}

/// Prints a formatted message in green.
#[macro_export]
macro_rules! print_green {
    ($($arg:tt)*) => {
        $crate::print_colored($crate::Color::Green, ::std::format_args!($($arg)*))
    };
}

/// Prints a formatted message in yellow.
#[macro_export]
macro_rules! print_yellow {
    ($($arg:tt)*) => {
        $crate::print_colored($crate::Color::Yellow, ::std::format_args!($($arg)*))
    };
}

/// Prints a formatted message in blue.
#[macro_export]
macro_rules! print_blue {
    ($($arg:tt)*) => {
        $crate::print_colored($crate::Color::Blue, ::std::format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn colored(color: Color, args: fmt::Arguments) -> String {
        let mut out = Vec::new();
        write_colored(&mut out, color, args).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn message_is_wrapped() {
        assert_eq!(
            colored(Color::Green, format_args!("Hello, {}!\n", "Ada")),
            "\x1b[32mHello, Ada!\n\x1b[0m",
        );
    }

    #[test]
    fn every_color_has_its_code() {
        assert_eq!(colored(Color::Red, format_args!("x")), "\x1b[31mx\x1b[0m");
        assert_eq!(colored(Color::Yellow, format_args!("x")), "\x1b[33mx\x1b[0m");
        assert_eq!(colored(Color::Blue, format_args!("")), "\x1b[34m\x1b[0m");
    }
}
