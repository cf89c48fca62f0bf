use std::fmt;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::color::{write_colored, Color};
use crate::error::Fatal;
use crate::line::{decode_line, read_raw_line_from, INITIAL_CAPACITY};
use crate::number::Number;
use crate::report::OrFatal;

/// A line-oriented console, reading from `R` and writing prompts and diagnostics to `W`.
///
/// The free functions of this crate ([`get_int`](crate::get_int) and friends) use a console bound
/// to the standard streams. Building one by hand allows reading from any other source.
///
/// # Examples
///
/// ```
/// use quark::Console;
///
/// let input: &[u8] = b"abc\n21\n";
/// let mut console = Console::new(input, Vec::new());
///
/// assert_eq!(console.get_int("Number: "), 21);
///
/// let (_, output) = console.into_parts();
/// assert_eq!(
///     output,
///     b"Number: Invalid input. Please enter an integer.\nNumber: ",
/// );
/// ```
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
    initial_capacity: usize,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Creates a console locking the standard input for as long as it lives.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a new [`Console`].
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            initial_capacity: INITIAL_CAPACITY,
        }
    }

    /// Sets the capacity lines start being accumulated with.
    ///
    /// Longer lines still fit: the buffer doubles its capacity as often as needed.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Returns the reader and the writer of this console.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn prompt(&mut self, prompt: Option<&str>) -> Result<(), Fatal> {
        if let Some(prompt) = prompt {
            self.writer.write_all(prompt.as_bytes())?;
            self.writer.flush()?;
        }
        Ok(())
    }

    fn try_read_raw_line(&mut self, prompt: Option<&str>) -> Result<Option<Vec<u8>>, Fatal> {
        self.prompt(prompt)?;
        read_raw_line_from(&mut self.reader, self.initial_capacity)
    }

    pub(crate) fn try_read_line(&mut self, prompt: Option<&str>) -> Result<Option<String>, Fatal> {
        Ok(self.try_read_raw_line(prompt)?.map(decode_line))
    }

    pub(crate) fn try_get_string(&mut self, prompt: Option<&str>) -> Result<String, Fatal> {
        self.try_read_line(prompt)?.ok_or(Fatal::EndOfInput)
    }

    pub(crate) fn try_get_char(&mut self, prompt: Option<&str>) -> Result<char, Fatal> {
        let line = self
            .try_read_raw_line(prompt)?
            .ok_or(Fatal::EndOfInput)?;
        // A replacement character is not something the operator typed.
        let line = std::str::from_utf8(&line).map_err(|_| Fatal::ExpectedSingleChar)?;
        let mut chars = line.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Fatal::ExpectedSingleChar),
        }
    }

    pub(crate) fn try_get_number<T: Number>(&mut self, prompt: Option<&str>) -> Result<T, Fatal> {
        loop {
            let line = self.try_get_string(prompt)?;
            if let Some(value) = T::parse_strict(&line) {
                break Ok(value);
            }

            tracing::debug!(kind = ?T::KIND, len = line.len(), "rejected numeric input");
            writeln!(
                self.writer,
                "Invalid input. Please enter {}.",
                T::KIND.description()
            )?;
        }
    }

    /// Reads a line, returning `None` once the input has been exhausted.
    ///
    /// `prompt` is written first, without a trailing line feed. The line feed ending the line is
    /// not part of the result. Bytes that are not valid UTF-8 are replaced with `U+FFFD`, so the
    /// length of the result may differ from the number of bytes read.
    ///
    /// The process is terminated if the line cannot be stored in memory or if reading fails.
    pub fn read_line<'a>(&mut self, prompt: impl Into<Option<&'a str>>) -> Option<String> {
        self.try_read_line(prompt.into()).or_fatal()
    }

    /// Reads a line of text.
    ///
    /// Unlike [`Console::read_line`], the process is terminated if the input has been
    /// exhausted. Invalid UTF-8 is replaced with `U+FFFD`, as in [`Console::read_line`].
    pub fn get_string<'a>(&mut self, prompt: impl Into<Option<&'a str>>) -> String {
        self.try_get_string(prompt.into()).or_fatal()
    }

    /// Reads a line that must consist of exactly one character.
    ///
    /// Anything else terminates the process, including a line that is not valid UTF-8. There is
    /// no second chance.
    pub fn get_char<'a>(&mut self, prompt: impl Into<Option<&'a str>>) -> char {
        self.try_get_char(prompt.into()).or_fatal()
    }

    /// Reads lines until one of them is a valid `T`, as per [`parse_number`].
    ///
    /// Every rejected line is followed by a short diagnostic and by the prompt again. The
    /// process is terminated if the input is exhausted first.
    ///
    /// [`parse_number`]: crate::parse_number
    pub fn get_number<'a, T: Number>(&mut self, prompt: impl Into<Option<&'a str>>) -> T {
        self.try_get_number(prompt.into()).or_fatal()
    }

    /// Reads an `i32`. See [`Console::get_number`].
    #[inline]
    pub fn get_int<'a>(&mut self, prompt: impl Into<Option<&'a str>>) -> i32 {
        self.get_number(prompt)
    }

    /// Reads an `i64`. See [`Console::get_number`].
    #[inline]
    pub fn get_long<'a>(&mut self, prompt: impl Into<Option<&'a str>>) -> i64 {
        self.get_number(prompt)
    }

    /// Reads an `f32`. See [`Console::get_number`].
    #[inline]
    pub fn get_float<'a>(&mut self, prompt: impl Into<Option<&'a str>>) -> f32 {
        self.get_number(prompt)
    }

    /// Reads an `f64`. See [`Console::get_number`].
    #[inline]
    pub fn get_double<'a>(&mut self, prompt: impl Into<Option<&'a str>>) -> f64 {
        self.get_number(prompt)
    }

    pub(crate) fn try_print_colored(
        &mut self,
        color: Color,
        args: fmt::Arguments,
    ) -> Result<(), Fatal> {
        write_colored(&mut self.writer, color, args)?;
        Ok(())
    }

    /// Writes a message to this console's writer in the given color.
    ///
    /// The process is terminated if writing fails.
    pub fn print_colored(&mut self, color: Color, args: fmt::Arguments) {
        self.try_print_colored(color, args).or_fatal()
    }
}
