use crate::console::Console;
use crate::number::Number;

/// Reads a single line from the standard input, or `None` if the input has been exhausted.
///
/// When a prompt is provided, it is printed first. The trailing line feed is removed, but the
/// line is otherwise returned as typed, whitespace included.
///
/// The process is terminated if the standard input cannot be read.
///
/// # Examples
///
/// ```no_run
/// while let Some(line) = quark::read_line("> ") {
///     println!("You just wrote: {line}");
/// }
/// ```
pub fn read_line<'a>(prompt: impl Into<Option<&'a str>>) -> Option<String> {
    Console::stdio().read_line(prompt)
}

/// Reads a single line from the standard input.
///
/// The process is terminated if the standard input has been exhausted.
///
/// # Examples
///
/// ```no_run
/// let name = quark::get_string("What is your name? ");
/// quark::print_green!("Hello, {name}!\n");
/// ```
pub fn get_string<'a>(prompt: impl Into<Option<&'a str>>) -> String {
    Console::stdio().get_string(prompt)
}

/// Reads a line holding exactly one character from the standard input.
///
/// An empty line, a longer line or an exhausted input terminates the process.
///
/// # Examples
///
/// ```no_run
/// if quark::get_char("Continue? [y/n] ") == 'y' {
///     println!("Continuing.");
/// }
/// ```
pub fn get_char<'a>(prompt: impl Into<Option<&'a str>>) -> char {
    Console::stdio().get_char(prompt)
}

/// Reads a number from the standard input. The function loops indefinitely until a valid number
/// is provided.
///
/// Each invalid line is answered with a short diagnostic, after which the prompt is printed
/// again. The process is terminated if the standard input is exhausted first.
///
/// # Examples
///
/// ```no_run
/// let seconds: u64 = quark::get_number::<i64>("Seconds: ").unsigned_abs();
/// println!("{seconds}s");
/// ```
pub fn get_number<'a, T: Number>(prompt: impl Into<Option<&'a str>>) -> T {
    Console::stdio().get_number(prompt)
}

/// Reads an `i32` from the standard input. See [`get_number`].
///
/// # Examples
///
/// ```no_run
/// let age = quark::get_int("How old are you? ");
/// println!("Oh? So you are {age} year(s) old?");
/// ```
#[inline]
pub fn get_int<'a>(prompt: impl Into<Option<&'a str>>) -> i32 {
    get_number(prompt)
}

/// Reads an `i64` from the standard input. See [`get_number`].
#[inline]
pub fn get_long<'a>(prompt: impl Into<Option<&'a str>>) -> i64 {
    get_number(prompt)
}

/// Reads an `f32` from the standard input. See [`get_number`].
#[inline]
pub fn get_float<'a>(prompt: impl Into<Option<&'a str>>) -> f32 {
    get_number(prompt)
}

/// Reads an `f64` from the standard input. See [`get_number`].
#[inline]
pub fn get_double<'a>(prompt: impl Into<Option<&'a str>>) -> f64 {
    get_number(prompt)
}
