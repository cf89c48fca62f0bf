//! A short interactive session showing every kind of input.
//!
//! Set `RUST_LOG=quark=debug` to see rejected lines being logged on the standard error.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() {
    // Fatal conditions are already reported on the standard error; stay quiet unless asked.
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::OFF.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    quark::print_blue!("Welcome to the Quark example program!\n\n");

    let name = quark::get_string("What is your name? ");
    quark::print_green!("Hello, {name}!\n");

    let age = quark::get_int("How old are you? ");
    if age < 0 {
        quark::fatal!("Age cannot be negative");
    }
    quark::print_yellow!("You are {age} years old.\n");

    let height = quark::get_double("Enter your height in meters: ");
    quark::print_green!("Your height is {height:.2} meters.\n");

    if quark::get_char("Print a farewell? [y/n] ") == 'y' {
        quark::print_red!("Goodbye, {name}.\n");
    }
}
