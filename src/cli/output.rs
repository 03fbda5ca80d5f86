//! Terminal output helpers. `colored` honours NO_COLOR and CLICOLOR_FORCE.

use std::fmt::Display;
use std::io::Write;

use colored::Colorize;

/// `error: <msg>` on stderr, label in bold red
pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// `Warning: <msg>` on stderr, label in yellow
pub fn warning(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Writes `msg` to stdout as is; rendered trees carry their own newlines.
pub fn raw(msg: &(impl Display + ?Sized)) {
    let mut stdout = std::io::stdout().lock();
    // ignore a closed pipe, e.g. `rstree dir | head`
    let _ = write!(stdout, "{}", msg).and_then(|_| stdout.flush());
}

pub fn info(msg: &(impl Display + ?Sized)) {
    println!("{}", msg);
}
