use std::sync::OnceLock;

use colored::Colorize;

/// How chatty terminal output is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

static VERBOSITY: OnceLock<Verbosity> = OnceLock::new();

/// Set the global verbosity. Only the first call has an effect.
pub fn init(verbosity: Verbosity) {
    let _ = VERBOSITY.set(verbosity);
}

fn verbosity() -> Verbosity {
    VERBOSITY.get().copied().unwrap_or(Verbosity::Normal)
}

/// Print a success message.
pub fn success(msg: &str) {
    if verbosity() != Verbosity::Quiet {
        eprintln!("  {} {}", "✓".green(), msg);
    }
}

/// Print a neutral progress message.
pub fn info(msg: &str) {
    if verbosity() != Verbosity::Quiet {
        eprintln!("  {} {}", "·".cyan(), msg);
    }
}

/// Print a detail line, only in verbose mode.
pub fn detail(msg: &str) {
    if verbosity() == Verbosity::Verbose {
        eprintln!("    {}", msg.dimmed());
    }
}

/// Print a warning message. Shown even in quiet mode.
pub fn warning(msg: &str) {
    eprintln!("  {} {}", "⚠".yellow(), msg.yellow());
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}
