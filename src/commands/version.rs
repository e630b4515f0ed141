//! Command: print version information.

/// Print the spellbookx version to stdout.
#[allow(clippy::print_stdout)]
pub fn run() {
    let version = option_env!("SPELLBOOKX_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    println!("spellbookx {version}");
}
