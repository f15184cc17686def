//! GitHub Actions workflow commands.

use std::io::{self, Write};

/// Marks the workflow step as failed with `message`.
///
/// The runner picks up the `::error::` line; the caller is responsible for
/// exiting with a non-zero status afterwards.
pub fn set_failed(message: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "::error::{}", escape_data(message))?;
    stdout.flush()
}

pub fn info(message: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{message}")?;
    stdout.flush()
}

fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
