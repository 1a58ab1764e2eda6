use dialoguer::console::Term;
use std::io::{self, Write};

use crate::cli_utils::CliResult;

/// Source of single keypresses for confirmation prompts.
pub trait KeyInput {
    /// Next key, or `None` once input is exhausted.
    fn read_key(&mut self) -> io::Result<Option<char>>;
}

/// Reads keys from the controlling terminal without waiting for Enter.
///
/// When stdin is not a terminal the first character of the next line is used.
pub struct TerminalKeys {
    term: Term,
}

impl TerminalKeys {
    pub fn new() -> Self {
        Self { term: Term::stdout() }
    }
}

impl Default for TerminalKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyInput for TerminalKeys {
    fn read_key(&mut self) -> io::Result<Option<char>> {
        if self.term.features().is_attended() {
            return self.term.read_char().map(Some);
        }

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line.chars().next())
    }
}

#[cfg(test)]
impl KeyInput for std::str::Chars<'_> {
    fn read_key(&mut self) -> io::Result<Option<char>> {
        Ok(self.next())
    }
}

/// Asks a yes/no question and waits for a single key.
///
/// Only `y` counts as consent; any other key, or no key at all, is a refusal.
pub fn confirm<K: KeyInput, W: Write>(message: &str, keys: &mut K, out: &mut W) -> CliResult<bool> {
    writeln!(out, "{}", message)?;
    out.flush()?;

    Ok(keys.read_key()? == Some('y'))
}
