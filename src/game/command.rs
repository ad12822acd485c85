//! Player commands

use super::constants::{KEY_LEFT, KEY_QUIT, KEY_RIGHT};
use crate::mansion::Exit;

/// One turn's worth of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Exit),
    Quit,
    /// Anything that is not a known key
    Invalid,
}

impl Command {
    /// Interpret a single key, ignoring case
    pub fn from_key(key: char) -> Self {
        match key.to_ascii_lowercase() {
            KEY_LEFT => Command::Move(Exit::Left),
            KEY_RIGHT => Command::Move(Exit::Right),
            KEY_QUIT => Command::Quit,
            _ => Command::Invalid,
        }
    }

    /// Interpret a line of input by its first non-whitespace character.
    ///
    /// Returns `None` for a blank line, which callers skip rather than reject.
    pub fn from_line(line: &str) -> Option<Self> {
        line.trim_start().chars().next().map(Command::from_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_ignore_case() {
        assert_eq!(Command::from_key('e'), Command::Move(Exit::Left));
        assert_eq!(Command::from_key('E'), Command::Move(Exit::Left));
        assert_eq!(Command::from_key('d'), Command::Move(Exit::Right));
        assert_eq!(Command::from_key('D'), Command::Move(Exit::Right));
        assert_eq!(Command::from_key('s'), Command::Quit);
        assert_eq!(Command::from_key('S'), Command::Quit);
    }

    #[test]
    fn test_other_keys_are_invalid() {
        for key in ['x', 'q', '1', ' ', 'é'] {
            assert_eq!(Command::from_key(key), Command::Invalid);
        }
    }

    #[test]
    fn test_from_line() {
        assert_eq!(Command::from_line("  d\n"), Some(Command::Move(Exit::Right)));
        assert_eq!(Command::from_line("send"), Some(Command::Quit));
        assert_eq!(Command::from_line("   \n"), None);
        assert_eq!(Command::from_line("?"), Some(Command::Invalid));
    }
}
