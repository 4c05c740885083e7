//! Script Commands
//!
//! Parses the line-oriented command scripts replayed by the binary.
//!
//! ```text
//! # comment
//! put A Hello
//! put None value
//! get A
//! print
//! dump
//! len
//! ```

use std::str::FromStr;

use crate::error::{CacheError, Result};

/// Token standing for an absent key or value.
pub const ABSENT: &str = "None";

// == Command ==
/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Store a value; either side may be absent
    Put {
        key: Option<String>,
        value: Option<String>,
    },
    /// Read a value
    Get { key: Option<String> },
    /// Print the contents sorted by key
    Print,
    /// Print the snapshot as JSON
    Dump,
    /// Print the number of entries
    Len,
}

impl Command {
    /// Parses a script line.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for Command {
    type Err = CacheError;

    fn from_str(line: &str) -> Result<Self> {
        let (verb, rest) = split_token(line.trim());

        match verb.to_ascii_lowercase().as_str() {
            "put" => {
                let (key, value) = split_token(rest);
                if key.is_empty() || value.is_empty() {
                    return Err(CacheError::InvalidCommand(
                        "usage: put <key> <value>".to_string(),
                    ));
                }
                Ok(Command::Put {
                    key: operand(key),
                    value: operand(value),
                })
            }
            "get" => {
                let (key, extra) = split_token(rest);
                if key.is_empty() || !extra.is_empty() {
                    return Err(CacheError::InvalidCommand("usage: get <key>".to_string()));
                }
                Ok(Command::Get { key: operand(key) })
            }
            "print" | "dump" | "len" if !rest.is_empty() => Err(CacheError::InvalidCommand(
                format!("'{}' takes no arguments", verb),
            )),
            "print" => Ok(Command::Print),
            "dump" => Ok(Command::Dump),
            "len" => Ok(Command::Len),
            _ => Err(CacheError::InvalidCommand(format!(
                "unknown command '{}'",
                verb
            ))),
        }
    }
}

// Splits off the first whitespace-delimited token; the remainder keeps inner spaces.
fn split_token(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (input, ""),
    }
}

fn operand(token: &str) -> Option<String> {
    if token == ABSENT {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_put() {
        let cmd: Command = "put A Hello".parse().unwrap();
        assert_eq!(
            cmd,
            Command::Put {
                key: Some("A".to_string()),
                value: Some("Hello".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_put_value_with_spaces() {
        let cmd: Command = "PUT  greeting   Hello   World ".parse().unwrap();
        assert_eq!(
            cmd,
            Command::Put {
                key: Some("greeting".to_string()),
                value: Some("Hello   World".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_absent_operands() {
        assert_eq!(
            "put None x".parse::<Command>().unwrap(),
            Command::Put {
                key: None,
                value: Some("x".to_string()),
            }
        );
        assert_eq!(
            "put k None".parse::<Command>().unwrap(),
            Command::Put {
                key: Some("k".to_string()),
                value: None,
            }
        );
        assert_eq!(
            "get None".parse::<Command>().unwrap(),
            Command::Get { key: None }
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("print".parse::<Command>().unwrap(), Command::Print);
        assert_eq!("dump".parse::<Command>().unwrap(), Command::Dump);
        assert_eq!("len".parse::<Command>().unwrap(), Command::Len);
    }

    #[test]
    fn test_parse_skips_blank_and_comments() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("# put A B").unwrap(), None);
    }

    #[test]
    fn test_parse_invalid() {
        for line in ["put", "put A", "get", "get A B", "print now", "delete A"] {
            let result = line.parse::<Command>();
            assert!(
                matches!(result, Err(CacheError::InvalidCommand(_))),
                "expected '{}' to be rejected",
                line
            );
        }
    }
}
