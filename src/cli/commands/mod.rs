//! Subcommands of the `tictactoe` binary

pub mod play;
pub mod solve;

use anyhow::{Result, anyhow};

use crate::tictactoe::Token;

/// Parse a token flag value (`x` or `o`)
pub(crate) fn parse_token(value: &str, flag: &str) -> Result<Token> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "player1" | "p1" => Ok(Token::X),
        "o" | "second" | "player2" | "p2" => Ok(Token::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

/// Parse which player the solver drives (`one`, `two` or `none`)
pub(crate) fn parse_automated(value: &str) -> Result<Option<usize>> {
    match value.trim().to_ascii_lowercase().as_str() {
        "none" | "off" => Ok(None),
        "one" | "1" | "x" | "first" => Ok(Some(0)),
        "two" | "2" | "o" | "second" => Ok(Some(1)),
        other => Err(anyhow!(
            "Invalid value '{other}' for --automated (expected 'one', 'two' or 'none')"
        )),
    }
}
