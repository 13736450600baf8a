//! Players taking part in a session

use std::fmt;

use serde::Serialize;

use super::Token;

/// A named participant and the token they play.
///
/// Players are fixed for the lifetime of a session; a restart reuses them.
/// They are only built by a session, after its config has been validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Player {
    name: String,
    token: Token,
}

impl Player {
    pub(crate) fn new(name: impl Into<String>, token: Token) -> Self {
        Player {
            name: name.into(),
            token,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn token(&self) -> Token {
        self.token
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.token)
    }
}
