//! Session configuration

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Configuration for creating a game session.
///
/// Player one plays X and moves first; player two plays O.
///
/// # Examples
///
/// ```
/// use noughts::SessionConfig;
///
/// let config = SessionConfig::new("Ada", "Computer").with_automated(Some(1));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Display name of the first mover
    pub player_one: String,
    /// Display name of the second mover
    pub player_two: String,
    /// Index (0 or 1) of the player driven by the minimax solver
    pub automated: Option<usize>,
}

impl SessionConfig {
    /// Create a configuration for two human players.
    pub fn new(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        Self {
            player_one: player_one.into(),
            player_two: player_two.into(),
            automated: None,
        }
    }

    /// Set which player (if any) is automated.
    pub fn with_automated(mut self, automated: Option<usize>) -> Self {
        self.automated = automated;
        self
    }

    /// Load a configuration from a JSON file.
    ///
    /// Missing fields fall back to [`SessionConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid JSON.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read session config {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Check names are non-empty and the automated index names a player.
    pub fn validate(&self) -> Result<()> {
        for (index, name) in [&self.player_one, &self.player_two].iter().enumerate() {
            if name.trim().is_empty() {
                return Err(Error::InvalidPlayerName { index });
            }
        }

        match self.automated {
            Some(index) if index > 1 => Err(Error::InvalidAutomatedPlayer { index }),
            _ => Ok(()),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new("Player One", "Player Two")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SessionConfig::default();
        assert_eq!(config.automated, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_blank_names() {
        let config = SessionConfig::new("Ada", "  ");
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidPlayerName { index: 1 })
        ));
    }

    #[test]
    fn test_rejects_unknown_automated_index() {
        let config = SessionConfig::new("Ada", "Grace").with_automated(Some(2));
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidAutomatedPlayer { index: 2 })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{ "automated": 1 }"#).unwrap();
        assert_eq!(config.player_one, "Player One");
        assert_eq!(config.automated, Some(1));
    }
}
