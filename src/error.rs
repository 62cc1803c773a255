use std::path::PathBuf;

use crate::game::Player;

/// Errors returned when a move is rejected. No seeds move when either occurs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("pit {pit} does not belong to {}", player.name())]
    WrongOwner { pit: usize, player: Player },

    #[error("pit {pit} is empty")]
    EmptyPit { pit: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_owner_display() {
        let err = MoveError::WrongOwner {
            pit: 8,
            player: Player::A,
        };
        assert_eq!(err.to_string(), "pit 8 does not belong to Player A");
    }

    #[test]
    fn test_empty_pit_display() {
        let err = MoveError::EmptyPit { pit: 3 };
        assert_eq!(err.to_string(), "pit 3 is empty");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("search.max_depth must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: search.max_depth must be >= 1"
        );
    }
}
