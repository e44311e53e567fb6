//! Game parameters and their validation.

use crate::error::ConfigError;

pub const DEFAULT_BOARD_SIZE: usize = 15;
pub const DEFAULT_WIN_LENGTH: usize = 5;
pub const MIN_BOARD_SIZE: usize = 5;
pub const MIN_WIN_LENGTH: usize = 3;

/// Size of the grid and the run length that wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub win_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            win_length: DEFAULT_WIN_LENGTH,
        }
    }
}

impl GameConfig {
    /// Builds and validates a configuration.
    pub fn new(board_size: usize, win_length: usize) -> Result<Self, ConfigError> {
        let config = GameConfig {
            board_size,
            win_length,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::InvalidConfiguration(format!(
                "board size must be >= {}, got {}",
                MIN_BOARD_SIZE, self.board_size
            )));
        }
        if self.win_length < MIN_WIN_LENGTH {
            return Err(ConfigError::InvalidConfiguration(format!(
                "win length must be >= {}, got {}",
                MIN_WIN_LENGTH, self.win_length
            )));
        }
        if self.win_length > self.board_size {
            return Err(ConfigError::InvalidConfiguration(format!(
                "win length {} exceeds board size {}",
                self.win_length, self.board_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 15);
        assert_eq!(config.win_length, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_smallest_valid() {
        assert!(GameConfig::new(5, 3).is_ok());
        assert!(GameConfig::new(5, 5).is_ok());
    }

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(matches!(
            GameConfig::new(4, 3),
            Err(ConfigError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GameConfig::new(15, 2),
            Err(ConfigError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GameConfig::new(7, 8),
            Err(ConfigError::InvalidConfiguration(_))
        ));
    }
}
