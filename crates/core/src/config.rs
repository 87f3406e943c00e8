//! Session configuration

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::types::{
    DEFAULT_BOARD_SIZE, DEFAULT_TIME_LIMIT_SECS, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
    POINTS_PER_MATCH, TIME_BONUS_MULTIPLIER,
};

/// Tunables for one [`GameSession`](crate::GameSession)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Board edge length
    pub board_size: u8,
    /// Countdown per game
    pub time_limit_secs: u32,
    pub points_per_match: u32,
    /// Points per second left on the clock when the board is cleared
    pub time_bonus_multiplier: u32,
    /// Seed for the first board; later boards continue the same sequence
    pub seed: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            points_per_match: POINTS_PER_MATCH,
            time_bonus_multiplier: TIME_BONUS_MULTIPLIER,
            seed: 1,
        }
    }
}

impl SessionConfig {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Reject values the session cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::BoardSize {
                size: self.board_size,
            });
        }
        if self.time_limit_secs == 0 {
            return Err(ConfigError::TimeLimit);
        }
        Ok(())
    }
}

/// Invalid [`SessionConfig`] value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display(
        "board size {} is outside {}..={}",
        size,
        MIN_BOARD_SIZE,
        MAX_BOARD_SIZE
    )]
    BoardSize { size: u8 },
    #[display("time limit must be at least one second")]
    TimeLimit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SessionConfig::default();
        assert_eq!(config.board_size, 8);
        assert_eq!(config.time_limit_secs, 300);
        assert_eq!(config.points_per_match, 10);
        assert_eq!(config.time_bonus_multiplier, 1);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn board_size_out_of_range() {
        let mut config = SessionConfig::default();
        config.board_size = 1;
        assert_eq!(config.validate(), Err(ConfigError::BoardSize { size: 1 }));
        config.board_size = 17;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_time_limit_rejected() {
        let config = SessionConfig {
            time_limit_secs: 0,
            ..SessionConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TimeLimit));
        assert_eq!(
            ConfigError::TimeLimit.to_string(),
            "time limit must be at least one second"
        );
    }

    #[test]
    fn board_size_message_names_range() {
        let err = ConfigError::BoardSize { size: 40 };
        assert_eq!(err.to_string(), "board size 40 is outside 2..=16");
    }
}
