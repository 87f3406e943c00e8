//! Scoring module - match awards and the end-of-game time bonus

use crate::config::SessionConfig;

/// Points for one matched pair
pub fn match_award(config: &SessionConfig) -> u32 {
    config.points_per_match
}

/// Bonus for clearing the board with time to spare
///
/// Saturates instead of wrapping on absurd multipliers.
pub fn time_bonus(time_left_secs: u32, multiplier: u32) -> u32 {
    time_left_secs.saturating_mul(multiplier)
}
