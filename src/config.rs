//! Game rules and presentation settings.
//!
//! All values are fixed at build time; the binary always plays with
//! `Rules::default()`.

use serde::{Deserialize, Serialize};

/// Quarters per game
pub const MAX_ROUNDS: u32 = 4;
/// Quarter after which the halftime report is shown
pub const HALFTIME_AFTER: u32 = 2;
/// Percent chance that a dunk gets blocked
pub const STEAL_CHANCE: u32 = 25;
/// Games per tournament
pub const TOURNAMENT_ROUNDS: u32 = 3;
/// Longest player name kept, in characters
pub const NAME_MAX_LEN: usize = 19;
pub const ANIMATION_DOTS: usize = 3;
pub const DOT_DELAY_MS: u64 = 400;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub quarters: u32,
    pub halftime_after: u32,
    pub steal_chance: u32,
    pub tournament_rounds: u32,
    pub name_max_len: usize,

    // === Presentation ===
    pub animation_dots: usize,
    pub dot_delay_ms: u64,
    /// Clear the screen before each header
    pub clear_screen: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            quarters: MAX_ROUNDS,
            halftime_after: HALFTIME_AFTER,
            steal_chance: STEAL_CHANCE,
            tournament_rounds: TOURNAMENT_ROUNDS,
            name_max_len: NAME_MAX_LEN,
            animation_dots: ANIMATION_DOTS,
            dot_delay_ms: DOT_DELAY_MS,
            clear_screen: true,
        }
    }
}

impl Rules {
    /// Same rules with no screen clearing, for capturing output
    pub fn headless() -> Self {
        Self {
            clear_screen: false,
            ..Self::default()
        }
    }

    pub fn dot_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.dot_delay_ms)
    }
}
