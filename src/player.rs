use serde::{Deserialize, Serialize};

use crate::config::NAME_MAX_LEN;
use crate::{ShotTable, ShotType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub score: u32,
    /// Games won this tournament; never reset
    pub wins: u32,
    pub shots: ShotTable,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Self::with_name_limit(name, NAME_MAX_LEN)
    }

    /// Build a player from a raw input line: the line ending is dropped and
    /// the name cut to `max_len` characters.
    pub fn with_name_limit(name: &str, max_len: usize) -> Self {
        let name = name.trim_end_matches(['\n', '\r']);
        Self {
            name: name.chars().take(max_len).collect(),
            score: 0,
            wins: 0,
            shots: ShotTable::default(),
        }
    }

    /// Clear the per-game fields ahead of a new game.
    pub fn reset_game(&mut self) {
        self.score = 0;
        self.shots.clear();
    }

    /// Count an attempt of `shot` and return the points it earned.
    pub fn record_shot(&mut self, shot: ShotType, made: bool) -> u32 {
        self.shots.record(shot, made);
        if made {
            self.score += shot.points();
            shot.points()
        } else {
            0
        }
    }
}
