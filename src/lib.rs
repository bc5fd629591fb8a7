use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotType {
    Layup,
    MidRange,
    ThreePointer,
    /// Only shot the defender can block
    Dunk,
}

impl std::fmt::Display for ShotType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ShotType::Layup => "Layup",
            ShotType::MidRange => "Mid-range",
            ShotType::ThreePointer => "Three-pointer",
            ShotType::Dunk => "Dunk",
        };
        write!(f, "{}", s)
    }
}

impl ShotType {
    pub const ALL: [ShotType; 4] = [
        ShotType::Layup,
        ShotType::MidRange,
        ShotType::ThreePointer,
        ShotType::Dunk,
    ];

    /// Chance of the shot going in, in percent
    pub fn success_chance(self) -> u32 {
        match self {
            ShotType::Layup => 85,
            ShotType::MidRange => 65,
            ShotType::ThreePointer => 45,
            ShotType::Dunk => 70,
        }
    }

    pub fn points(self) -> u32 {
        match self {
            ShotType::Layup => 1,
            ShotType::MidRange => 2,
            ShotType::ThreePointer => 3,
            ShotType::Dunk => 2,
        }
    }

    pub fn blockable(self) -> bool {
        self == ShotType::Dunk
    }

    /// Number shown in the shot menu
    pub fn menu_number(self) -> u32 {
        self.index() as u32 + 1
    }

    pub fn from_menu_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(ShotType::Layup),
            2 => Some(ShotType::MidRange),
            3 => Some(ShotType::ThreePointer),
            4 => Some(ShotType::Dunk),
            _ => None,
        }
    }

    /// Parse a shot selection line. Only the leading integer counts; anything
    /// after it on the line is ignored.
    pub fn from_choice(line: &str) -> Result<Self> {
        let trimmed = line.trim_start();
        let sign_len = usize::from(trimmed.starts_with(['+', '-']));
        let digits = trimmed[sign_len..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits == 0 {
            return Err(Error::NotANumber(line.trim_end().to_string()));
        }
        let token = &trimmed[..sign_len + digits];
        // Overlong digit runs are out of range rather than unparsable.
        let n = token.parse::<i64>().unwrap_or(i64::MAX);
        Self::from_menu_number(n).ok_or(Error::OutOfRange(n))
    }

    pub fn index(self) -> usize {
        match self {
            ShotType::Layup => 0,
            ShotType::MidRange => 1,
            ShotType::ThreePointer => 2,
            ShotType::Dunk => 3,
        }
    }

    /// Label used in the stats report
    pub fn stats_label(self) -> &'static str {
        match self {
            ShotType::Layup => "Layups",
            ShotType::MidRange => "Mid-range",
            ShotType::ThreePointer => "3-pointers",
            ShotType::Dunk => "Dunks",
        }
    }

    /// Label printed while the ball is in the air
    pub fn call(self) -> &'static str {
        match self {
            ShotType::Layup => "Layup",
            ShotType::MidRange => "Mid-range shot",
            ShotType::ThreePointer => "Three-pointer",
            ShotType::Dunk => "Dunk attempt",
        }
    }

    /// Menu line, e.g. `2. Mid-range (2pts, 65%)`
    pub fn menu_line(self) -> String {
        let pts = if self.points() == 1 { "pt" } else { "pts" };
        let extra = if self.blockable() { ", can be blocked" } else { "" };
        format!(
            "{}. {} ({}{}, {}%{})",
            self.menu_number(),
            self,
            self.points(),
            pts,
            self.success_chance(),
            extra
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotCount {
    attempts: u32,
    makes: u32,
}

impl ShotCount {
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn makes(&self) -> u32 {
        self.makes
    }

    /// Record one attempt, and a make along with it if it went in. This is the
    /// only way counters move, so makes never exceed attempts.
    pub fn record(&mut self, made: bool) {
        self.attempts += 1;
        if made {
            self.makes += 1;
        }
    }

    /// Truncated make percentage, `None` when nothing was attempted
    pub fn percentage(&self) -> Option<u32> {
        if self.attempts == 0 {
            None
        } else {
            Some(self.makes * 100 / self.attempts)
        }
    }
}

/// Attempts and makes keyed by shot type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotTable {
    counts: [ShotCount; 4],
}

impl ShotTable {
    pub fn record(&mut self, shot: ShotType, made: bool) {
        self.counts[shot.index()].record(made);
    }

    pub fn clear(&mut self) {
        self.counts = [ShotCount::default(); 4];
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShotType, ShotCount)> + '_ {
        ShotType::ALL.iter().map(move |&s| (s, self[s]))
    }

    pub fn total_attempts(&self) -> u32 {
        self.counts.iter().map(|c| c.attempts).sum()
    }
}

impl std::ops::Index<ShotType> for ShotTable {
    type Output = ShotCount;

    fn index(&self, shot: ShotType) -> &ShotCount {
        &self.counts[shot.index()]
    }
}

/// Which of the two players, in turn order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn number(self) -> usize {
        match self {
            Seat::First => 1,
            Seat::Second => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Winner(Seat),
    Tie,
}

impl GameResult {
    /// Strictly more wins the game (or tournament); equal totals tie.
    pub fn compare(first: u32, second: u32) -> Self {
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(Seat::First),
            std::cmp::Ordering::Less => GameResult::Winner(Seat::Second),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }
}

pub mod config;
pub mod dice;
pub mod error;
pub mod game;
pub mod player;
pub mod stats;
pub mod terminal;
pub mod tournament;

pub use error::{Error, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_round_trip() {
        for shot in ShotType::ALL {
            assert_eq!(
                ShotType::from_menu_number(shot.menu_number() as i64),
                Some(shot)
            );
        }
        assert_eq!(ShotType::from_menu_number(0), None);
        assert_eq!(ShotType::from_menu_number(5), None);
    }

    #[test]
    fn choice_uses_leading_integer() {
        assert_eq!(ShotType::from_choice("3\n").unwrap(), ShotType::ThreePointer);
        assert_eq!(ShotType::from_choice("  2 and more").unwrap(), ShotType::MidRange);
        assert_eq!(ShotType::from_choice("4abc").unwrap(), ShotType::Dunk);
        assert_eq!(ShotType::from_choice("+1").unwrap(), ShotType::Layup);
    }

    #[test]
    fn bad_choices_are_rejected() {
        assert!(matches!(ShotType::from_choice("9"), Err(Error::OutOfRange(9))));
        assert!(matches!(ShotType::from_choice("0"), Err(Error::OutOfRange(0))));
        assert!(matches!(ShotType::from_choice("-1"), Err(Error::OutOfRange(-1))));
        assert!(matches!(ShotType::from_choice("dunk"), Err(Error::NotANumber(_))));
        assert!(matches!(ShotType::from_choice(""), Err(Error::NotANumber(_))));
        assert!(matches!(ShotType::from_choice("-"), Err(Error::NotANumber(_))));
        assert!(matches!(
            ShotType::from_choice("99999999999999999999999"),
            Err(Error::OutOfRange(_))
        ));
    }

    #[test]
    fn menu_lines() {
        assert_eq!(ShotType::Layup.menu_line(), "1. Layup (1pt, 85%)");
        assert_eq!(ShotType::ThreePointer.menu_line(), "3. Three-pointer (3pts, 45%)");
        assert_eq!(
            ShotType::Dunk.menu_line(),
            "4. Dunk (2pts, 70%, can be blocked)"
        );
    }

    #[test]
    fn table_records_by_type() {
        let mut t = ShotTable::default();
        t.record(ShotType::Dunk, true);
        t.record(ShotType::Dunk, false);
        t.record(ShotType::Layup, false);
        assert_eq!(t[ShotType::Dunk].attempts(), 2);
        assert_eq!(t[ShotType::Dunk].makes(), 1);
        assert_eq!(t[ShotType::Layup].makes(), 0);
        assert_eq!(t.total_attempts(), 3);
        t.clear();
        assert_eq!(t, ShotTable::default());
    }

    #[test]
    fn compare_scores() {
        assert_eq!(GameResult::compare(5, 3), GameResult::Winner(Seat::First));
        assert_eq!(GameResult::compare(0, 1), GameResult::Winner(Seat::Second));
        assert_eq!(GameResult::compare(4, 4), GameResult::Tie);
    }

    #[test]
    fn percentage_truncates() {
        let mut c = ShotCount::default();
        assert_eq!(c.percentage(), None);
        c.record(true);
        c.record(false);
        c.record(false);
        assert_eq!(c.percentage(), Some(33));
    }
}
