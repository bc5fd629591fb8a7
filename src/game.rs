use std::io::{BufRead, Write};

use crate::config::Rules;
use crate::dice::Roller;
use crate::player::Player;
use crate::stats::print_stats;
use crate::terminal::Terminal;
use crate::{Error, GameResult, Result, Seat, ShotType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Bad selection; nothing recorded
    Forfeit,
    /// Dunk stopped by the defender; nothing recorded
    Blocked,
    Scored { shot: ShotType, points: u32 },
    Missed { shot: ShotType },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub quarter: u32,
    pub seat: Seat,
    pub outcome: TurnOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub result: GameResult,
    pub turns: Vec<Turn>,
}

/// Runs single games between two players.
pub struct MatchEngine<'a, R: Roller, I: BufRead, W: Write> {
    rules: &'a Rules,
    roller: &'a mut R,
    term: &'a mut Terminal<I, W>,
}

impl<'a, R: Roller, I: BufRead, W: Write> MatchEngine<'a, R, I, W> {
    pub fn new(rules: &'a Rules, roller: &'a mut R, term: &'a mut Terminal<I, W>) -> Self {
        Self {
            rules,
            roller,
            term,
        }
    }

    /// Play one full game. Scores and shot tables are reset first; the winner,
    /// if any, gets one more win.
    pub fn play_game(&mut self, first: &mut Player, second: &mut Player) -> Result<GameReport> {
        first.reset_game();
        second.reset_game();
        let mut turns = Vec::with_capacity(self.rules.quarters as usize * 2);

        for quarter in 1..=self.rules.quarters {
            self.term.header()?;
            self.term.line(&format!("\n=== QUARTER {} ===", quarter))?;

            let outcome = self.play_turn(first, second)?;
            turns.push(Turn {
                quarter,
                seat: Seat::First,
                outcome,
            });
            let outcome = self.play_turn(second, first)?;
            turns.push(Turn {
                quarter,
                seat: Seat::Second,
                outcome,
            });

            if quarter == self.rules.halftime_after {
                self.halftime_report(first, second)?;
            }
        }

        self.term.header()?;
        self.term.line("====== GAME RESULTS ======")?;
        print_stats(self.term, first.clone())?;
        print_stats(self.term, second.clone())?;

        let result = GameResult::compare(first.score, second.score);
        match result {
            GameResult::Winner(seat) => {
                let (winner, loser) = match seat {
                    Seat::First => (&mut *first, &*second),
                    Seat::Second => (&mut *second, &*first),
                };
                winner.wins += 1;
                log::info!("{} wins {}-{}", winner.name, winner.score, loser.score);
                self.term
                    .line(&format!("\n{} WINS THIS GAME!", winner.name))?;
            }
            GameResult::Tie => {
                log::info!("game tied at {}", first.score);
                self.term.line("\nIT'S A TIE!")?;
            }
        }
        self.term.pause("Press Enter to continue...")?;

        Ok(GameReport { result, turns })
    }

    /// One shot attempt by `shooter`. `defender` only gets involved on dunks.
    pub fn play_turn(&mut self, shooter: &mut Player, defender: &Player) -> Result<TurnOutcome> {
        self.term.line(&format!(
            "\n{}'s Turn (Score: {})",
            shooter.name, shooter.score
        ))?;
        self.term.line("Choose your shot:")?;
        for shot in ShotType::ALL {
            self.term.line(&shot.menu_line())?;
        }

        let shot = match self.read_shot() {
            Ok(shot) => shot,
            Err(e) if e.is_recoverable() => {
                log::warn!("{} forfeits the turn: {}", shooter.name, e);
                self.term.line("Invalid choice! You lose your turn.")?;
                return Ok(TurnOutcome::Forfeit);
            }
            Err(e) => return Err(e),
        };

        if shot.blockable() && self.attempt_block()? {
            self.term
                .line(&format!("{} blocked the dunk!", defender.name))?;
            log::debug!("{} blocked {}", defender.name, shooter.name);
            return Ok(TurnOutcome::Blocked);
        }

        let outcome = self.resolve_shot(shot, shooter)?;
        log::debug!("{}: {:?}", shooter.name, outcome);
        Ok(outcome)
    }

    /// Attempt `shot` for `shooter`, recording the attempt and any make.
    pub fn resolve_shot(&mut self, shot: ShotType, shooter: &mut Player) -> Result<TurnOutcome> {
        self.term.animate(shot.call())?;
        let made = self.roller.chance(shot.success_chance());
        let points = shooter.record_shot(shot, made);
        if made {
            self.term.line(&format!(" SWISH! +{} points!", points))?;
            Ok(TurnOutcome::Scored { shot, points })
        } else {
            self.term.line(" CLANK! Missed!")?;
            Ok(TurnOutcome::Missed { shot })
        }
    }

    fn attempt_block(&mut self) -> Result<bool> {
        if !self.roller.chance(self.rules.steal_chance) {
            return Ok(false);
        }
        self.term.print("DEFENSIVE PLAY! ")?;
        self.term.animate("Stealing the ball")?;
        self.term.line(" STOLEN!")?;
        Ok(true)
    }

    /// Prompt for a selection. Blank lines are skipped; the rest of the line
    /// after the number is dropped along with it.
    fn read_shot(&mut self) -> Result<ShotType> {
        self.term.print("Selection: ")?;
        loop {
            match self.term.read_line()? {
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => return ShotType::from_choice(&line),
                None => return Err(Error::NotANumber(String::new())),
            }
        }
    }

    fn halftime_report(&mut self, first: &Player, second: &Player) -> Result<()> {
        self.term.header()?;
        self.term.line("======= HALFTIME REPORT =======")?;
        print_stats(self.term, first.clone())?;
        print_stats(self.term, second.clone())?;
        self.term.pause("Press Enter to continue...")?;
        Ok(())
    }
}
