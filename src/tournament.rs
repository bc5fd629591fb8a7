use std::io::{BufRead, Write};

use crate::config::Rules;
use crate::dice::Roller;
use crate::game::{GameReport, MatchEngine};
use crate::player::Player;
use crate::terminal::Terminal;
use crate::{GameResult, Result, Seat};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentReport {
    /// Decided on wins; `Tie` when both players won as many games
    pub champion: GameResult,
    pub games: Vec<GameReport>,
}

/// A fixed run of games between the same two players.
pub struct Tournament {
    pub players: [Player; 2],
    rules: Rules,
}

impl Tournament {
    pub fn new(first: Player, second: Player, rules: Rules) -> Self {
        Self {
            players: [first, second],
            rules,
        }
    }

    /// Ask both players for their names. End of input leaves a name empty.
    pub fn enter_names<I: BufRead, W: Write>(
        term: &mut Terminal<I, W>,
        rules: Rules,
    ) -> Result<Self> {
        term.header()?;
        let first = term.prompt("Enter Player 1 name: ")?.unwrap_or_default();
        let second = term.prompt("Enter Player 2 name: ")?.unwrap_or_default();
        Ok(Self::new(
            Player::with_name_limit(&first, rules.name_max_len),
            Player::with_name_limit(&second, rules.name_max_len),
            rules,
        ))
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.number() - 1]
    }

    /// Play every round back to back and announce the champion.
    pub fn play<R: Roller, I: BufRead, W: Write>(
        &mut self,
        roller: &mut R,
        term: &mut Terminal<I, W>,
    ) -> Result<TournamentReport> {
        let mut games = Vec::with_capacity(self.rules.tournament_rounds as usize);
        for round in 1..=self.rules.tournament_rounds {
            let [first, second] = &mut self.players;
            term.header()?;
            term.line(&format!("====== TOURNAMENT ROUND {} ======", round))?;
            term.line(&format!("{} vs {}", first.name, second.name))?;
            term.line(&format!(
                "Current Wins: {} ({}) - {} ({})",
                first.name, first.wins, second.name, second.wins
            ))?;
            term.pause("Press Enter to start the game...")?;

            log::info!("tournament round {} of {}", round, self.rules.tournament_rounds);
            let report = MatchEngine::new(&self.rules, roller, term).play_game(first, second)?;
            games.push(report);
        }

        let [first, second] = &self.players;
        term.header()?;
        term.line("===== TOURNAMENT FINAL RESULTS =====")?;
        term.line(&format!("{}: {} wins", first.name, first.wins))?;
        term.line(&format!("{}: {} wins", second.name, second.wins))?;

        let champion = GameResult::compare(first.wins, second.wins);
        match champion {
            GameResult::Winner(seat) => {
                let name = &self.player(seat).name;
                log::info!("{} is the tournament champion", name);
                term.line(&format!("\n{} IS THE TOURNAMENT CHAMPION!", name))?;
            }
            GameResult::Tie => {
                log::info!("tournament tied at {} wins each", first.wins);
                term.line("\nTHE TOURNAMENT ENDS IN A TIE!")?;
            }
        }

        Ok(TournamentReport { champion, games })
    }
}
