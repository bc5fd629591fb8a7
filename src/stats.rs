use std::io::{BufRead, Write};

use crate::player::Player;
use crate::terminal::Terminal;

/// Render a player's score and shooting. Takes a snapshot so it cannot
/// touch the live game state.
pub fn stat_lines(snapshot: Player) -> Vec<String> {
    let mut lines = vec![
        format!("\n{}'s Stats:", snapshot.name),
        format!("Total Score: {}", snapshot.score),
    ];
    for (shot, count) in snapshot.shots.iter() {
        if let Some(pct) = count.percentage() {
            lines.push(format!(
                "{}: {}/{} ({}%)",
                shot.stats_label(),
                count.makes(),
                count.attempts(),
                pct
            ));
        }
    }
    lines
}

pub fn print_stats<I: BufRead, W: Write>(
    term: &mut Terminal<I, W>,
    snapshot: Player,
) -> std::io::Result<()> {
    for line in stat_lines(snapshot) {
        term.line(&line)?;
    }
    Ok(())
}
