use std::io;

use hoops::config::Rules;
use hoops::dice::RandomRoller;
use hoops::terminal::Terminal;
use hoops::tournament::Tournament;

fn run() -> hoops::Result<()> {
    let rules = Rules::default();
    let stdin = io::stdin();
    let mut term = Terminal::new(stdin.lock(), io::stdout().lock(), &rules);
    let mut roller = RandomRoller::new(rand::thread_rng());

    let mut tournament = Tournament::enter_names(&mut term, rules)?;
    tournament.play(&mut roller, &mut term)?;
    term.line("\nThanks for playing!")?;
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Basketball tournament starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
    }
}
