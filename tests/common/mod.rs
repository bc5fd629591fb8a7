#![allow(dead_code)]

/// Script one game's worth of input: eight shot choices in turn order, with
/// the Enter presses for the halftime and final pauses slotted in.
pub fn game_input(choices: &[&str; 8]) -> String {
    let mut s = String::new();
    for (i, c) in choices.iter().enumerate() {
        s.push_str(c);
        s.push('\n');
        if i == 3 {
            s.push('\n');
        }
    }
    s.push('\n');
    s
}

/// Same choice for every turn of the first player, and for the second.
pub fn alternating(first: &'static str, second: &'static str) -> [&'static str; 8] {
    [first, second, first, second, first, second, first, second]
}

/// Names, then one Enter before each game followed by that game's input.
pub fn tournament_input(names: (&str, &str), games: &[[&str; 8]]) -> String {
    let mut s = format!("{}\n{}\n", names.0, names.1);
    for g in games {
        s.push('\n');
        s.push_str(&game_input(g));
    }
    s
}
