//! CLI high-card example.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use highcard::{ConfigError, EndReason, Game, GameOptions, GameSummary, RoundResult};
use tracing_subscriber::EnvFilter;

const REVEAL_DELAY: Duration = Duration::from_millis(400);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    println!("High-card CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let Some(mut game) = prompt_game(seed) else {
        println!("Goodbye.");
        return;
    };

    while !game.is_over() {
        match game.play_round() {
            Ok(result) => print_round(&result),
            Err(err) => {
                println!("Round error: {err}");
                return;
            }
        }
    }

    print_summary(&game.summary());
}

/// Prompts until the options describe a playable game.
fn prompt_game(seed: u64) -> Option<Game> {
    loop {
        let options = match prompt_options()? {
            Ok(options) => options,
            Err(err) => {
                println!("Invalid configuration: {err}");
                continue;
            }
        };

        match Game::new(options, seed) {
            Ok(game) => return Some(game),
            Err(err) => println!("Invalid configuration: {err}"),
        }
    }
}

fn prompt_options() -> Option<Result<GameOptions, ConfigError>> {
    let rounds = prompt_line("Enter the number of rounds: ")?;
    let players = prompt_line("Enter the number of players: ")?;
    let funds = prompt_line("Enter the starting funds for each player: ")?;

    Some(parse_options(&rounds, &players, &funds))
}

fn parse_options(rounds: &str, players: &str, funds: &str) -> Result<GameOptions, ConfigError> {
    Ok(GameOptions::default()
        .with_rounds(GameOptions::parse_field("rounds", rounds)?)
        .with_players(GameOptions::parse_field("players", players)?)
        .with_starting_funds(GameOptions::parse_field("starting funds", funds)?))
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return None,
        Ok(_) => {}
    }

    let input = input.trim().to_lowercase();
    if input == "q" || input == "quit" {
        return None;
    }
    Some(input)
}

fn print_round(result: &RoundResult) {
    println!("\nStarting round {}", result.round);

    if result.draws.is_empty() {
        println!("Nobody can cover the {} bet.", result.bet);
    }

    for draw in &result.draws {
        thread::sleep(REVEAL_DELAY);
        println!("Player {} drew {}", draw.player_id, draw.card);
    }

    if let Some(winner) = result.winner {
        println!("Player {winner} wins the pot of {}", result.pot);
    }

    for standing in result.standings.iter().filter(|s| s.in_roster) {
        println!(
            "  Player {}: score {} | funds {}",
            standing.player_id, standing.score, standing.funds
        );
    }

    for id in &result.eliminated {
        println!("Player {id} is out of funds and leaves the game.");
    }

    if result.reshuffled {
        println!("The deck was replaced and reshuffled.");
    }
}

fn print_summary(summary: &GameSummary) {
    println!();
    match summary.end {
        Some(EndReason::RosterEmpty) => println!("Every player is out of funds."),
        Some(EndReason::RoundsExhausted) | None => {
            println!("Game over after {} round(s).", summary.rounds_played);
        }
    }

    for standing in &summary.standings {
        let status = if standing.in_roster { "" } else { " (eliminated)" };
        println!(
            "Player {}: score {} | funds {}{}",
            standing.player_id, standing.score, standing.funds, status
        );
    }

    match summary.leaders.as_slice() {
        [] => println!("Nobody won a round."),
        [leader] => println!("Player {leader} wins the game!"),
        leaders => {
            let names: Vec<String> = leaders.iter().map(ToString::to_string).collect();
            println!("Tie between players {}", names.join(", "));
        }
    }
}
