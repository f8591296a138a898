//! CLI draw poker example.
//!
//! Set `RUST_LOG=drawrs=debug` to watch the engine's decisions on stderr.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use drawrs::{Card, Game, GameOptions, GameState, Outcome, Player, Seat, Suit};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Draw poker CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let mut game = Game::new(options, seed);

    loop {
        if let Err(err) = game.start() {
            println!("Start error: {err}");
            break;
        }

        while let GameState::InProgress { turn } = game.state() {
            print_table(&game, turn);

            let Some(indices) = prompt_indices(&format!(
                "Positions to discard (up to {}, blank to stand pat): ",
                options.max_discards
            )) else {
                println!("Goodbye.");
                return;
            };

            let opponent_pile = pile_len(&game, Seat::Computer);
            if let Err(err) = game.discard(Seat::Human, &indices) {
                println!("Discard error: {err}");
                continue;
            }

            if let Some(human) = game.player(Seat::Human) {
                print_change("You", human, !indices.is_empty());
            }
            if let Some(computer) = game
                .player(Seat::Computer)
                .filter(|_| game.state().is_in_progress())
            {
                print_change(
                    "Opponent",
                    computer,
                    pile_len(&game, Seat::Computer) != opponent_pile,
                );
            }
        }

        if let Some(result) = game.result() {
            print_final(&game);
            match result.outcome {
                Outcome::Winner(Seat::Human) => println!("{}", colorize("You win!", "32")),
                Outcome::Winner(Seat::Computer) => println!("{}", colorize("Opponent wins.", "31")),
                Outcome::Draw => println!("Draw."),
            }
        }

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" => game.reset(),
            _ => {
                println!("Goodbye.");
                break;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_indices(prompt: &str) -> Option<Vec<usize>> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        let parsed: Result<Vec<usize>, _> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect();
        match parsed {
            Ok(indices) => return Some(indices),
            Err(_) => println!("Please enter positions such as '0 3 4'."),
        }
    }
}

fn print_table(game: &Game, turn: u8) {
    println!("\nTurn {turn}/{}", game.options().max_turns);
    let Some(human) = game.player(Seat::Human) else {
        return;
    };
    println!("Draw pile: {} cards remaining", human.draw_pile().len());
    for (index, card) in human.hand().iter().enumerate() {
        println!("  [{index}] {}", format_card(card));
    }
    println!("Your hand: {}\n", human.score());
}

fn pile_len(game: &Game, seat: Seat) -> usize {
    game.player(seat).map_or(0, |player| player.draw_pile().len())
}

fn print_change(label: &str, player: &Player, exchanged: bool) {
    let change = player.last_change();
    if !exchanged || change.is_empty() {
        println!("{label} kept every card.");
        return;
    }
    println!(
        "{label} swapped {} for {}.",
        format_cards(&change.discarded),
        format_cards(&change.drawn)
    );
}

fn print_final(game: &Game) {
    println!();
    for seat in Seat::ALL {
        if let Some(player) = game.player(seat) {
            println!(
                "{:<9} {} | {}",
                seat.name(),
                format_cards(player.hand()),
                player.score()
            );
        }
    }
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(none)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.value() {
        14 => "A".to_string(),
        13 => "K".to_string(),
        12 => "Q".to_string(),
        11 => "J".to_string(),
        value => value.to_string(),
    };

    colorize(&format!("{rank}{suit}"), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
