//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::game::{GameSession, GameStatus, MAX_ROUNDS};
use crate::output::formatters::{plural, score_summary};
use crate::output::{print_board, print_round, print_scores};
use crate::rules::Mode;
use crate::scores::{ScoreStore, record_win};
use colored::Colorize;
use std::io::{self, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewGame,
    GiveUp,
    Board,
    Help,
    SetMode(Mode),
    Guess(String),
}

/// Interpret a line of input
///
/// Anything that is not a known command is treated as a guess.
///
/// # Errors
/// Returns an error for `mode` with a missing or unknown argument.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let lower = line.to_lowercase();
    let mut words = lower.split_whitespace();

    let command = match words.next() {
        Some("quit" | "q" | "exit") => Command::Quit,
        Some("new" | "n") => Command::NewGame,
        Some("giveup" | "give" | "g") => Command::GiveUp,
        Some("board" | "b") => Command::Board,
        Some("help" | "h" | "?") => Command::Help,
        Some("mode" | "m") => {
            let arg = words
                .next()
                .ok_or_else(|| "Usage: mode <normal|hard|ultra>".to_string())?;
            Command::SetMode(arg.parse()?)
        }
        _ => Command::Guess(line.to_string()),
    };
    Ok(command)
}

fn print_banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Numberdle - Line Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
}

fn print_help(mode: Mode) {
    println!("Guess the 5-digit number (00000-99999) in {MAX_ROUNDS} tries.");
    println!("After each guess:\n");
    println!("  - {} right digit, right position", "green ".black().on_green());
    println!("  - {} right digit, wrong position", "yellow".black().on_yellow());
    println!("  - {} digit not in the number", " gray ".white().on_bright_black());
    println!("\nTwo hints about the number appear after every miss.");
    println!(
        "\nMode: {} - {}",
        mode.to_string().bright_cyan().bold(),
        mode.description()
    );
    println!("\nCommands: 'quit', 'new', 'giveup', 'board', 'mode <normal|hard|ultra>', 'help'\n");
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: ScoreStore + ?Sized>(mode: Mode, store: &mut S) -> io::Result<()> {
    print_banner();
    print_help(mode);
    print_scores(&store.record());
    println!();

    let mut session = GameSession::new(mode);

    loop {
        let prompt = if session.status().is_over() {
            "Play again? (new/quit)".to_string()
        } else {
            format!(
                "Guess {}/{MAX_ROUNDS} [{}]",
                session.round_index() + 1,
                session.mode()
            )
        };

        let Some(line) = get_user_input(&prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        match command {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::NewGame => {
                session = GameSession::new(session.mode());
                println!("\n🔄 New game started!\n");
            }
            Command::GiveUp => {
                if !session.status().is_over() {
                    session.give_up();
                    println!(
                        "\n🏳  The number was {}\n",
                        session.secret().to_string().bright_yellow().bold()
                    );
                }
            }
            Command::Board => print_board(session.rounds(), session.hints()),
            Command::Help => print_help(session.mode()),
            Command::SetMode(mode) => {
                session.set_mode(mode);
                println!(
                    "Mode set to {} - {}\n",
                    mode.to_string().bright_cyan(),
                    mode.description()
                );
            }
            Command::Guess(text) => match session.submit(&text) {
                Ok(turn) => {
                    print_round(turn.round_index, &turn.round, turn.hints.as_ref());
                    match turn.status {
                        GameStatus::Won { tries } => {
                            let record = record_win(store, tries as u32);
                            print_win(tries);
                            println!("  {}\n", score_summary(&record).bright_yellow());
                        }
                        GameStatus::Lost => {
                            println!(
                                "\n💀 Out of guesses! The number was {}\n",
                                session.secret().to_string().bright_yellow().bold()
                            );
                        }
                        GameStatus::InProgress | GameStatus::GaveUp => println!(),
                    }
                }
                Err(e) => println!("❌ {e}\n"),
            },
        }
    }
}

fn print_win(tries: usize) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "        🎉 🎊 ✨  N U M B E R D L E   S O L V E D !  ✨ 🎊 🎉        "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());
    println!(
        "\n  Solved in {} {}\n",
        tries.to_string().bright_cyan().bold(),
        plural(tries as u32, "guess", "guesses")
    );
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_commands() {
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command(" Q "), Ok(Command::Quit));
        assert_eq!(parse_command("new"), Ok(Command::NewGame));
        assert_eq!(parse_command("giveup"), Ok(Command::GiveUp));
        assert_eq!(parse_command("board"), Ok(Command::Board));
        assert_eq!(parse_command("?"), Ok(Command::Help));
    }

    #[test]
    fn parse_mode_command() {
        assert_eq!(parse_command("mode ultra"), Ok(Command::SetMode(Mode::Ultra)));
        assert_eq!(parse_command("m Hard"), Ok(Command::SetMode(Mode::Hard)));
        assert!(parse_command("mode").is_err());
        assert!(parse_command("mode insane").is_err());
    }

    #[test]
    fn anything_else_is_a_guess() {
        assert_eq!(
            parse_command("12345"),
            Ok(Command::Guess("12345".to_string()))
        );
        assert_eq!(
            parse_command(" 12 345 "),
            Ok(Command::Guess("12 345".to_string()))
        );
    }
}
