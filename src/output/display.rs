//! Display functions for command results

use super::formatters::{create_progress_bar, plural, round_tiles, score_summary};
use crate::commands::SimulationResult;
use crate::core::Round;
use crate::rules::{DEFAULT_MAX_COUNT, Hint, Knowledge, Mode, Rejection};
use crate::scores::ScoreRecord;
use colored::Colorize;

/// Print one played round with its hints
pub fn print_round(index: usize, round: &Round, hints: Option<&[Hint; 2]>) {
    println!(
        "  {}. {}  {}",
        (index + 1).to_string().bright_black(),
        round_tiles(round),
        round.verdict.to_emoji()
    );
    if let Some(hints) = hints {
        for hint in hints {
            println!("       💡 {}", hint.to_string().bright_white());
        }
    }
}

/// Print every round of a game so far
pub fn print_board(rounds: &[Round], hints: &[Option<[Hint; 2]>]) {
    for (i, round) in rounds.iter().enumerate() {
        print_round(i, round, hints.get(i).and_then(Option::as_ref));
    }
}

/// Print the constraint summary for a history
pub fn print_knowledge(knowledge: &Knowledge, mode: Mode) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        " {} {}",
        "KNOWLEDGE".bright_cyan().bold(),
        format!("({mode} mode)").bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    let fixed: Vec<char> = (0..crate::core::LENGTH)
        .map(|pos| {
            knowledge
                .green_at(pos)
                .map_or('_', |d| char::from(b'0' + d))
        })
        .collect();
    println!("  Fixed:    {}", fixed.iter().collect::<String>().green().bold());

    for digit in 0..10u8 {
        let min = knowledge.min_count(digit);
        let max = knowledge.max_count(digit);
        let yellow = knowledge.banned_yellow(digit);
        let all = knowledge.banned_all(digit);
        if min == 0 && max == DEFAULT_MAX_COUNT && all.is_empty() {
            continue;
        }

        let mut line = format!("  Digit {digit}:  ");
        if knowledge.is_excluded(digit) {
            line.push_str(&"absent".bright_black().to_string());
        } else {
            line.push_str(&format!("{min}..={max} copies"));
        }
        if !yellow.is_empty() {
            line.push_str(&format!(", not at {yellow}"));
        }
        if all != yellow {
            line.push_str(&format!(", ruled out at {all}"));
        }
        println!("{line}");
    }
}

/// Print whether a candidate passed validation and how many secrets remain
pub fn print_check_result(candidate: &str, result: Result<(), Rejection>, remaining: usize) {
    println!(
        "  Possible:  {} {}",
        remaining.to_string().bright_yellow().bold(),
        plural(remaining as u32, "secret", "secrets")
    );
    println!();
    match result {
        Ok(()) => println!(
            "{} {}",
            "✅".green(),
            format!("{candidate} is allowed").green().bold()
        ),
        Err(rejection) => {
            println!("{} {}", "❌".red(), format!("{candidate} is rejected").red().bold());
            println!("   {rejection}");
        }
    }
}

/// Print last result and trailing average
pub fn print_scores(record: &ScoreRecord) {
    println!("\n🏆 {}", score_summary(record).bright_yellow());
    if !record.is_empty() {
        println!("   Games recorded: {}", record.len());
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}",
        "SIMULATION RESULTS".bright_cyan().bold(),
        format!("({} mode)", result.mode).bright_black()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Won:              {} ({:.1}%)",
        result.won.to_string().green(),
        result.win_rate() * 100.0
    );
    println!("   Lost:             {}", result.lost.to_string().yellow());
    println!("   Stuck:            {}", result.stuck.to_string().red());
    match result.average_tries {
        Some(avg) => println!(
            "   Average tries:    {}",
            format!("{avg:.2}").bright_yellow().bold()
        ),
        None => println!("   Average tries:    --"),
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.won == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for tries in 1..=crate::game::MAX_ROUNDS {
        let count = result.distribution.get(&tries).copied().unwrap_or(0);
        let pct = count as f64 / result.games as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {tries}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
