//! Display functions for command results

use super::formatters::{accuracy_bar, face_label};
use crate::commands::{AutoplayResult, BenchmarkResult};
use colored::Colorize;

/// Print the record of an automated game
pub fn print_autoplay_result(result: &AutoplayResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Autoplay: {} tiles ({} pairs)",
        result.board_len.to_string().bright_yellow().bold(),
        result.pairs
    );
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        for (i, turn) in result.turns.iter().enumerate() {
            let outcome = if turn.matched {
                "match".green().bold()
            } else {
                "miss".bright_black()
            };
            println!(
                "Turn {:>3}: {} at {:>3} vs {} at {:>3}  {}",
                i + 1,
                face_label(turn.first_face),
                turn.first,
                face_label(turn.second_face),
                turn.second,
                outcome
            );
        }
    }

    println!();
    let attempts = result.attempts();
    if result.completed {
        println!(
            "{}",
            format!("✅ Cleared the board in {attempts} guesses!")
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Turn limit reached after {attempts} guesses")
                .red()
                .bold()
        );
    }

    if attempts > 0 {
        let accuracy = (result.matches() as f64 / attempts as f64) * 100.0;
        let bar = accuracy_bar(result.matches(), attempts, 30);
        println!(
            "   Accuracy: [{}] {}",
            bar.green(),
            format!("{accuracy:.1}%").bright_yellow()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!("   Board size:       {} tiles", result.board_len);
    println!("   Completed:        {}", result.completed);
    println!(
        "   Average attempts: {}",
        format!("{:.2}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best game:        {}",
        format!("{}", result.min_attempts).green()
    );
    println!(
        "   Worst game:       {}",
        format!("{}", result.max_attempts).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut attempt_counts: Vec<usize> = result.distribution.keys().copied().collect();
    attempt_counts.sort_unstable();

    for attempts in attempt_counts {
        let count = result.distribution[&attempts];
        let pct = (count as f64 / result.games as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {attempts:>4}: {bar} {count:4} ({pct:5.1}%)");
    }
}
