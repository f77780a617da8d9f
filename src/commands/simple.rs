//! Simple interactive CLI mode
//!
//! Text-based play loop without TUI

use crate::core::Board;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the board cannot be built or if there's an I/O error
/// reading user input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(max: u8) -> Result<(), String> {
    let mut board = Board::new(max).map_err(|e| e.to_string())?;
    let pairs = board.len() / 2;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Memory Lane - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "The board hides {} domino tiles ({pairs} matching pairs).",
        board.len()
    );
    println!("Pick two tile indices per turn; matches stay revealed.\n");
    println!("Commands: 'quit' to exit, 'new' for a fresh board\n");

    let mut attempts = 0_usize;

    loop {
        println!("{}\n", board.render());

        let input = get_user_input("Pick two tiles (e.g. '0 3'), 'new', or 'quit'")?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                board = Board::new(max).map_err(|e| e.to_string())?;
                attempts = 0;
                println!("\n🔄 New board dealt!\n");
                continue;
            }
            _ => {}
        }

        let picks: Vec<usize> = input
            .split_whitespace()
            .filter_map(|token| token.parse().ok())
            .collect();
        let &[i, k] = picks.as_slice() else {
            println!("❌ Enter two tile indices separated by a space\n");
            continue;
        };

        match board.guess(i, k) {
            Ok(matched) => {
                attempts += 1;

                if let Ok(faces) = board.peek(&[i, k]) {
                    println!("\n{faces}\n");
                }

                if matched {
                    println!("{}\n", "✅ Match! Those tiles stay revealed.".green().bold());
                } else {
                    println!("{}\n", "❌ No match — the tiles flip back over.".yellow());
                }
            }
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        }

        if board.game_over() {
            // Celebration banner
            println!("\n{}", "═".repeat(70).bright_cyan());
            println!(
                "{}",
                "    🎉 🎊 ✨  B O A R D   C L E A R E D !  ✨ 🎊 🎉    "
                    .bright_green()
                    .bold()
            );
            println!("{}", "═".repeat(70).bright_cyan());

            println!(
                "\n  Matched {} pairs in {} {}",
                pairs.to_string().bright_white().bold(),
                attempts.to_string().bright_cyan().bold(),
                if attempts == 1 { "guess" } else { "guesses" }
            );

            if attempts == pairs {
                println!(
                    "  {}",
                    "🏆 Perfect game — not a single wasted guess!"
                        .bright_yellow()
                        .bold()
                );
            }

            println!("\n{}", "═".repeat(70).bright_cyan());
            println!();

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    board = Board::new(max).map_err(|e| e.to_string())?;
                    attempts = 0;
                    println!("\n🔄 New board dealt!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
