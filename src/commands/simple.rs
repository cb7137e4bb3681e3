//! Simple interactive CLI mode
//!
//! Line-based game without TUI

use super::game_rules;
use crate::dictionary::DictionaryChecker;
use crate::engine::GameEngine;
use crate::output::{print_round_header, print_rules, print_submission, print_used_words};
use crate::wordlists::RootWordSource;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// Plain input is submitted as a word; lines starting with ':' are commands.
/// End of input quits.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing the prompt.
pub fn run_simple<D, R>(engine: &mut GameEngine<D, R>) -> Result<(), String>
where
    D: DictionaryChecker,
    R: RootWordSource,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Scramble - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make as many words as you can from the letters of the root word.");
    println!("Commands: ':new' for a new word, ':words' to list your words,");
    println!("          ':rules' for scoring, ':quit' to exit\n");

    if engine.round() == 0 {
        engine.start_new_round();
    }
    print_round_header(&engine.snapshot());

    loop {
        let Some(input) = get_user_input("Your word")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => {
                println!("\n👋 Final score: {}. Thanks for playing!\n", engine.total_score());
                return Ok(());
            }
            ":new" | ":n" => {
                engine.start_new_round();
                print_round_header(&engine.snapshot());
            }
            ":words" | ":w" => print_used_words(&engine.snapshot()),
            ":rules" | ":r" => print_rules(&game_rules()),
            _ => {
                let result = engine.submit(&input);
                print_submission(&input, result, engine.round_score(), engine.total_score());
            }
        }
    }
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
