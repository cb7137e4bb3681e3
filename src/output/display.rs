//! Display functions for game state and command results

use super::formatters::{length_badge, result_message};
use crate::commands::{GameRules, HintsResult};
use crate::engine::{RoundState, SubmissionResult};
use colored::Colorize;

/// Print the root word and scores at the start of a round
pub fn print_round_header(state: &RoundState) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Round {}: {}",
        state.round,
        state.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
    println!(
        "This word: {}   Total: {}\n",
        state.round_score.to_string().bright_cyan(),
        state.total_score.to_string().bright_cyan().bold()
    );
}

/// Print the outcome of one submission
pub fn print_submission(word: &str, result: SubmissionResult, round_score: u32, total_score: u32) {
    let Some((title, message)) = result_message(result) else {
        return;
    };

    if let SubmissionResult::Accepted(points) = result {
        println!(
            "  {} {} {}   This word: {}   Total: {}\n",
            "✓".green().bold(),
            word.trim().to_lowercase().bright_white().bold(),
            format!("+{points}").green(),
            round_score,
            total_score.to_string().bold()
        );
    } else {
        println!("  {} {} {}\n", "✗".red().bold(), title.red().bold(), message);
    }
}

/// Print the words accepted this round, most recent first
pub fn print_used_words(state: &RoundState) {
    if state.used_words.is_empty() {
        println!("  No words yet.\n");
        return;
    }

    println!("\n  Your words ({}):", state.used_words.len());
    for word in state.used_words_recent_first() {
        println!("    • {word:<12} {}", length_badge(word).bright_black());
    }
    println!();
}

/// Print the scoring legend and what gets a word rejected
pub fn print_rules(rules: &GameRules) {
    println!("\n{}", "Scoring based on word length".bright_cyan().bold());
    for line in &rules.scoring {
        println!("  {line}");
    }

    println!("\n{}", "Words that score nothing".bright_cyan().bold());
    for (title, message) in &rules.rejections {
        println!("  {} {message}", format!("{title}:").yellow());
    }
    println!();
}

/// Print the result of the hints command
pub fn print_hints(result: &HintsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "HINTS FOR".bright_cyan().bold(),
        result.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.hints.is_empty() {
        println!("\nNo scoring words found.");
        return;
    }

    println!();
    for hint in &result.hints {
        println!(
            "   {:<12} {}",
            hint.word,
            format!("{:>2} pts", hint.points).green()
        );
    }

    println!(
        "\n📊 {} words, {} points available",
        result.hints.len(),
        result.max_score.to_string().bright_yellow().bold()
    );
}
