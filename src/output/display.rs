//! Display functions for command results

use super::formatters::{candidate_lines, join_synonyms, record_heading, warning_line};
use crate::commands::{TextResult, WordResult};
use crate::error::Warning;
use crate::i18n::Messages;
use colored::Colorize;

/// Print the result of a single-word lookup
pub fn print_word_result(result: &WordResult, messages: &Messages) {
    print_warnings(&result.warnings, messages);

    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", result.word.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if result.candidates.is_empty() {
        println!("\n{}", messages.no_synonyms.yellow());
        return;
    }

    if !result.custom_synonyms().is_empty() {
        println!(
            "\n{} {}",
            format!("{}:", messages.custom_label).bright_cyan().bold(),
            join_synonyms(result.custom_synonyms())
        );
    }
    if !result.wiki_synonyms().is_empty() {
        println!(
            "\n{} {}",
            format!("{}:", messages.external_label).bright_cyan().bold(),
            join_synonyms(result.wiki_synonyms())
        );
    }
}

/// Print the modified text followed by the replacement report
pub fn print_text_result(result: &TextResult, messages: &Messages) {
    print_warnings(&result.warnings, messages);

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", messages.modified_text.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\n{}", result.modified_text);

    if !result.has_replacements() {
        println!("\n{}", messages.no_replacements.yellow());
        return;
    }

    println!("\n📊 {}", messages.replaced_words.bright_cyan().bold());
    for record in &result.report {
        println!("\n   {}", record_heading(record, messages).green().bold());
        for line in candidate_lines(record, messages) {
            println!("     {line}");
        }
    }
}

/// Print non-fatal lookup problems
pub fn print_warnings(warnings: &[Warning], messages: &Messages) {
    for warning in warnings {
        eprintln!("{} {}", "⚠".yellow(), warning_line(warning, messages).yellow());
    }
}
