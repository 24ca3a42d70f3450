//! Simple interactive CLI mode
//!
//! Line-based interface without the TUI: each line is either a command or a
//! text to process.

use super::{process_text, process_word, text_artifact, word_artifact, write_artifact};
use crate::output::{print_text_result, print_word_result};
use crate::resolver::ResolveOptions;
use crate::session::Session;
use crate::source::SynonymSource;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    Help,
    /// Look up a single word
    Word(String),
    /// Load a dictionary file
    Dict(String),
    /// Save the last result
    Save(String),
    /// Replace words in a text
    Text(String),
    Empty,
}

/// Parse one line of input
#[must_use]
pub fn parse_command(line: &str) -> ReplCommand {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ReplCommand::Empty;
    }

    let Some(rest) = trimmed.strip_prefix('/') else {
        return ReplCommand::Text(trimmed.to_string());
    };

    let (name, arg) = rest
        .split_once(char::is_whitespace)
        .map_or((rest, ""), |(name, arg)| (name, arg.trim()));

    match name {
        "quit" | "q" | "exit" => ReplCommand::Quit,
        "word" | "w" => ReplCommand::Word(arg.to_string()),
        "dict" | "d" => ReplCommand::Dict(arg.to_string()),
        "save" | "s" => ReplCommand::Save(arg.to_string()),
        _ => ReplCommand::Help,
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<S: SynonymSource>(
    session: &mut Session,
    source: &S,
    options: ResolveOptions,
) -> Result<()> {
    let messages = session.messages();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║{:^62}║", messages.title);
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let mut last_artifact: Option<String> = None;

    loop {
        let Some(line) = get_user_input(">")? else {
            println!();
            return Ok(());
        };

        match parse_command(&line) {
            ReplCommand::Quit => {
                println!("\n👋 Bye!\n");
                return Ok(());
            }
            ReplCommand::Help => print_help(),
            ReplCommand::Empty => {}
            ReplCommand::Dict(path) => match session.load_dictionary(&path) {
                Ok(count) => println!("{}", messages.loaded(count).green()),
                Err(e) => println!("{}: {e}", messages.dictionary_error.red()),
            },
            ReplCommand::Word(word) => match process_word(&word, session, source) {
                Ok(result) => {
                    print_word_result(&result, messages);
                    last_artifact = Some(word_artifact(&result, messages));
                }
                Err(e) => println!("❌ {}", messages.input_error(&e, true).red()),
            },
            ReplCommand::Text(text) => match process_text(&text, session, source, options) {
                Ok(result) => {
                    print_text_result(&result, messages);
                    last_artifact = text_artifact(&result).map(str::to_string);
                }
                Err(e) => println!("❌ {}", messages.input_error(&e, false).red()),
            },
            ReplCommand::Save(path) => match &last_artifact {
                Some(content) if !content.is_empty() && !path.is_empty() => {
                    match write_artifact(&path, content) {
                        Ok(()) => println!("{} {path}", messages.saved_to.green()),
                        Err(e) => println!("{}", e.to_string().red()),
                    }
                }
                _ => println!("{}", messages.nothing_to_save.yellow()),
            },
        }
        println!();
    }
}

fn print_help() {
    println!("Type a text to replace its words with synonyms, or:");
    println!("  /word <word>   show all synonyms for one word");
    println!("  /dict <path>   load a custom dictionary (JSON)");
    println!("  /save <path>   save the last result");
    println!("  /quit          exit\n");
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt} ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
}
