//! Synonym Replacer - CLI
//!
//! Synonym lookup and replacement with TUI and CLI modes, using a custom
//! dictionary and live Wiktionary lookups.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use synonym_replacer::{
    commands::{
        process_text_with_progress, process_word, replaceable_word_count, run_simple,
        text_artifact, word_artifact, write_artifact,
    },
    i18n::Locale,
    output::{print_text_result, print_word_result},
    resolver::ResolveOptions,
    session::Session,
    source::{DEFAULT_ENDPOINT, SourceType},
};
use tracing_subscriber::EnvFilter;

/// Log filter when `RUST_LOG` is unset
///
/// Failed lookups already reach the user as printed warnings.
const DEFAULT_LOG_FILTER: &str = "synonym_replacer=error";

#[derive(Parser)]
#[command(
    name = "synonym_replacer",
    about = "Replace words with synonyms from a custom dictionary and Wiktionary",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Custom dictionary: JSON object mapping words to lists of synonyms
    #[arg(short = 'd', long, global = true, env = "SYNONYM_DICT")]
    dict: Option<PathBuf>,

    /// Language code of the Wiktionary synonym templates ({{syn|<lang>|...}})
    #[arg(short = 'l', long, global = true, env = "SYNONYM_LANG", default_value = "uk")]
    lang: String,

    /// Interface language: 'en' (default) or 'uk'
    #[arg(long, global = true, default_value = "en")]
    locale: Locale,

    /// Synonym source: 'wiktionary' (default) or 'offline'
    #[arg(short, long, global = true, default_value = "wiktionary")]
    source: String,

    /// MediaWiki API endpoint
    #[arg(long, global = true, env = "SYNONYM_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Look up each distinct word only once per text
    #[arg(long, global = true)]
    cache: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive prompt without TUI)
    Simple,

    /// Show all synonyms for a single word
    Word {
        /// The word to look up
        word: String,

        /// Save the synonym lists to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace every word in a text with its first synonym
    Text {
        /// Text to process (reads stdin if neither this nor --file is given)
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Save the modified text to a file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so only log to stderr in line-based modes
    if !matches!(command, Commands::Play) {
        init_logging();
    }

    let mut session = Session::new(cli.lang.clone(), cli.locale);
    if let Some(path) = &cli.dict {
        load_dictionary(&mut session, path);
    }

    let source = SourceType::from_name(&cli.source, &cli.endpoint, &cli.lang)
        .context("cannot set up synonym source")?;
    let options = ResolveOptions {
        cache_lookups: cli.cache,
    };

    match command {
        Commands::Play => run_play_command(session, &source, options),
        Commands::Simple => run_simple(&mut session, &source, options),
        Commands::Word { word, output } => {
            run_word_command(&word, output.as_deref(), &session, &source)
        }
        Commands::Text {
            text,
            file,
            output,
            no_progress,
        } => {
            let text = read_text(text, file.as_deref())?;
            run_text_command(
                &text,
                output.as_deref(),
                !no_progress,
                &session,
                &source,
                options,
            )
        }
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Load the startup dictionary; failure is reported but not fatal
fn load_dictionary(session: &mut Session, path: &Path) {
    let messages = session.messages();
    match session.load_dictionary(path) {
        Ok(count) => eprintln!("{}", messages.loaded(count).green()),
        Err(e) => eprintln!("{}: {e}", messages.dictionary_error.red()),
    }
}

fn read_text(text: Option<String>, file: Option<&Path>) -> Result<String> {
    match (text, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display())),
        (None, None) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("cannot read stdin")?;
            Ok(buffer)
        }
    }
}

fn run_word_command(
    word: &str,
    output: Option<&Path>,
    session: &Session,
    source: &SourceType,
) -> Result<()> {
    let messages = session.messages();
    let result = process_word(word, session, source)
        .map_err(|e| anyhow::anyhow!(messages.input_error(&e, true)))?;

    print_word_result(&result, messages);

    if let Some(path) = output {
        let artifact = word_artifact(&result, messages);
        if artifact.is_empty() {
            println!("\n{}", messages.nothing_to_save.yellow());
        } else {
            write_artifact(path, &artifact)?;
            println!("\n{} {}", messages.saved_to.green(), path.display());
        }
    }
    Ok(())
}

fn run_text_command(
    text: &str,
    output: Option<&Path>,
    show_progress: bool,
    session: &Session,
    source: &SourceType,
    options: ResolveOptions,
) -> Result<()> {
    let messages = session.messages();

    let pb = if show_progress {
        ProgressBar::new(replaceable_word_count(text) as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .context("invalid progress template")?
            .progress_chars("█▓▒░"),
    );

    let result = process_text_with_progress(text, session, source, options, |word| {
        pb.set_message(word.to_string());
        pb.inc(1);
    });
    pb.finish_and_clear();

    let result = result.map_err(|e| anyhow::anyhow!(messages.input_error(&e, false)))?;
    print_text_result(&result, messages);

    if let Some(path) = output {
        match text_artifact(&result) {
            Some(artifact) => {
                write_artifact(path, artifact)?;
                println!("\n{} {}", messages.saved_to.green(), path.display());
            }
            None => println!("\n{}", messages.nothing_to_save.yellow()),
        }
    }
    Ok(())
}

fn run_play_command(
    session: Session,
    source: &SourceType,
    options: ResolveOptions,
) -> Result<()> {
    use synonym_replacer::interactive::{App, run_tui};

    let app = App::new(session, source, options);
    run_tui(app)
}
