mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sentsearch_common::{logger, validate_query, AppConfig, SentSearchError, StopWordList};
use sentsearch_vector::SearchService;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use output::{
    write_error, write_health, write_search, write_sentences, Format, HealthResponse,
    SearchResponse, SentencesResponse,
};

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        // Fallback to default dotenv behavior
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "sentsearch")]
#[command(about = "SentSearch - find the closest sentence in a small corpus", long_about = None)]
struct Cli {
    /// Corpus CSV file (overrides CORPUS_PATH)
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,

    /// Column holding the sentence text (overrides TEXT_COLUMN)
    #[arg(long, global = true)]
    text_column: Option<String>,

    /// Stop word list: english or none (overrides STOP_WORDS)
    #[arg(long, global = true)]
    stop_words: Option<StopWordList>,

    /// Log level (overrides LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the sentence most similar to a query
    Search {
        /// Free-text query
        query: String,
    },
    /// Show corpus and vocabulary size
    Stats,
    /// Print every sentence in load order
    Sentences,
    /// Answer queries read line by line from stdin
    Repl,
}

impl Cli {
    /// Load config with command-line arguments taking the place of env vars
    fn config(&self) -> Result<AppConfig> {
        // Override env vars first so a bad env value never shadows a valid flag
        if let Some(path) = &self.corpus {
            std::env::set_var("CORPUS_PATH", path);
        }
        if let Some(column) = &self.text_column {
            std::env::set_var("TEXT_COLUMN", column);
        }
        if let Some(stop_words) = self.stop_words {
            std::env::set_var("STOP_WORDS", stop_words.to_string());
        }
        if let Some(level) = &self.log_level {
            std::env::set_var("LOG_LEVEL", level);
        }
        Ok(AppConfig::from_env()?)
    }

    fn format(&self) -> Format {
        if self.json {
            Format::Json
        } else {
            Format::Text
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Load environment variables from .env at project root
    load_dotenv_from_project_root();

    let config = cli.config()?;
    logger::setup_logging(config.log_dir.as_deref(), &config.log_level)?;

    tracing::info!("SentSearch starting...");
    tracing::info!("  Corpus: {}", config.corpus_path.display());
    tracing::info!("  Text column: {}", config.text_column);
    tracing::info!("  Stop words: {}", config.stop_words);

    let service = SearchService::new();
    if let Err(e) = service.initialize(&config) {
        tracing::error!("Startup failed: {}", e);
        return Err(e.into());
    }

    let format = cli.format();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Search { query } => {
            if !run_search(&service, query, &mut out, format)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Stats => {
            let stats = service.stats()?;
            write_health(&mut out, format, &HealthResponse::from(stats))?;
        }
        Commands::Sentences => {
            let sentences = service.list_texts()?;
            write_sentences(&mut out, format, &SentencesResponse { sentences })?;
        }
        Commands::Repl => {
            let stdin = std::io::stdin();
            run_repl(&service, stdin.lock(), &mut out, format)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Answer one query, or report it as empty
///
/// Returns `false` when the query was rejected.
fn run_search<W: Write>(
    service: &SearchService,
    raw: &str,
    out: &mut W,
    format: Format,
) -> Result<bool> {
    match validate_query(raw) {
        Ok(query) => {
            let result = service.search(query)?;
            write_search(out, format, &SearchResponse::new(query, &result))?;
            Ok(true)
        }
        Err(SentSearchError::EmptyQuery) => {
            write_error(out, format, &SentSearchError::EmptyQuery.to_string())?;
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

/// One answer per input line; blank lines are reported and skipped
fn run_repl<R: BufRead, W: Write>(
    service: &SearchService,
    input: R,
    out: &mut W,
    format: Format,
) -> Result<()> {
    for line in input.lines() {
        run_search(service, &line?, out, format)?;
        out.flush()?;
    }
    Ok(())
}
