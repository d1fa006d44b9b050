use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vacancies::cli::{Cli, Presenter};
use vacancies::config::{parse_utc_offset, Config};
use vacancies::errors::VacancyResult;
use vacancies::services::SearchService;
use vacancies::sources::SourceRegistry;
use vacancies::storage::JsonFileRepository;

fn main() {
    // Logs go to stderr so prompts and listings stay readable on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> VacancyResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::from_env()?;
    if let Some(output) = cli.output {
        config.output_path = output;
    }
    if let Some(offset) = cli.utc_offset {
        config.utc_offset = Some(parse_utc_offset(&offset)?);
    }

    let source_registry = SourceRegistry::from_config(&config)?;
    let repository = JsonFileRepository::new(&config.output_path);
    let service = SearchService::new(repository, source_registry);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Presenter::new(&service, stdin.lock(), stdout.lock()).run()
}
