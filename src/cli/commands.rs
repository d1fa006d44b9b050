use clap::Parser;

#[derive(Parser)]
#[command(name = "vacancies")]
#[command(about = "Search job vacancies on HH and SuperJob and browse them page by page")]
#[command(version)]
pub struct Cli {
    /// Where to write the fetched vacancies as JSON
    #[arg(short, long, env = "VACANCIES_OUTPUT")]
    pub output: Option<String>,

    /// UTC offset for SuperJob publication dates, e.g. +03:00 (defaults to local time)
    #[arg(long, env = "VACANCIES_UTC_OFFSET", allow_hyphen_values = true)]
    pub utc_offset: Option<String>,
}
