use std::time::Duration;

use chrono::FixedOffset;
use tracing::warn;
use url::Url;

use crate::errors::{VacancyError, VacancyResult};

const DEFAULT_HH_URL: &str = "https://api.hh.ru/";
const DEFAULT_SUPERJOB_URL: &str = "https://api.superjob.ru/2.0/";
const DEFAULT_OUTPUT: &str = "vacancies.json";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub hh_url: Url,
    pub superjob_url: Url,
    pub superjob_api_key: Option<String>,
    pub output_path: String,
    /// Offset used to render SuperJob timestamps; `None` means the local timezone
    pub utc_offset: Option<FixedOffset>,
    pub http_timeout: Duration,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> VacancyResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> VacancyResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let hh_url = parse_base_url(
            "HH_API_URL",
            &lookup("HH_API_URL").unwrap_or_else(|| DEFAULT_HH_URL.to_string()),
        )?;

        let superjob_url = parse_base_url(
            "SUPERJOB_API_URL",
            &lookup("SUPERJOB_API_URL").unwrap_or_else(|| DEFAULT_SUPERJOB_URL.to_string()),
        )?;

        let superjob_api_key = lookup("API_KEY_SJ").filter(|k| !k.trim().is_empty());
        if superjob_api_key.is_none() {
            warn!("API_KEY_SJ is not set, SuperJob will likely reject requests");
        }

        let output_path =
            lookup("VACANCIES_OUTPUT").unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

        let utc_offset = lookup("VACANCIES_UTC_OFFSET")
            .map(|raw| parse_utc_offset(&raw))
            .transpose()?;

        let http_timeout = match lookup("VACANCIES_HTTP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    VacancyError::Config(format!(
                        "VACANCIES_HTTP_TIMEOUT_SECS must be a number of seconds, got '{}'",
                        raw
                    ))
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            hh_url,
            superjob_url,
            superjob_api_key,
            output_path,
            utc_offset,
            http_timeout,
        })
    }
}

/// Parse an offset such as `+03:00`
pub fn parse_utc_offset(raw: &str) -> VacancyResult<FixedOffset> {
    raw.trim()
        .parse::<FixedOffset>()
        .map_err(|_| VacancyError::Config(format!("Invalid UTC offset: '{}'", raw)))
}

// Base URLs must end with '/' so that Url::join appends instead of replacing
fn parse_base_url(name: &str, raw: &str) -> VacancyResult<Url> {
    let mut raw = raw.trim().to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }

    Url::parse(&raw).map_err(|e| VacancyError::Config(format!("{} is not a valid URL: {}", name, e)))
}
