use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;

use crate::domain::Platform;
use crate::errors::{VacancyError, VacancyResult};

const USER_AGENT: &str = concat!("vacancies/", env!("CARGO_PKG_VERSION"));

pub fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Turn a provider response into its body text, mapping rejected credentials to Auth
pub fn read_body(platform: Platform, response: Response) -> VacancyResult<String> {
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        let message = response
            .text()
            .ok()
            .filter(|body| !body.trim().is_empty())
            .unwrap_or_else(|| status.to_string());
        return Err(VacancyError::Auth {
            platform: platform.to_string(),
            message,
        });
    }

    Ok(response.error_for_status()?.text()?)
}
