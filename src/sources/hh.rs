use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::domain::{Platform, SearchRequest, Vacancy, NOT_AVAILABLE};
use crate::errors::{VacancyError, VacancyResult};
use crate::sources::http::{build_client, read_body};
use crate::sources::normalize::{format_iso_date, require_id, salary};
use crate::sources::traits::VacancySource;

#[derive(Debug, Deserialize)]
struct HhResponse {
    #[serde(default)]
    items: Vec<HhVacancy>,
}

#[derive(Debug, Deserialize)]
struct HhVacancy {
    id: String,
    #[serde(default)]
    name: String,
    salary: Option<HhSalary>,
    snippet: Option<HhSnippet>,
    published_at: Option<String>,
    area: Option<HhNamed>,
    schedule: Option<HhNamed>,
}

#[derive(Debug, Deserialize)]
struct HhSalary {
    from: Option<i64>,
    to: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct HhSnippet {
    responsibility: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HhNamed {
    name: Option<String>,
}

pub struct HhSource {
    client: Client,
    endpoint: Url,
}

impl HhSource {
    pub fn new(config: &Config) -> VacancyResult<Self> {
        let endpoint = config
            .hh_url
            .join("vacancies")
            .map_err(|e| VacancyError::Config(format!("Invalid HH endpoint: {}", e)))?;

        Ok(Self {
            client: build_client(config.http_timeout),
            endpoint,
        })
    }

    /// Normalize a raw HH search response body
    fn parse_response(body: &str) -> VacancyResult<Vec<Vacancy>> {
        let response: HhResponse = serde_json::from_str(body)
            .map_err(|e| VacancyError::DataShape(format!("HH response: {}", e)))?;

        response.items.into_iter().map(Self::normalize).collect()
    }

    fn normalize(raw: HhVacancy) -> VacancyResult<Vacancy> {
        let id = require_id(Platform::Hh, raw.id)?;

        let (salary_from, salary_to) = match raw.salary {
            Some(s) => (
                salary(Platform::Hh, &id, s.from),
                salary(Platform::Hh, &id, s.to),
            ),
            None => (None, None),
        };

        let description = raw.snippet.and_then(|s| s.responsibility);
        if description.is_none() {
            debug!(id = %id, "HH listing has no responsibility snippet");
        }

        let published_date = match raw.published_at.as_deref() {
            Some(published_at) => format_iso_date(published_at)?,
            None => NOT_AVAILABLE.to_string(),
        };

        Ok(Vacancy::new(Platform::Hh, id, raw.name)
            .with_salary(salary_from, salary_to)
            .with_description(description)
            .with_published_date(published_date)
            .with_city(raw.area.and_then(|a| a.name))
            .with_schedule(raw.schedule.and_then(|s| s.name)))
    }
}

impl VacancySource for HhSource {
    fn platform(&self) -> Platform {
        Platform::Hh
    }

    fn fetch(&self, request: &SearchRequest) -> VacancyResult<Vec<Vacancy>> {
        debug!(
            url = %self.endpoint,
            term = %request.term,
            page = request.page,
            per_page = request.page_size,
            "Querying HH"
        );

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("text", request.term.clone()),
                ("page", request.page.to_string()),
                ("per_page", request.page_size.to_string()),
            ])
            .send()?;

        let body = read_body(Platform::Hh, response)?;
        Self::parse_response(&body)
    }
}
