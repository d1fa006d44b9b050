use chrono::FixedOffset;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::domain::{Platform, SearchRequest, Vacancy, NOT_AVAILABLE};
use crate::errors::{VacancyError, VacancyResult};
use crate::sources::http::{build_client, read_body};
use crate::sources::normalize::{format_unix_date, require_id, salary};
use crate::sources::traits::VacancySource;

const API_KEY_HEADER: &str = "X-Api-App-Id";

#[derive(Debug, Deserialize)]
struct SuperJobResponse {
    objects: Option<Vec<SuperJobVacancy>>,
}

#[derive(Debug, Deserialize)]
struct SuperJobVacancy {
    id: i64,
    profession: Option<String>,
    payment_from: Option<i64>,
    payment_to: Option<i64>,
    candidat: Option<String>,
    date_published: Option<i64>,
    town: Option<SuperJobTitled>,
    schedule: Option<SuperJobTitled>,
    type_of_work: Option<SuperJobTitled>,
}

#[derive(Debug, Deserialize)]
struct SuperJobTitled {
    title: Option<String>,
}

pub struct SuperJobSource {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
    utc_offset: Option<FixedOffset>,
}

impl SuperJobSource {
    pub fn new(config: &Config) -> VacancyResult<Self> {
        let endpoint = config
            .superjob_url
            .join("vacancies/")
            .map_err(|e| VacancyError::Config(format!("Invalid SuperJob endpoint: {}", e)))?;

        Ok(Self {
            client: build_client(config.http_timeout),
            endpoint,
            api_key: config.superjob_api_key.clone(),
            utc_offset: config.utc_offset,
        })
    }

    /// Normalize a raw SuperJob search response body
    fn parse_response(&self, body: &str) -> VacancyResult<Vec<Vacancy>> {
        let response: SuperJobResponse = serde_json::from_str(body)
            .map_err(|e| VacancyError::DataShape(format!("SuperJob response: {}", e)))?;

        let objects = response.objects.ok_or_else(|| {
            VacancyError::DataShape("SuperJob response has no 'objects' array".to_string())
        })?;

        objects
            .into_iter()
            .map(|raw| self.normalize(raw))
            .collect()
    }

    fn normalize(&self, raw: SuperJobVacancy) -> VacancyResult<Vacancy> {
        let id = require_id(Platform::SuperJob, raw.id.to_string())?;

        // SuperJob reports an unspecified salary as 0
        let salary_from = salary(Platform::SuperJob, &id, raw.payment_from.filter(|&v| v != 0));
        let salary_to = salary(Platform::SuperJob, &id, raw.payment_to.filter(|&v| v != 0));

        let published_date = match raw.date_published {
            Some(timestamp) => format_unix_date(timestamp, self.utc_offset)?,
            None => {
                debug!(id = %id, "SuperJob listing has no publication date");
                NOT_AVAILABLE.to_string()
            }
        };

        Ok(Vacancy::new(Platform::SuperJob, id, raw.profession.unwrap_or_default())
            .with_salary(salary_from, salary_to)
            .with_description(raw.candidat.as_deref().and_then(clean_description))
            .with_published_date(published_date)
            .with_city(raw.town.and_then(|t| t.title))
            .with_schedule(
                raw.schedule
                    .and_then(|s| s.title)
                    .or_else(|| raw.type_of_work.and_then(|t| t.title)),
            ))
    }
}

/// Strip line breaks and bullet characters; an empty result means no description
fn clean_description(text: &str) -> Option<String> {
    let cleaned: String = text.chars().filter(|c| !matches!(c, '\n' | '•')).collect();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

impl VacancySource for SuperJobSource {
    fn platform(&self) -> Platform {
        Platform::SuperJob
    }

    fn fetch(&self, request: &SearchRequest) -> VacancyResult<Vec<Vacancy>> {
        debug!(
            url = %self.endpoint,
            term = %request.term,
            page = request.page,
            count = request.page_size,
            "Querying SuperJob"
        );

        let mut builder = self.client.get(self.endpoint.clone()).query(&[
            ("keywords", request.term.clone()),
            ("page", request.page.to_string()),
            ("count", request.page_size.to_string()),
        ]);

        if let Some(key) = &self.api_key {
            builder = builder.header(API_KEY_HEADER, key);
        }

        let body = read_body(Platform::SuperJob, builder.send()?)?;
        self.parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "objects": [
            {
                "id": 46823901,
                "profession": "Python-разработчик",
                "payment_from": 120000,
                "payment_to": 0,
                "candidat": "Требования:\n• Python 3\n• PostgreSQL",
                "date_published": 1710489600,
                "town": {"id": 4, "title": "Москва"},
                "type_of_work": {"id": 6, "title": "Полный рабочий день"}
            },
            {
                "id": 46823902,
                "payment_from": 0,
                "payment_to": 0,
                "candidat": null,
                "date_published": 1710489600
            }
        ],
        "total": 2,
        "more": false
    }"#;

    fn source() -> SuperJobSource {
        let mut config = Config::from_lookup(|_| None).unwrap();
        config.utc_offset = FixedOffset::east_opt(3 * 3600);
        SuperJobSource::new(&config).unwrap()
    }

    #[test]
    fn test_source_platform_and_endpoint() {
        let source = source();
        assert_eq!(source.platform(), Platform::SuperJob);
        assert_eq!(
            source.endpoint.as_str(),
            "https://api.superjob.ru/2.0/vacancies/"
        );
    }

    #[test]
    fn test_parse_full_listing() {
        let vacancies = source().parse_response(SAMPLE).unwrap();
        assert_eq!(vacancies.len(), 2);

        let first = &vacancies[0];
        assert_eq!(first.platform, Platform::SuperJob);
        assert_eq!(first.id, "46823901");
        assert_eq!(first.title, "Python-разработчик");
        assert_eq!(first.salary_from, Some(120000));
        assert_eq!(first.salary_to, None);
        assert_eq!(
            first.description.as_deref(),
            Some("Требования: Python 3 PostgreSQL")
        );
        assert_eq!(first.published_date, "15.03.2024");
        assert_eq!(first.city, "Москва");
        assert_eq!(first.schedule, "Полный рабочий день");
    }

    #[test]
    fn test_sparse_listing_uses_defaults() {
        let vacancies = source().parse_response(SAMPLE).unwrap();
        let second = &vacancies[1];

        assert_eq!(second.title, "");
        assert_eq!(second.salary_from, None);
        assert_eq!(second.salary_to, None);
        assert_eq!(second.description, None);
        assert_eq!(second.city, "N/A");
        assert_eq!(second.schedule, "N/A");
    }

    #[test]
    fn test_missing_timestamp_defaults() {
        let body = r#"{"objects": [{"id": 1, "profession": "QA"}]}"#;
        let vacancies = source().parse_response(body).unwrap();
        assert_eq!(vacancies[0].published_date, "N/A");
    }

    #[test]
    fn test_schedule_preferred_over_type_of_work() {
        let body = r#"{"objects": [
            {"id": 1, "schedule": {"title": "Full"}, "type_of_work": {"title": "Full day"}},
            {"id": 2, "type_of_work": {"title": "Shift work"}},
            {"id": 3, "schedule": {"title": null}, "type_of_work": {"title": "Remote"}}
        ]}"#;
        let vacancies = source().parse_response(body).unwrap();

        assert_eq!(vacancies[0].schedule, "Full");
        assert_eq!(vacancies[1].schedule, "Shift work");
        assert_eq!(vacancies[2].schedule, "Remote");
    }

    #[test]
    fn test_candidat_of_only_bullets_is_none() {
        let body = r#"{"objects": [{"id": 1, "candidat": "•\n"}]}"#;
        let vacancies = source().parse_response(body).unwrap();
        assert_eq!(vacancies[0].description, None);
    }

    #[test]
    fn test_missing_objects_rejected() {
        let body = r#"{"error": {"code": 403, "message": "Invalid app_key"}}"#;
        assert!(matches!(
            source().parse_response(body),
            Err(VacancyError::DataShape(_))
        ));
    }

    #[test]
    fn test_clean_description() {
        assert_eq!(
            clean_description("• one\n• two"),
            Some(" one two".to_string())
        );
        assert_eq!(clean_description("\n•\n"), None);
        assert_eq!(clean_description(""), None);
    }

    #[test]
    fn test_every_listing_has_platform_and_id() {
        for vacancy in source().parse_response(SAMPLE).unwrap() {
            assert!(!vacancy.id.is_empty());
            assert_eq!(vacancy.platform.as_str(), "SuperJob");
        }
    }
}
