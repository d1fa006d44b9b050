use serde::{Deserialize, Serialize};

use super::Platform;

pub const NOT_AVAILABLE: &str = "N/A";

/// A listing from either platform in the shared shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacancy {
    pub platform: Platform,
    pub id: String,
    pub title: String,
    pub salary_from: Option<u64>,
    pub salary_to: Option<u64>,
    pub description: Option<String>,
    /// DD.MM.YYYY, or "N/A" when the platform gave no date
    pub published_date: String,
    pub city: String,
    pub schedule: String,
}

impl Vacancy {
    pub fn new(platform: Platform, id: String, title: String) -> Self {
        Self {
            platform,
            id,
            title,
            salary_from: None,
            salary_to: None,
            description: None,
            published_date: NOT_AVAILABLE.to_string(),
            city: NOT_AVAILABLE.to_string(),
            schedule: NOT_AVAILABLE.to_string(),
        }
    }

    pub fn with_salary(mut self, from: Option<u64>, to: Option<u64>) -> Self {
        self.salary_from = from;
        self.salary_to = to;
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_published_date(mut self, published_date: String) -> Self {
        self.published_date = published_date;
        self
    }

    pub fn with_city(mut self, city: Option<String>) -> Self {
        self.city = city.unwrap_or_else(|| NOT_AVAILABLE.to_string());
        self
    }

    pub fn with_schedule(mut self, schedule: Option<String>) -> Self {
        self.schedule = schedule.unwrap_or_else(|| NOT_AVAILABLE.to_string());
        self
    }

    /// Human-readable block printed by the presenter
    pub fn format(&self) -> String {
        format!(
            "Platform: {}\n\
             Vacancy ID: {}\n\
             Published: {}\n\
             Title: {}\n\
             Salary from: {}\n\
             Salary to: {}\n\
             Description: {}\n\
             City: {}\n\
             Schedule: {}",
            self.platform,
            self.id,
            self.published_date,
            self.title,
            display_optional(self.salary_from),
            display_optional(self.salary_to),
            self.description.as_deref().unwrap_or("not specified"),
            self.city,
            self.schedule,
        )
    }
}

fn display_optional(value: Option<u64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "not specified".to_string())
}
