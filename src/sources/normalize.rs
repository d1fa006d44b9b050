use chrono::{DateTime, FixedOffset, Local};
use tracing::warn;

use crate::domain::Platform;
use crate::errors::{VacancyError, VacancyResult};

pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Format an ISO-8601 timestamp ("2024-03-15T10:00:00+0300") as DD.MM.YYYY in its own offset
pub fn format_iso_date(raw: &str) -> VacancyResult<String> {
    DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z")
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .map_err(|e| VacancyError::DataShape(format!("Invalid publication date '{}': {}", raw, e)))
}

/// Format a Unix timestamp as DD.MM.YYYY, using the local timezone when no offset is given
pub fn format_unix_date(timestamp: i64, offset: Option<FixedOffset>) -> VacancyResult<String> {
    let utc = DateTime::from_timestamp(timestamp, 0).ok_or_else(|| {
        VacancyError::DataShape(format!("Publication timestamp out of range: {}", timestamp))
    })?;

    let formatted = match offset {
        Some(offset) => utc.with_timezone(&offset).format(DATE_FORMAT).to_string(),
        None => utc.with_timezone(&Local).format(DATE_FORMAT).to_string(),
    };

    Ok(formatted)
}

/// Salaries are non-negative; anything below zero is treated as unspecified
pub fn salary(platform: Platform, id: &str, value: Option<i64>) -> Option<u64> {
    let value = value?;
    match u64::try_from(value) {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(%platform, id, value, "Dropping negative salary");
            None
        }
    }
}

pub fn require_id(platform: Platform, id: String) -> VacancyResult<String> {
    let id = id.trim().to_string();
    if id.is_empty() {
        return Err(VacancyError::DataShape(format!(
            "{} returned a listing without an id",
            platform
        )));
    }
    Ok(id)
}
