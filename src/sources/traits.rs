use crate::domain::{Platform, SearchRequest, Vacancy};
use crate::errors::VacancyResult;

#[cfg_attr(test, mockall::automock)]
pub trait VacancySource: Send + Sync {
    /// Identifies the platform this source talks to
    fn platform(&self) -> Platform;

    /// Fetch one page of listings and normalize them
    fn fetch(&self, request: &SearchRequest) -> VacancyResult<Vec<Vacancy>>;
}
