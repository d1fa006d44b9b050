use crate::domain::Vacancy;
use crate::errors::VacancyResult;

#[cfg_attr(test, mockall::automock)]
pub trait VacancyRepository: Send + Sync {
    /// Replace the stored listings with `vacancies`
    fn save_all(&self, vacancies: &[Vacancy]) -> VacancyResult<()>;
    fn load_all(&self) -> VacancyResult<Vec<Vacancy>>;
    fn location(&self) -> String;
}
