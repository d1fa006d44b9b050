use tracing::info;

use crate::domain::{Platform, SearchRequest, Vacancy};
use crate::errors::VacancyResult;
use crate::sources::SourceRegistry;
use crate::storage::traits::VacancyRepository;

/// Listings from one fetch cycle across all sources
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub vacancies: Vec<Vacancy>,
    pub counts: Vec<(Platform, usize)>,
}

pub struct SearchService<R: VacancyRepository> {
    repository: R,
    source_registry: SourceRegistry,
}

impl<R: VacancyRepository> SearchService<R> {
    pub fn new(repository: R, source_registry: SourceRegistry) -> Self {
        Self {
            repository,
            source_registry,
        }
    }

    /// Query every source in registration order and concatenate the listings
    pub fn fetch(&self, request: &SearchRequest) -> VacancyResult<SearchResult> {
        let mut result = SearchResult::default();

        for source in self.source_registry.sources() {
            let vacancies = source.fetch(request)?;
            info!(
                platform = %source.platform(),
                page = request.page,
                count = vacancies.len(),
                "Fetched vacancies"
            );

            result.counts.push((source.platform(), vacancies.len()));
            result.vacancies.extend(vacancies);
        }

        Ok(result)
    }

    /// Fetch a page and overwrite the stored listings with it
    pub fn fetch_and_save(&self, request: &SearchRequest) -> VacancyResult<SearchResult> {
        let result = self.fetch(request)?;
        self.repository.save_all(&result.vacancies)?;
        Ok(result)
    }

    pub fn load_saved(&self) -> VacancyResult<Vec<Vacancy>> {
        self.repository.load_all()
    }

    pub fn output_location(&self) -> String {
        self.repository.location()
    }
}
