use crate::errors::{VacancyError, VacancyResult};

/// One page worth of search parameters, shared by every source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub term: String,
    pub page: u32,
    pub page_size: u32,
}

impl SearchRequest {
    pub fn new(term: impl Into<String>, page: u32, page_size: u32) -> VacancyResult<Self> {
        let term = term.into();

        if term.trim().is_empty() {
            return Err(VacancyError::InvalidInput(
                "Search term must not be empty".to_string(),
            ));
        }

        if page_size == 0 {
            return Err(VacancyError::InvalidInput(
                "Page size must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            term: term.trim().to_string(),
            page,
            page_size,
        })
    }

    pub fn next_page(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..self.clone()
        }
    }
}
