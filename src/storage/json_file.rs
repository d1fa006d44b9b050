use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::Vacancy;
use crate::errors::VacancyResult;
use crate::storage::traits::VacancyRepository;

/// All listings of the last fetch in one pretty-printed UTF-8 JSON array
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl VacancyRepository for JsonFileRepository {
    fn save_all(&self, vacancies: &[Vacancy]) -> VacancyResult<()> {
        let json = serde_json::to_string_pretty(vacancies)?;
        fs::write(&self.path, json)?;

        info!(path = %self.path.display(), count = vacancies.len(), "Saved vacancies");
        Ok(())
    }

    fn load_all(&self) -> VacancyResult<Vec<Vacancy>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&content)?)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
