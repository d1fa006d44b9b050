use crate::config::Config;
use crate::errors::VacancyResult;
use crate::sources::traits::VacancySource;
use crate::sources::{hh::HhSource, superjob::SuperJobSource};

pub struct SourceRegistry {
    sources: Vec<Box<dyn VacancySource>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Registry with both platforms configured
    pub fn from_config(config: &Config) -> VacancyResult<Self> {
        let mut registry = Self::new();

        // Order matters: combined results list HH first, then SuperJob
        registry.register(Box::new(HhSource::new(config)?));
        registry.register(Box::new(SuperJobSource::new(config)?));

        Ok(registry)
    }

    pub fn register(&mut self, source: Box<dyn VacancySource>) {
        self.sources.push(source);
    }

    pub fn sources(&self) -> impl Iterator<Item = &dyn VacancySource> {
        self.sources.iter().map(|s| s.as_ref())
    }

}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Platform;

    fn registry() -> SourceRegistry {
        SourceRegistry::from_config(&Config::from_lookup(|_| None).unwrap()).unwrap()
    }

    #[test]
    fn test_hh_registered_first() {
        let platforms: Vec<Platform> = registry().sources().map(|s| s.platform()).collect();
        assert_eq!(platforms, vec![Platform::Hh, Platform::SuperJob]);
    }

    #[test]
    fn test_empty_registry() {
        assert_eq!(SourceRegistry::new().sources().count(), 0);
    }
}
