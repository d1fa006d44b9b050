pub mod traits;
pub mod json_file;

pub use traits::VacancyRepository;
pub use json_file::JsonFileRepository;
