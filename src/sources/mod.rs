pub mod traits;
pub mod http;
pub mod normalize;
pub mod hh;
pub mod superjob;
pub mod registry;

pub use traits::VacancySource;
pub use registry::SourceRegistry;
pub use hh::HhSource;
pub use superjob::SuperJobSource;
