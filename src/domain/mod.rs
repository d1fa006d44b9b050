pub mod platform;
pub mod search;
pub mod vacancy;

pub use platform::{Platform, PlatformFilter};
pub use search::SearchRequest;
pub use vacancy::{Vacancy, NOT_AVAILABLE};
