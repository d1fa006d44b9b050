pub mod commands;
pub mod presenter;

pub use commands::Cli;
pub use presenter::{Presenter, State};
