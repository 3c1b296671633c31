pub mod cli;
pub mod config;
pub mod fetch;
pub mod git;
pub mod icon;
pub mod logger;
pub mod model;

mod api;

pub use api::{DataSource, SourceContext, TeamFoundationSource, TeamFoundationSourceBuilder};
pub use fetch::{FetchError, FetchOutcome, FetchStage};
pub use logger::{FetchLogger, LogFacade};
