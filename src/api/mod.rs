use std::{collections::HashMap, path::PathBuf};

use crate::{
    fetch::{fetch_repository, FetchError, FetchOutcome},
    git::GitClient,
    icon::load_icon,
    logger::FetchLogger,
    model::connection::ConnectionData,
};

mod builder;

pub use builder::TeamFoundationSourceBuilder;

/// What a host framework needs from a data source plugin.
pub trait DataSource {
    /// Pulls the source's data into place.
    fn fetch(&self) -> Result<FetchOutcome, FetchError>;

    /// SVG markup the host shows next to the source.
    fn get_icon(&self) -> String;

    /// Connection type and the parameters a host must collect for it.
    fn get_connection_data(&self) -> ConnectionData;
}

/// Host supplied lifecycle details. They are carried but never interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceContext {
    pub name: Option<String>,
    pub session: Option<String>,
    pub dependency_data_sources: Vec<String>,
    pub subscribers: Vec<String>,
}

/// Clones a Team Foundation Server git repository into a local directory.
pub struct TeamFoundationSource {
    context: SourceContext,
    params: HashMap<String, String>,
    git: GitClient,
    logger: Box<dyn FetchLogger>,
    icon_path: Option<PathBuf>,
}

impl TeamFoundationSource {
    pub fn builder() -> TeamFoundationSourceBuilder {
        TeamFoundationSourceBuilder::default()
    }

    pub fn context(&self) -> &SourceContext {
        &self.context
    }

    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }
}

impl DataSource for TeamFoundationSource {
    fn fetch(&self) -> Result<FetchOutcome, FetchError> {
        fetch_repository(&self.params, &self.git, self.logger.as_ref())
    }

    fn get_icon(&self) -> String {
        load_icon(self.icon_path.as_deref())
    }

    fn get_connection_data(&self) -> ConnectionData {
        ConnectionData::team_foundation()
    }
}
