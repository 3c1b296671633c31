use serde::Serialize;

use crate::model::params::{COLLECTION_URL, PASSWORD, REPO_NAME, TARGET_DIRECTORY, USERNAME};

pub const CONNECTION_TYPE: &str = "TeamFoundation";

/// Fields a host must collect before it can construct a Team Foundation source.
pub const CONNECTION_FIELDS: [&str; 5] =
    [COLLECTION_URL, REPO_NAME, USERNAME, PASSWORD, TARGET_DIRECTORY];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionData {
    pub connection_type: String,
    pub fields: Vec<String>,
}

impl ConnectionData {
    pub fn team_foundation() -> ConnectionData {
        ConnectionData {
            connection_type: CONNECTION_TYPE.to_string(),
            fields: CONNECTION_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
