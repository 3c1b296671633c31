use std::{
    collections::HashMap,
    fmt::{Debug, Formatter},
    path::PathBuf,
};

use crate::model::ParamsError;

pub const COLLECTION_URL: &str = "collection_url";
pub const REPO_NAME: &str = "repo_name";
pub const TARGET_DIRECTORY: &str = "target_directory";
pub const USERNAME: &str = "username";
pub const PASSWORD: &str = "password";

/// The values one fetch reads out of the parameter mapping.
#[derive(Clone, PartialEq, Eq)]
pub struct FetchParams {
    pub collection_url: String,
    pub repo_name: String,
    pub target_directory: PathBuf,
    pub username: String,
    pub password: String,
}

impl FetchParams {
    /// Looks up every required key, failing on the first one that is absent.
    pub fn from_map(params: &HashMap<String, String>) -> Result<FetchParams, ParamsError> {
        let lookup = |key: &str| {
            params
                .get(key)
                .cloned()
                .ok_or_else(|| ParamsError::MissingKey(key.to_string()))
        };

        Ok(FetchParams {
            collection_url: lookup(COLLECTION_URL)?,
            repo_name: lookup(REPO_NAME)?,
            target_directory: PathBuf::from(lookup(TARGET_DIRECTORY)?),
            username: lookup(USERNAME)?,
            password: lookup(PASSWORD)?,
        })
    }

    /// `<collection_url>/<repo_name>.git`, with one slash between the two.
    pub fn clone_url(&self) -> String {
        format!(
            "{}/{}.git",
            self.collection_url.trim_end_matches('/'),
            self.repo_name
        )
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            url: self.collection_url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

impl Debug for FetchParams {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchParams")
            .field("collection_url", &self.collection_url)
            .field("repo_name", &self.repo_name)
            .field("target_directory", &self.target_directory)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Authentication material handed to `git credential approve`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub url: String,
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// The newline separated block git reads on stdin.
    pub fn to_credential_block(&self) -> String {
        format!(
            "url={}\nusername={}\npassword={}\n",
            self.url, self.username, self.password
        )
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
pub(crate) fn params_map(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
