use std::{collections::HashMap, fmt::Display, path::Path};

use log::debug;
use thiserror::Error;

use crate::{
    git::{GitClient, GitError},
    logger::FetchLogger,
    model::{params::FetchParams, ParamsError},
};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error(transparent)]
    Params(#[from] ParamsError),
    #[error("Failed to create directory '{path}': {source}")]
    CreateDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStage {
    Credentials,
    Clone,
}

impl Display for FetchStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchStage::Credentials => f.write_str("credential approval"),
            FetchStage::Clone => f.write_str("clone"),
        }
    }
}

/// How a fetch that returned normally actually ended.
///
/// Git failures are only reported through the logger; this value is the
/// structured counterpart for callers that want to inspect it.
#[derive(Debug)]
pub enum FetchOutcome {
    Cloned,
    Failed { stage: FetchStage, error: GitError },
}

impl FetchOutcome {
    pub fn is_cloned(&self) -> bool {
        matches!(self, FetchOutcome::Cloned)
    }
}

/// Clones `<collection_url>/<repo_name>.git` into `target_directory`.
///
/// Only a missing parameter or a failure to create the target directory is
/// returned as an error. Credential and clone failures are logged and the
/// call still succeeds.
pub fn fetch_repository(
    params: &HashMap<String, String>,
    git: &GitClient,
    logger: &dyn FetchLogger,
) -> Result<FetchOutcome, FetchError> {
    let params = FetchParams::from_map(params)?;

    logger.log(&format!(
        "Starting fetch process for TFS repository '{}' from '{}' into directory '{}'.",
        params.repo_name,
        params.collection_url,
        params.target_directory.display()
    ));

    ensure_target_directory(&params.target_directory, logger)?;

    let outcome = match clone_with_credentials(&params, git, logger) {
        Ok(()) => {
            logger.log("Successfully cloned TFS repository.");
            FetchOutcome::Cloned
        }
        Err((stage, error)) => {
            match &error {
                GitError::Failed { stderr, .. } => {
                    logger.log(&format!("Error cloning TFS repository: {}", stderr.trim()))
                }
                GitError::Spawn { .. } => {
                    logger.log(&format!("Unexpected error cloning TFS repository: {error}"))
                }
            }
            FetchOutcome::Failed { stage, error }
        }
    };

    debug!("Fetch of {} finished: {:?}", params.repo_name, outcome);
    Ok(outcome)
}

fn ensure_target_directory(path: &Path, logger: &dyn FetchLogger) -> Result<(), FetchError> {
    if path.exists() {
        return Ok(());
    }

    match std::fs::create_dir_all(path) {
        Ok(()) => {
            logger.log(&format!("Created directory: {}", path.display()));
            Ok(())
        }
        Err(source) => {
            logger.log(&format!(
                "Failed to create directory '{}': {}",
                path.display(),
                source
            ));
            Err(FetchError::CreateDirectory {
                path: path.display().to_string(),
                source,
            })
        }
    }
}

// Credentials must be approved before the clone is attempted.
fn clone_with_credentials(
    params: &FetchParams,
    git: &GitClient,
    logger: &dyn FetchLogger,
) -> Result<(), (FetchStage, GitError)> {
    logger.log("Configuring TFS credentials.");
    git.credential_approve(&params.credentials())
        .map_err(|e| (FetchStage::Credentials, e))?;

    let repo_url = params.clone_url();
    logger.log(&format!(
        "Cloning TFS repository '{}' from '{}'.",
        params.repo_name, repo_url
    ));
    git.clone_repository(&repo_url, &params.target_directory)
        .map_err(|e| (FetchStage::Clone, e))
}
