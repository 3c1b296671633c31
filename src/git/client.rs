use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::{
    git::process::{Invocation, ProcessRunner},
    model::params::Credentials,
};

#[derive(Error, Debug)]
pub enum GitError {
    #[error("`{command}` exited with {}: {stderr}", exit_code(.code))]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
    #[error("Could not run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

fn exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

/// Drives the git command line client through a [`ProcessRunner`].
pub struct GitClient {
    program: String,
    env: Vec<(String, String)>,
    runner: Box<dyn ProcessRunner>,
}

impl GitClient {
    pub fn new(program: impl Into<String>, runner: Box<dyn ProcessRunner>) -> GitClient {
        GitClient {
            program: program.into(),
            env: Vec::new(),
            runner,
        }
    }

    /// Environment variables set for every git process, e.g. `GIT_CONFIG_GLOBAL`.
    pub fn with_env(mut self, env: Vec<(String, String)>) -> Self {
        self.env = env;
        self
    }

    #[cfg(test)]
    pub(crate) fn program(&self) -> &str {
        &self.program
    }

    /// Stores credentials through `git credential approve` so the clone does not prompt.
    pub fn credential_approve(&self, credentials: &Credentials) -> Result<(), GitError> {
        debug!("Approving credentials for {}", credentials.url);
        let invocation = Invocation::new(&self.program, ["credential", "approve"])
            .envs(self.env.iter().cloned())
            .stdin(credentials.to_credential_block());
        self.run_checked(&invocation)
    }

    /// Runs `git clone <url>` inside `cwd`.
    pub fn clone_repository(&self, url: &str, cwd: &Path) -> Result<(), GitError> {
        debug!("Cloning {} in {}", url, cwd.display());
        let invocation = Invocation::new(&self.program, ["clone", url])
            .current_dir(cwd)
            .envs(self.env.iter().cloned());
        self.run_checked(&invocation)
    }

    fn run_checked(&self, invocation: &Invocation) -> Result<(), GitError> {
        let output = self
            .runner
            .run(invocation)
            .map_err(|source| GitError::Spawn {
                command: invocation.to_string(),
                source,
            })?;

        if output.success() {
            Ok(())
        } else {
            Err(GitError::Failed {
                command: invocation.to_string(),
                code: output.code,
                stderr: output.stderr_lossy(),
            })
        }
    }
}
