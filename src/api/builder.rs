use std::{collections::HashMap, error::Error, path::PathBuf};

use crate::{
    api::{SourceContext, TeamFoundationSource},
    config::TfsFetchConfig,
    git::{GitClient, ProcessRunner, SystemRunner},
    icon::default_icon_path,
    logger::{FetchLogger, LogFacade},
};

#[derive(Default)]
pub struct TeamFoundationSourceBuilder {
    context: SourceContext,
    params: HashMap<String, String>,
    logger: Option<Box<dyn FetchLogger>>,
    runner: Option<Box<dyn ProcessRunner>>,
    git_program: Option<String>,
    git_env: Vec<(String, String)>,
    icon_path: Option<PathBuf>,
}

impl TeamFoundationSourceBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.context.name = Some(name.into());
        self
    }

    pub fn session(mut self, session: impl Into<String>) -> Self {
        self.context.session = Some(session.into());
        self
    }

    pub fn dependency_data_source(mut self, name: impl Into<String>) -> Self {
        self.context.dependency_data_sources.push(name.into());
        self
    }

    pub fn subscriber(mut self, name: impl Into<String>) -> Self {
        self.context.subscribers.push(name.into());
        self
    }

    /// Replaces the whole parameter mapping.
    pub fn params(mut self, params: HashMap<String, String>) -> Self {
        self.params = params;
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Where fetch progress is reported.
    ///
    /// Defaults to the `log` facade.
    pub fn logger(mut self, logger: impl FetchLogger + 'static) -> Self {
        self.logger = Some(Box::new(logger));
        self
    }

    /// How git processes are started.
    ///
    /// Defaults to spawning child processes.
    pub fn runner(mut self, runner: impl ProcessRunner + 'static) -> Self {
        self.runner = Some(Box::new(runner));
        self
    }

    /// The git executable.
    ///
    /// Defaults to `$TFSFETCH_GIT_PROGRAM`, or `git` from `PATH`.
    pub fn git_program(mut self, program: impl Into<String>) -> Self {
        self.git_program = Some(program.into());
        self
    }

    /// Sets an environment variable for the git processes, on top of the inherited ones.
    pub fn git_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.git_env.push((key.into(), value.into()));
        self
    }

    /// Location of the SVG icon.
    ///
    /// Defaults to `$TFSFETCH_ICON_PATH`, or `icon.svg` next to the executable.
    pub fn icon_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.icon_path = Some(path.into());
        self
    }

    pub fn try_build(self) -> Result<TeamFoundationSource, Box<dyn Error>> {
        let Self {
            context,
            params,
            logger,
            runner,
            git_program,
            git_env,
            icon_path,
        } = self;

        let config = TfsFetchConfig::load()?;

        let git_program = git_program.unwrap_or(config.git_program);
        let icon_path = icon_path.or(config.icon_path).or_else(default_icon_path);
        let runner = runner.unwrap_or_else(|| Box::new(SystemRunner));
        let logger = logger.unwrap_or_else(|| Box::new(LogFacade));

        Ok(TeamFoundationSource {
            context,
            params,
            git: GitClient::new(git_program, runner).with_env(git_env),
            logger,
            icon_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::DataSource;
    use pretty_assertions::assert_eq;

    #[test]
    fn collects_context_and_params() {
        let source = TeamFoundationSource::builder()
            .name("tfs")
            .session("session-1")
            .dependency_data_source("upstream")
            .subscriber("indexer")
            .subscriber("notifier")
            .param("repo_name", "myrepo")
            .try_build()
            .unwrap();

        assert_eq!(
            source.context(),
            &SourceContext {
                name: Some("tfs".to_string()),
                session: Some("session-1".to_string()),
                dependency_data_sources: vec!["upstream".to_string()],
                subscribers: vec!["indexer".to_string(), "notifier".to_string()],
            }
        );
        assert_eq!(
            source.params().get("repo_name").map(String::as_str),
            Some("myrepo")
        );
    }

    #[test]
    fn explicit_git_program_wins() {
        let source = TeamFoundationSource::builder()
            .git_program("/opt/git/bin/git")
            .try_build()
            .unwrap();
        assert_eq!(source.git.program(), "/opt/git/bin/git");
    }

    #[test]
    fn git_env_is_forwarded() {
        use crate::git::{MockProcessRunner, ProcessOutput};

        let dir = tempfile::tempdir().unwrap();
        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .withf(|invocation| {
                invocation.env == vec![("GIT_CONFIG_NOSYSTEM".to_string(), "1".to_string())]
            })
            .times(2)
            .returning(|_| {
                Ok(ProcessOutput {
                    code: Some(0),
                    ..Default::default()
                })
            });

        let source = TeamFoundationSource::builder()
            .param("collection_url", "https://tfs.example.com/col")
            .param("repo_name", "myrepo")
            .param("target_directory", dir.path().to_str().unwrap())
            .param("username", "u")
            .param("password", "p")
            .git_env("GIT_CONFIG_NOSYSTEM", "1")
            .runner(runner)
            .try_build()
            .unwrap();

        assert!(source.fetch().unwrap().is_cloned());
    }
}
