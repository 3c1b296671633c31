use std::{collections::HashMap, path::PathBuf};

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::git::DEFAULT_GIT_PROGRAM;

pub struct TfsFetchConfig {
    pub git_program: String,
    pub icon_path: Option<PathBuf>,
}

impl TfsFetchConfig {
    pub fn load() -> anyhow::Result<Self> {
        let raw_config = RawConfig::load(None)?;

        Ok(Self {
            git_program: raw_config
                .git
                .program
                .unwrap_or_else(|| DEFAULT_GIT_PROGRAM.to_string()),
            icon_path: raw_config.icon.path,
        })
    }
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct RawConfig {
    #[serde(default)]
    git: GitConfig,
    #[serde(default)]
    icon: IconConfig,
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct GitConfig {
    program: Option<String>,
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct IconConfig {
    path: Option<PathBuf>,
}

impl RawConfig {
    fn load(env: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                Environment::with_prefix("TFSFETCH")
                    .separator("_")
                    .source(env),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn load_empty() {
        let env = HashMap::from([]);
        let config = RawConfig::load(Some(env)).unwrap();
        assert_eq!(
            config,
            RawConfig {
                git: GitConfig { program: None },
                icon: IconConfig { path: None }
            }
        )
    }

    #[test]
    fn load_environment() {
        let env = HashMap::from([
            (
                "TFSFETCH_GIT_PROGRAM".to_owned(),
                "/opt/git/bin/git".to_owned(),
            ),
            (
                "TFSFETCH_ICON_PATH".to_owned(),
                "/usr/share/tfsfetch/icon.svg".to_owned(),
            ),
        ]);
        let config = RawConfig::load(Some(env)).unwrap();
        assert_eq!(
            config,
            RawConfig {
                git: GitConfig {
                    program: Some("/opt/git/bin/git".to_owned())
                },
                icon: IconConfig {
                    path: Some("/usr/share/tfsfetch/icon.svg".into())
                }
            }
        )
    }
}
