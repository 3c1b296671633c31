use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Clones Team Foundation Server git repositories.
#[derive(Debug, Parser)]
#[clap(version)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub cmd: Command,
    /// Git executable to run. Overrides `TFSFETCH_GIT_PROGRAM`.
    #[clap(long, global = true)]
    pub git_program: Option<String>,
    /// SVG icon file. Overrides `TFSFETCH_ICON_PATH`.
    #[clap(long, global = true)]
    pub icon_path: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Approves the credentials with git and clones the repository
    Fetch(FetchArgs),
    /// Prints the data source icon as SVG
    Icon,
    /// Prints the connection type and its required fields as TOML
    ConnectionData,
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// TOML file with a table of string parameters. Flags take precedence over it.
    #[clap(short, long)]
    pub params: Option<PathBuf>,
    #[clap(long, env = "TFS_COLLECTION_URL")]
    pub collection_url: Option<String>,
    #[clap(long, env = "TFS_REPO_NAME")]
    pub repo_name: Option<String>,
    #[clap(long, env = "TFS_TARGET_DIRECTORY")]
    pub target_directory: Option<String>,
    #[clap(long, env = "TFS_USERNAME")]
    pub username: Option<String>,
    #[clap(long, env = "TFS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}
