pub mod client;
pub mod process;

pub use client::{GitClient, GitError};
#[cfg(test)]
pub use process::MockProcessRunner;
pub use process::{Invocation, ProcessOutput, ProcessRunner, SystemRunner};

pub const DEFAULT_GIT_PROGRAM: &str = "git";
