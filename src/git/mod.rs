//! Git integration via the system `git` binary.

pub mod executor;

pub use executor::{GitExecutor, SystemGit};

#[cfg(test)]
pub use executor::MockGitExecutor;
