use std::path::PathBuf;

use crate::core::errors::{CryptoEditError, Result};
use crate::core::traits::identity::IdentitySource;
use crate::core::traits::process::{Invocation, ProcessRunner, Stdout};

/// Default git binary name.
pub const DEFAULT_GIT: &str = "git";

/// Reads the user's email from git configuration (`git config --get user.email`).
pub struct GitIdentity<R> {
    git_path: PathBuf,
    runner: R,
}

impl<R: ProcessRunner> GitIdentity<R> {
    pub fn new(git_path: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            git_path: git_path.into(),
            runner,
        }
    }
}

impl<R: ProcessRunner> IdentitySource for GitIdentity<R> {
    fn email(&self) -> Result<String> {
        let inv = Invocation::new(&self.git_path).args(["config", "--get", "user.email"]);

        let mut out = Vec::new();
        let status = self
            .runner
            .run(&inv, Stdout::Pipe(&mut out))
            .map_err(|e| CryptoEditError::RecipientUnresolved {
                reason: format!("Failed to run {}: {e}", inv.program_name()),
            })?;

        if !status.success() {
            return Err(CryptoEditError::RecipientUnresolved {
                reason: format!("'{inv}' failed with {status}"),
            });
        }

        let email = String::from_utf8_lossy(&out).trim().to_string();
        if email.is_empty() {
            return Err(CryptoEditError::RecipientUnresolved {
                reason: "git user.email is empty".into(),
            });
        }

        Ok(email)
    }
}
