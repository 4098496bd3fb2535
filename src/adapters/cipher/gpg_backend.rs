use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::errors::{CryptoEditError, Result};
use crate::core::models::recipients::RecipientSet;
use crate::core::traits::cipher::CipherBackend;
use crate::core::traits::process::{Invocation, ProcessRunner, Stdout};

/// Default GPG binary name.
pub const DEFAULT_GPG: &str = "gpg2";

/// GPG encryption backend that shells out to a GPG-compatible binary.
///
/// Passphrase prompts and diagnostics from gpg go straight to the
/// terminal; only decrypted plaintext is captured.
pub struct GpgBackend<R> {
    gpg_path: PathBuf,
    name: String,
    runner: R,
}

impl<R: ProcessRunner> GpgBackend<R> {
    pub fn new(gpg_path: impl Into<PathBuf>, runner: R) -> Self {
        let gpg_path = gpg_path.into();
        let name = Invocation::new(&gpg_path).program_name();
        Self {
            gpg_path,
            name,
            runner,
        }
    }

    /// Arguments for encrypting `source` into `dest`.
    fn encrypt_invocation(
        &self,
        source: &Path,
        dest: &Path,
        recipients: Option<&RecipientSet>,
    ) -> Invocation {
        let inv = Invocation::new(&self.gpg_path)
            .arg("--output")
            .arg(dest)
            .args(["--batch", "--yes"]);

        match recipients {
            None => inv.arg("-c").arg(source),
            Some(set) => set
                .iter()
                .fold(inv.arg("--encrypt"), |inv, r| inv.arg("--recipient").arg(r))
                .arg(source),
        }
    }
}

impl<R: ProcessRunner> CipherBackend for GpgBackend<R> {
    fn decrypt_to(&self, source: &Path, sink: &mut dyn Write) -> Result<()> {
        let inv = Invocation::new(&self.gpg_path).arg("-d").arg(source);

        let status = self
            .runner
            .run(&inv, Stdout::Pipe(sink))
            .map_err(|e| CryptoEditError::DecryptionFailed {
                path: source.to_path_buf(),
                reason: format!("Failed to run {}: {e}", self.name),
            })?;

        if !status.success() {
            return Err(CryptoEditError::DecryptionFailed {
                path: source.to_path_buf(),
                reason: format!("{} failed with {status}", self.name),
            });
        }

        Ok(())
    }

    fn encrypt(
        &self,
        source: &Path,
        dest: &Path,
        recipients: Option<&RecipientSet>,
    ) -> Result<()> {
        let inv = self.encrypt_invocation(source, dest, recipients);
        let failed = |reason: String| CryptoEditError::EncryptionFailed {
            source_path: source.to_path_buf(),
            dest: dest.to_path_buf(),
            reason,
        };

        let status = self
            .runner
            .run(&inv, Stdout::Inherit)
            .map_err(|e| failed(format!("Failed to run {}: {e}", self.name)))?;

        if !status.success() {
            return Err(failed(format!("{} failed with {status}", self.name)));
        }

        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
