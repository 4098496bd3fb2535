use std::path::Path;

use crate::core::errors::{CryptoEditError, Result};
use crate::core::models::recipients::{EncryptionMode, RecipientSet};
use crate::core::traits::cipher::CipherBackend;
use crate::core::traits::identity::IdentitySource;

/// Orchestrates re-encryption by combining a `CipherBackend` with an
/// `IdentitySource` for the default recipient.
pub struct EncryptionService<C: CipherBackend, I: IdentitySource> {
    pub cipher: C,
    pub identity: I,
}

impl<C: CipherBackend, I: IdentitySource> EncryptionService<C, I> {
    /// Encrypt the plaintext file `source` over `dest`.
    ///
    /// Returns the recipients used, or `None` in symmetric mode. Recipient
    /// resolution happens before the cipher runs, so a failed lookup never
    /// touches `dest`.
    pub fn encrypt_file(
        &self,
        source: &Path,
        dest: &Path,
        mode: &EncryptionMode,
    ) -> Result<Option<RecipientSet>> {
        let recipients = match mode {
            EncryptionMode::Symmetric => None,
            EncryptionMode::PublicKey { recipients } => {
                Some(self.resolve_recipients(recipients)?)
            }
        };

        self.cipher.encrypt(source, dest, recipients.as_ref())?;
        Ok(recipients)
    }

    /// Explicit recipients win; an empty list falls back to the
    /// configured identity as the sole recipient.
    pub fn resolve_recipients(&self, explicit: &[String]) -> Result<RecipientSet> {
        if let Some(set) = RecipientSet::new(explicit.to_vec()) {
            return Ok(set);
        }

        let email = self.identity.email()?;
        RecipientSet::new(vec![email]).ok_or_else(|| CryptoEditError::RecipientUnresolved {
            reason: "no identity configured".into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::cipher::gpg_backend::GpgBackend;
    use crate::adapters::git::git_identity::GitIdentity;
    use crate::testing::{FakeRunner, args};

    fn service(
        runner: &FakeRunner,
    ) -> EncryptionService<GpgBackend<&FakeRunner>, GitIdentity<&FakeRunner>> {
        EncryptionService {
            cipher: GpgBackend::new("gpg2", runner),
            identity: GitIdentity::new("git", runner),
        }
    }

    #[test]
    fn empty_recipients_resolve_to_git_email() {
        let runner = FakeRunner::new().replying("git", b"alice@example.com\n", 0);
        let set = service(&runner).resolve_recipients(&[]).unwrap();
        assert_eq!(set.as_slice(), ["alice@example.com"]);
    }

    #[test]
    fn explicit_recipients_skip_git_lookup() {
        let runner = FakeRunner::new();
        let explicit = vec!["bob@example.com".to_string(), "carol@example.com".to_string()];

        let set = service(&runner).resolve_recipients(&explicit).unwrap();

        assert_eq!(set.as_slice(), explicit.as_slice());
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn symmetric_mode_uses_passphrase() {
        let runner = FakeRunner::new().replying("gpg2", b"", 0);
        let used = service(&runner)
            .encrypt_file(Path::new("/tmp/plain"), Path::new("n.gpg"), &EncryptionMode::Symmetric)
            .unwrap();

        assert!(used.is_none());
        assert!(args(&runner.calls_to("gpg2")[0]).contains(&"-c".to_string()));
        assert!(runner.calls_to("git").is_empty());
    }

    #[test]
    fn default_recipient_is_passed_to_gpg() {
        let runner = FakeRunner::new()
            .replying("git", b"alice@example.com\n", 0)
            .replying("gpg2", b"", 0);
        let mode = EncryptionMode::PublicKey { recipients: vec![] };

        let used = service(&runner)
            .encrypt_file(Path::new("/tmp/plain"), Path::new("n.gpg"), &mode)
            .unwrap();

        assert_eq!(used.unwrap().as_slice(), ["alice@example.com"]);
        let gpg_args = args(&runner.calls_to("gpg2")[0]);
        assert!(gpg_args.windows(2).any(|w| w == ["--recipient", "alice@example.com"]));
    }

    #[test]
    fn unresolved_recipient_never_runs_gpg() {
        let runner = FakeRunner::new()
            .replying("git", b"", 1)
            .replying("gpg2", b"", 0);
        let mode = EncryptionMode::PublicKey { recipients: vec![] };

        let err = service(&runner)
            .encrypt_file(Path::new("/tmp/plain"), Path::new("n.gpg"), &mode)
            .unwrap_err();

        assert!(matches!(err, CryptoEditError::RecipientUnresolved { .. }));
        assert!(runner.calls_to("gpg2").is_empty());
    }
}
