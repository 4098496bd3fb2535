use std::io::Write;
use std::path::Path;

use crate::core::errors::Result;
use crate::core::models::recipients::RecipientSet;

/// Port for the external encryption engine.
///
/// Implementations live in `adapters::cipher` (e.g. GpgBackend).
/// The core layer only depends on this trait, never on a concrete backend.
pub trait CipherBackend {
    /// Decrypt `source`, streaming the plaintext into `sink`.
    fn decrypt_to(&self, source: &Path, sink: &mut dyn Write) -> Result<()>;

    /// Encrypt the plaintext file `source` into `dest`, overwriting it.
    ///
    /// `None` selects passphrase (symmetric) mode; otherwise the file is
    /// encrypted once for every recipient in the set.
    fn encrypt(&self, source: &Path, dest: &Path, recipients: Option<&RecipientSet>) -> Result<()>;

    /// Human-readable name of this backend (e.g. "gpg2").
    fn name(&self) -> &str;
}

impl<C: CipherBackend + ?Sized> CipherBackend for &C {
    fn decrypt_to(&self, source: &Path, sink: &mut dyn Write) -> Result<()> {
        (**self).decrypt_to(source, sink)
    }

    fn encrypt(&self, source: &Path, dest: &Path, recipients: Option<&RecipientSet>) -> Result<()> {
        (**self).encrypt(source, dest, recipients)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
