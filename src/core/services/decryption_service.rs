use std::io;
use std::path::{Path, PathBuf};

use crate::core::errors::{CryptoEditError, Result};
use crate::core::models::fingerprint::{Fingerprint, FingerprintWriter};
use crate::core::models::plaintext::{PlaintextWriter, TemporaryPlaintext};
use crate::core::traits::cipher::CipherBackend;

/// Result of the decrypt stage.
#[derive(Debug)]
pub struct Decrypted {
    pub plaintext: TemporaryPlaintext,
    /// `None` when the encrypted file did not exist yet.
    pub fingerprint: Option<Fingerprint>,
}

impl Decrypted {
    pub fn is_new_file(&self) -> bool {
        self.fingerprint.is_none()
    }
}

/// Decrypts an encrypted file into a fresh temporary plaintext file.
pub struct DecryptionService<C: CipherBackend> {
    pub cipher: C,
    pub temp_dir: PathBuf,
}

impl<C: CipherBackend> DecryptionService<C> {
    /// Decrypt `encrypted` into a temporary file, fingerprinting the
    /// plaintext on the way.
    ///
    /// A missing `encrypted` is not an error: the result is an empty
    /// temporary file with no fingerprint. Any other stat failure aborts
    /// before a temporary file is created.
    pub fn decrypt(&self, encrypted: &Path) -> Result<Decrypted> {
        let exists = match std::fs::metadata(encrypted) {
            Ok(_) => true,
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(source) => {
                return Err(CryptoEditError::StatFailed {
                    path: encrypted.to_path_buf(),
                    source,
                });
            }
        };

        let mut writer = PlaintextWriter::create(&self.temp_dir, encrypted)?;

        if !exists {
            return Ok(Decrypted {
                plaintext: writer.finish()?,
                fingerprint: None,
            });
        }

        // On failure `writer` is dropped here, deleting the partial plaintext.
        let mut tee = FingerprintWriter::new(writer.file_mut());
        self.cipher.decrypt_to(encrypted, &mut tee)?;
        let (_, fingerprint) = tee.finish()?;

        Ok(Decrypted {
            plaintext: writer.finish()?,
            fingerprint: Some(fingerprint),
        })
    }
}
