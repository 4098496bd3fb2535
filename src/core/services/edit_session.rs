use std::io;
use std::path::{Path, PathBuf};

use crate::core::errors::Result;
use crate::core::models::fingerprint::Fingerprint;
use crate::core::models::plaintext::TemporaryPlaintext;
use crate::core::models::recipients::{EncryptionMode, RecipientSet};
use crate::core::services::change_detector::{self, Change};
use crate::core::services::decryption_service::{Decrypted, DecryptionService};
use crate::core::services::editor_service::EditorService;
use crate::core::services::encryption_service::EncryptionService;
use crate::core::traits::cipher::CipherBackend;
use crate::core::traits::identity::IdentitySource;
use crate::core::traits::process::ProcessRunner;

/// Progress notifications emitted while a session runs.
#[derive(Debug)]
pub enum SessionEvent {
    /// The encrypted file does not exist yet; editing starts from empty.
    NewFile { plaintext: PathBuf },
    Decrypted { plaintext: PathBuf },
    /// The editor failed. An existing file is still compared; a new one
    /// is left uncreated.
    EditorFailed { reason: String },
    Encrypting,
    /// The temporary plaintext could not be deleted.
    CleanupFailed { plaintext: PathBuf, error: io::Error },
}

/// How a session that did not abort ended.
#[derive(Debug)]
pub struct SessionOutcome {
    pub change: Change,
    /// Recipients used for public-key encryption.
    pub recipients: Option<RecipientSet>,
    pub editor_failed: bool,
}

/// Decrypt → edit → compare → re-encrypt if changed, for one file.
///
/// The temporary plaintext is deleted on every exit once created: the
/// happy path closes it explicitly, and error paths drop it.
pub struct EditSession<D, E, I, R>
where
    D: CipherBackend,
    E: CipherBackend,
    I: IdentitySource,
    R: ProcessRunner,
{
    pub decryption: DecryptionService<D>,
    pub editor: EditorService<R>,
    pub encryption: EncryptionService<E, I>,
}

impl<D, E, I, R> EditSession<D, E, I, R>
where
    D: CipherBackend,
    E: CipherBackend,
    I: IdentitySource,
    R: ProcessRunner,
{
    pub fn run(
        &self,
        encrypted: &Path,
        mode: &EncryptionMode,
        notify: &mut dyn FnMut(SessionEvent),
    ) -> Result<SessionOutcome> {
        let decrypted = self.decryption.decrypt(encrypted)?;

        let path = decrypted.plaintext.path().to_path_buf();
        notify(if decrypted.is_new_file() {
            SessionEvent::NewFile {
                plaintext: path.clone(),
            }
        } else {
            SessionEvent::Decrypted {
                plaintext: path.clone(),
            }
        });

        let Decrypted {
            plaintext,
            fingerprint,
        } = decrypted;

        let result =
            self.edit_and_encrypt(&plaintext, fingerprint.as_ref(), encrypted, mode, notify);

        // The editor may have removed the file itself.
        match plaintext.close() {
            Err(error) if error.kind() != io::ErrorKind::NotFound => {
                notify(SessionEvent::CleanupFailed {
                    plaintext: path,
                    error,
                });
            }
            _ => {}
        }

        result
    }

    fn edit_and_encrypt(
        &self,
        plaintext: &TemporaryPlaintext,
        before: Option<&Fingerprint>,
        encrypted: &Path,
        mode: &EncryptionMode,
        notify: &mut dyn FnMut(SessionEvent),
    ) -> Result<SessionOutcome> {
        let edit = self.editor.edit(plaintext.path())?;
        let editor_failed = edit.failure.is_some();
        if let Some(reason) = edit.failure {
            notify(SessionEvent::EditorFailed { reason });
        }

        // A failed editor on a file that never existed made no edit.
        let change = match (before, editor_failed) {
            (None, true) => Change::Unchanged,
            _ => change_detector::detect(before, &edit.fingerprint),
        };
        let recipients = match change {
            Change::Unchanged => None,
            Change::Changed => {
                notify(SessionEvent::Encrypting);
                self.encryption
                    .encrypt_file(plaintext.path(), encrypted, mode)?
            }
        };

        Ok(SessionOutcome {
            change,
            recipients,
            editor_failed,
        })
    }
}
