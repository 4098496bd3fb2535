use std::path::Path;

use crate::adapters::cipher::gpg_backend::GpgBackend;
use crate::adapters::git::git_identity::GitIdentity;
use crate::adapters::process::system_runner::SystemRunner;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::recipients::EncryptionMode;
use crate::core::services::change_detector::Change;
use crate::core::services::decryption_service::DecryptionService;
use crate::core::services::edit_session::{EditSession, SessionEvent, SessionOutcome};
use crate::core::services::editor_service::EditorService;
use crate::core::services::encryption_service::EncryptionService;
use crate::core::traits::cipher::CipherBackend;

/// Execute `cryptoedit <file>`.
///
/// Decrypts `file`, opens it in the configured editor and re-encrypts it
/// if the content changed.
pub fn execute(file: &Path, config: &AppConfig) -> Result<()> {
    let runner = SystemRunner;
    let gpg = GpgBackend::new(&config.gpg, runner);

    let session = EditSession {
        decryption: DecryptionService {
            cipher: &gpg,
            temp_dir: config.temp_dir.clone(),
        },
        editor: EditorService {
            editor: config.editor.clone(),
            runner,
        },
        encryption: EncryptionService {
            cipher: &gpg,
            identity: GitIdentity::new(&config.git, runner),
        },
    };

    output::detail(&format!("GPG: {}", config.gpg.display()));
    output::detail(&format!("Editor: {}", config.editor));
    output::detail(&format!("Mode: {}", config.mode));

    let outcome = session.run(file, &config.mode, &mut |event| {
        report_event(event, file, &config.mode, gpg.name())
    })?;

    report_outcome(&outcome, file);
    Ok(())
}

fn report_event(event: SessionEvent, file: &Path, mode: &EncryptionMode, cipher: &str) {
    match event {
        SessionEvent::NewFile { plaintext } => {
            output::info(&format!(
                "{} does not exist, creating new encrypted file",
                file.display()
            ));
            output::detail(&format!("Plaintext: {}", plaintext.display()));
        }
        SessionEvent::Decrypted { plaintext } => {
            output::detail(&format!("Decrypted to {}", plaintext.display()));
        }
        SessionEvent::EditorFailed { reason } => {
            output::warning(&format!(
                "Editor failed: {reason}\n    Your edits may not have been applied."
            ));
        }
        SessionEvent::Encrypting => {
            output::detail(&format!("Encrypting {} with {cipher} ({mode})", file.display()));
        }
        SessionEvent::CleanupFailed { plaintext, error } => {
            output::warning(&format!(
                "Could not remove plaintext {}: {error}\n    Delete it by hand.",
                plaintext.display()
            ));
        }
    }
}

fn report_outcome(outcome: &SessionOutcome, file: &Path) {
    match (&outcome.change, &outcome.recipients) {
        (Change::Unchanged, _) if outcome.editor_failed => {
            output::warning(&format!("{} left as it was, nothing encrypted", file.display()));
        }
        (Change::Unchanged, _) => {
            output::info(&format!("{} not changed, not encrypting", file.display()));
        }
        (Change::Changed, Some(recipients)) => {
            output::success(&format!("Encrypted {} for {recipients}", file.display()));
        }
        (Change::Changed, None) => {
            output::success(&format!("Encrypted {} with passphrase", file.display()));
        }
    }
}
