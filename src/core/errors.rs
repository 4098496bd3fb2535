use std::path::PathBuf;

/// All domain errors for cryptoedit.
///
/// Each variant names the operation, the path involved and the
/// underlying cause, so a failed run can be diagnosed without rerunning it.
#[derive(Debug, thiserror::Error)]
pub enum CryptoEditError {
    #[error(
        "Cannot inspect {path}: {source}\n\n  \
         Check that the path is correct and that you can read it."
    )]
    StatFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot create temporary file in {dir}: {source}")]
    TempFile {
        dir: PathBuf,
        source: std::io::Error,
    },

    #[error(
        "Decryption of {path} failed: {reason}\n\n  \
         Solutions:\n    \
         → Check the passphrase or that your private key is in the keyring\n    \
         → Try it by hand: gpg -d {path}"
    )]
    DecryptionFailed { path: PathBuf, reason: String },

    #[error("Cannot read edited file {path}: {source}")]
    ReadEdited {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(
        "Cannot determine a recipient: {reason}\n\n  \
         Solutions:\n    \
         → Pass one explicitly: cryptoedit <file> -r <recipient>\n    \
         → Or configure git: git config --global user.email you@example.com\n    \
         → Or use a passphrase instead: cryptoedit -s <file>"
    )]
    RecipientUnresolved { reason: String },

    #[error(
        "Encryption of {source_path} into {dest} failed: {reason}\n\n  \
         {dest} was not replaced."
    )]
    EncryptionFailed {
        source_path: PathBuf,
        dest: PathBuf,
        reason: String,
    },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CryptoEditError>;
