use std::ffi::OsStr;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile, TempPath};

use crate::core::errors::{CryptoEditError, Result};

const TEMP_PREFIX: &str = "cryptoedit";

/// The decrypted copy of an encrypted file, living in the temp directory.
///
/// Owned by a single run. The file is deleted when this value is dropped,
/// so every early return and propagated error removes it too.
#[derive(Debug)]
pub struct TemporaryPlaintext {
    path: TempPath,
}

/// An open, still-being-written temporary file. Becomes a
/// [`TemporaryPlaintext`] once writing is done.
pub struct PlaintextWriter {
    file: NamedTempFile,
}

impl PlaintextWriter {
    /// Create an empty, owner-only file in `dir`.
    ///
    /// The suffix mirrors the plaintext extension of `encrypted`
    /// (`notes.md.gpg` → `.md`) so editors pick the right syntax.
    pub fn create(dir: &Path, encrypted: &Path) -> Result<Self> {
        let suffix = plaintext_suffix(encrypted);
        let file = Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(&suffix)
            .tempfile_in(dir)
            .map_err(|source| CryptoEditError::TempFile {
                dir: dir.to_path_buf(),
                source,
            })?;
        Ok(Self { file })
    }

    pub fn file_mut(&mut self) -> &mut File {
        self.file.as_file_mut()
    }

    /// Sync contents to disk and close the handle, keeping the file.
    pub fn finish(self) -> Result<TemporaryPlaintext> {
        self.file.as_file().sync_all()?;
        Ok(TemporaryPlaintext {
            path: self.file.into_temp_path(),
        })
    }
}

impl TemporaryPlaintext {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the file now, reporting failure instead of ignoring it.
    pub fn close(self) -> io::Result<()> {
        self.path.close()
    }
}

/// Suffix for the temp file: the extension left after stripping the
/// encryption extension, or nothing.
fn plaintext_suffix(encrypted: &Path) -> String {
    let stem = match encrypted.extension().and_then(OsStr::to_str) {
        Some("gpg" | "pgp" | "asc") => encrypted.file_stem().map(PathBuf::from),
        _ => return String::new(),
    };

    stem.as_deref()
        .and_then(Path::extension)
        .and_then(OsStr::to_str)
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}
