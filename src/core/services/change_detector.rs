use crate::core::models::fingerprint::Fingerprint;

/// Whether the plaintext changed during the edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Unchanged,
    Changed,
}

/// Compare the pre-edit and post-edit fingerprints.
///
/// Only two present, equal fingerprints count as unchanged. A missing
/// pre-edit fingerprint (new file) always counts as changed, so edits are
/// never silently dropped.
pub fn detect(before: Option<&Fingerprint>, after: &Fingerprint) -> Change {
    match before {
        Some(before) if before == after => Change::Unchanged,
        _ => Change::Changed,
    }
}
