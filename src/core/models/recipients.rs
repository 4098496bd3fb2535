use std::fmt;

/// How the edited plaintext is encrypted back. Chosen once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncryptionMode {
    /// Passphrase-based (`gpg -c`).
    Symmetric,
    /// Public-key encryption for the listed recipients. An empty list means
    /// "encrypt for myself", resolved from the git-configured email.
    PublicKey { recipients: Vec<String> },
}

impl fmt::Display for EncryptionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncryptionMode::Symmetric => write!(f, "symmetric"),
            EncryptionMode::PublicKey { .. } => write!(f, "public-key"),
        }
    }
}

/// Ordered, non-empty list of recipient identities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientSet(Vec<String>);

impl RecipientSet {
    /// Returns `None` when `recipients` is empty.
    pub fn new(recipients: Vec<String>) -> Option<Self> {
        if recipients.is_empty() {
            None
        } else {
            Some(Self(recipients))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for RecipientSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_slice().join(", "))
    }
}
