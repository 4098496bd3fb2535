pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::core::models::recipients::EncryptionMode;

/// Edit GPG-encrypted files in your editor without leaving plaintext behind.
///
/// Decrypts FILE to a private temporary file, opens it in your editor and
/// re-encrypts it only if you changed something. A FILE that does not exist
/// yet is created.
#[derive(Parser, Debug)]
#[command(name = "cryptoedit", version)]
pub struct Cli {
    /// Encrypted file to edit
    pub file: PathBuf,

    /// Encrypt with a passphrase (gpg --symmetric)
    #[arg(short, long, conflicts_with = "recipient")]
    pub symmetric: bool,

    /// Encrypt for this recipient. Repeat for several; with none, your git
    /// user.email is used
    #[arg(short, long, value_name = "RECIPIENT")]
    pub recipient: Vec<String>,

    /// GPG binary to use [default: gpg2]
    #[arg(short, long, env = "CRYPTOEDIT_GPG")]
    pub gpg: Option<String>,

    /// Editor to open the plaintext with [default: vim]
    #[arg(long, env = "EDITOR")]
    pub editor: Option<String>,

    /// Path to alternative config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Show external commands and temporary paths
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode: only show warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn mode(&self) -> EncryptionMode {
        if self.symmetric {
            EncryptionMode::Symmetric
        } else {
            EncryptionMode::PublicKey {
                recipients: self.recipient.clone(),
            }
        }
    }

    pub fn verbosity(&self) -> output::Verbosity {
        match (self.quiet, self.verbose) {
            (true, _) => output::Verbosity::Quiet,
            (_, true) => output::Verbosity::Verbose,
            _ => output::Verbosity::Normal,
        }
    }
}
