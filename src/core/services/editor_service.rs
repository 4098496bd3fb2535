use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::core::errors::{CryptoEditError, Result};
use crate::core::models::fingerprint::Fingerprint;
use crate::core::traits::process::{Invocation, ProcessRunner, Stdout};

/// Editor used when none is configured.
pub const DEFAULT_EDITOR: &str = "vim";

/// An editor command line such as `vim` or `code --wait`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    program: PathBuf,
    args: Vec<String>,
}

impl EditorCommand {
    /// Parse an editor setting. A value naming an existing file is the
    /// program as a whole, spaces included. Anything else is split with
    /// shell quoting rules and the first word is the program. Blank input
    /// falls back to [`DEFAULT_EDITOR`].
    pub fn parse(command: &str) -> Self {
        let command = command.trim();
        if command.is_empty() {
            return Self::parse(DEFAULT_EDITOR);
        }
        if Path::new(command).is_file() {
            return Self {
                program: PathBuf::from(command),
                args: Vec::new(),
            };
        }

        // Unbalanced quotes: run the value as given and let the launch fail.
        let words = shell_words::split(command).unwrap_or_else(|_| vec![command.to_string()]);
        let mut words = words.into_iter();
        match words.next() {
            Some(program) if !program.is_empty() => Self {
                program: PathBuf::from(program),
                args: words.collect(),
            },
            _ => Self::parse(DEFAULT_EDITOR),
        }
    }

    fn invocation(&self, file: &Path) -> Invocation {
        Invocation::new(&self.program).args(&self.args).arg(file)
    }
}

impl fmt::Display for EditorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// What happened in the edit stage.
#[derive(Debug)]
pub struct EditOutcome {
    /// Fingerprint of the file after the editor exited.
    pub fingerprint: Fingerprint,
    /// Why the editor failed, if it did. Not fatal on its own.
    pub failure: Option<String>,
}

/// Runs the user's editor on the temporary plaintext.
pub struct EditorService<R: ProcessRunner> {
    pub editor: EditorCommand,
    pub runner: R,
}

impl<R: ProcessRunner> EditorService<R> {
    /// Open `file` in the editor, block until it exits, then fingerprint
    /// whatever is on disk.
    ///
    /// Editor failures are recorded in the outcome; only failing to read
    /// the file back is an error.
    pub fn edit(&self, file: &Path) -> Result<EditOutcome> {
        let inv = self.editor.invocation(file);

        let failure = match self.runner.run(&inv, Stdout::Inherit) {
            Ok(status) if status.success() => None,
            Ok(status) => Some(format!("'{}' failed with {status}", self.editor)),
            Err(e) => Some(format!("Failed to run '{}': {e}", self.editor)),
        };

        let read_failed = |source: std::io::Error| CryptoEditError::ReadEdited {
            path: file.to_path_buf(),
            source,
        };
        let edited = File::open(file).map_err(read_failed)?;
        let fingerprint = Fingerprint::of_reader(edited).map_err(read_failed)?;

        Ok(EditOutcome {
            fingerprint,
            failure,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::process::RunStatus;
    use crate::testing::{FakeRunner, args};

    #[test]
    fn parse_splits_program_and_arguments() {
        let cmd = EditorCommand::parse("code --wait --new-window");
        assert_eq!(cmd.program, PathBuf::from("code"));
        assert_eq!(cmd.args, ["--wait", "--new-window"]);
        assert_eq!(cmd.to_string(), "code --wait --new-window");
    }

    #[test]
    fn path_with_spaces_is_one_program() {
        let dir = tempfile::tempdir().unwrap();
        let editor = dir.path().join("my editors").join("ed");
        std::fs::create_dir(editor.parent().unwrap()).unwrap();
        std::fs::write(&editor, b"#!/bin/sh\n").unwrap();

        let cmd = EditorCommand::parse(editor.to_str().unwrap());

        assert_eq!(cmd.program, editor);
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn quoted_program_keeps_its_spaces() {
        let cmd = EditorCommand::parse("'/opt/My Editor/bin/ed' --wait");
        assert_eq!(cmd.program, PathBuf::from("/opt/My Editor/bin/ed"));
        assert_eq!(cmd.args, ["--wait"]);
    }

    #[test]
    fn unbalanced_quote_is_kept_verbatim() {
        let cmd = EditorCommand::parse("vim 'oops");
        assert_eq!(cmd.program, PathBuf::from("vim 'oops"));
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn blank_command_uses_default() {
        assert_eq!(EditorCommand::parse("  "), EditorCommand::parse(DEFAULT_EDITOR));
    }

    #[test]
    fn file_is_passed_last() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let runner = FakeRunner::new().replying("code", b"", 0);
        let service = EditorService {
            editor: EditorCommand::parse("code --wait"),
            runner: &runner,
        };

        service.edit(tmp.path()).unwrap();

        let call = &runner.calls()[0];
        assert_eq!(args(call)[0], "--wait");
        assert_eq!(call.args[1], tmp.path().as_os_str());
    }

    #[test]
    fn fingerprints_content_written_by_editor() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let runner = FakeRunner::new().on("vim", |inv, _| {
            std::fs::write(&inv.args[0], b"hello")?;
            Ok(RunStatus::SUCCESS)
        });
        let service = EditorService {
            editor: EditorCommand::parse("vim"),
            runner: &runner,
        };

        let outcome = service.edit(tmp.path()).unwrap();

        assert!(outcome.failure.is_none());
        assert_eq!(outcome.fingerprint, Fingerprint::of_bytes(b"hello"));
    }

    #[test]
    fn editor_exit_failure_is_not_fatal() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), b"untouched").unwrap();
        let runner = FakeRunner::new().replying("vim", b"", 1);
        let service = EditorService {
            editor: EditorCommand::parse("vim"),
            runner: &runner,
        };

        let outcome = service.edit(tmp.path()).unwrap();

        assert!(outcome.failure.unwrap().contains("exit status 1"));
        assert_eq!(outcome.fingerprint, Fingerprint::of_bytes(b"untouched"));
    }

    #[test]
    fn editor_launch_failure_is_not_fatal() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let service = EditorService {
            editor: EditorCommand::parse("no-such-editor"),
            runner: FakeRunner::new(),
        };

        let outcome = service.edit(tmp.path()).unwrap();
        assert!(outcome.failure.unwrap().contains("Failed to run 'no-such-editor'"));
    }

    #[test]
    fn unreadable_file_after_edit_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain");
        std::fs::write(&file, b"x").unwrap();
        let runner = FakeRunner::new().on("vim", |inv, _| {
            std::fs::remove_file(&inv.args[0])?;
            Ok(RunStatus::SUCCESS)
        });
        let service = EditorService {
            editor: EditorCommand::parse("vim"),
            runner: &runner,
        };

        let err = service.edit(&file).unwrap_err();
        assert!(matches!(err, CryptoEditError::ReadEdited { .. }));
    }
}
