use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A single external program call: the program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl Invocation {
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Program name without its directory, for messages.
    pub fn program_name(&self) -> String {
        self.program
            .file_name()
            .unwrap_or(self.program.as_os_str())
            .to_string_lossy()
            .into_owned()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Where the child's standard output goes. Stdin and stderr are always
/// attached to the invoking terminal.
pub enum Stdout<'a> {
    Inherit,
    Pipe(&'a mut dyn Write),
}

/// Exit status of a finished child. `code` is `None` when the child was
/// killed by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    pub code: Option<i32>,
}

impl RunStatus {
    #[cfg(test)]
    pub const SUCCESS: RunStatus = RunStatus { code: Some(0) };

    #[cfg(test)]
    pub fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Port for running external programs (gpg, the editor, git).
///
/// Implementations live in `adapters::process`. Services only depend on
/// this trait so they can be exercised against a fake runner.
pub trait ProcessRunner {
    /// Run `invocation` to completion, blocking until it exits.
    ///
    /// An `Err` means the program could not be started or its output could
    /// not be forwarded; a non-zero exit is reported through `RunStatus`.
    fn run(&self, invocation: &Invocation, stdout: Stdout<'_>) -> io::Result<RunStatus>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn run(&self, invocation: &Invocation, stdout: Stdout<'_>) -> io::Result<RunStatus> {
        (**self).run(invocation, stdout)
    }
}
