//! Fake collaborators for unit tests.

use std::cell::RefCell;
use std::io::{self, Write};

use crate::core::traits::process::{Invocation, ProcessRunner, RunStatus, Stdout};

type Handler = Box<dyn Fn(&Invocation, &mut dyn Write) -> io::Result<RunStatus>>;

/// Process runner that records every invocation and answers with canned
/// handlers keyed by program name. Unknown programs fail to launch.
#[derive(Default)]
pub struct FakeRunner {
    calls: RefCell<Vec<Invocation>>,
    handlers: Vec<(String, Handler)>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(
        mut self,
        program: &str,
        handler: impl Fn(&Invocation, &mut dyn Write) -> io::Result<RunStatus> + 'static,
    ) -> Self {
        self.handlers.push((program.to_string(), Box::new(handler)));
        self
    }

    /// Program prints `stdout` and exits with `code`.
    pub fn replying(self, program: &str, stdout: &[u8], code: i32) -> Self {
        let stdout = stdout.to_vec();
        self.on(program, move |_, out| {
            out.write_all(&stdout)?;
            Ok(RunStatus::exited(code))
        })
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    pub fn calls_to(&self, program: &str) -> Vec<Invocation> {
        self.calls()
            .into_iter()
            .filter(|c| c.program_name() == program)
            .collect()
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&self, invocation: &Invocation, stdout: Stdout<'_>) -> io::Result<RunStatus> {
        self.calls.borrow_mut().push(invocation.clone());

        let name = invocation.program_name();
        let (_, handler) = self
            .handlers
            .iter()
            .find(|(program, _)| *program == name)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{name}: not found")))?;

        match stdout {
            Stdout::Inherit => handler(invocation, &mut io::sink()),
            Stdout::Pipe(sink) => handler(invocation, sink),
        }
    }
}

/// Argument `i` of an invocation as a string.
pub fn arg(invocation: &Invocation, i: usize) -> String {
    invocation.args[i].to_string_lossy().into_owned()
}

/// All arguments of an invocation as strings.
pub fn args(invocation: &Invocation) -> Vec<String> {
    invocation
        .args
        .iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}
