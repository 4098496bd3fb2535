use std::io;
use std::process::{Command, Stdio};

use crate::core::traits::process::{Invocation, ProcessRunner, RunStatus, Stdout};

/// Runs programs as real child processes attached to this terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation, stdout: Stdout<'_>) -> io::Result<RunStatus> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit());

        let status = match stdout {
            Stdout::Inherit => cmd.stdout(Stdio::inherit()).status()?,
            Stdout::Pipe(sink) => {
                let mut child = cmd.stdout(Stdio::piped()).spawn()?;
                let copied = match child.stdout.take() {
                    Some(mut out) => io::copy(&mut out, sink).map(|_| ()),
                    None => Ok(()),
                };
                // Reap the child even if forwarding failed.
                let status = child.wait()?;
                copied?;
                status
            }
        };

        Ok(RunStatus {
            code: status.code(),
        })
    }
}
