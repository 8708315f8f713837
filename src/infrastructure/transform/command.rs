//! External command transform
//!
//! Each class file is piped through a child process: bytes in on stdin,
//! rewritten bytes out on stdout. A non-zero exit status rejects the file
//! and the child's stderr becomes the error message.

use std::io::{Read, Write};
use std::process::{Command, Stdio};

use crate::domain::ports::{ClassTransform, TransformError};

/// Longest stderr excerpt carried into an error message
const MAX_STDERR_CHARS: usize = 512;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTransform {
    name: String,
    program: String,
    args: Vec<String>,
}

impl CommandTransform {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        let program = program.into();
        Self {
            name: program.clone(),
            program,
            args,
        }
    }

    /// Build from `[program, args...]`; `None` for an empty argv
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.to_vec()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl ClassTransform for CommandTransform {
    fn name(&self) -> &str {
        &self.name
    }

    fn transform(&self, input: &[u8]) -> Result<Vec<u8>, TransformError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| TransformError::new(format!("failed to spawn: {e}")))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| TransformError::new("child stdin unavailable"))?;
        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| TransformError::new("child stdout unavailable"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| TransformError::new("child stderr unavailable"))?;

        // Feed stdin and drain stderr on their own threads so a child that
        // writes before it finishes reading cannot deadlock on full pipes.
        let (written, output, errors) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || {
                let result = stdin.write_all(input);
                drop(stdin);
                result
            });
            let err_reader = scope.spawn(move || {
                let mut buf = Vec::new();
                let _ = stderr.read_to_end(&mut buf);
                buf
            });

            let mut output = Vec::new();
            let read = stdout.read_to_end(&mut output).map(|_| output);

            let written = writer
                .join()
                .unwrap_or_else(|_| Err(std::io::Error::other("stdin writer panicked")));
            let errors = err_reader.join().unwrap_or_default();
            (written, read, errors)
        });

        let status = child
            .wait()
            .map_err(|e| TransformError::new(format!("failed to wait for child: {e}")))?;

        if !status.success() {
            let stderr = String::from_utf8_lossy(&errors);
            let excerpt: String = stderr.trim().chars().take(MAX_STDERR_CHARS).collect();
            return Err(TransformError::new(if excerpt.is_empty() {
                format!("exited with {status}")
            } else {
                format!("exited with {status}: {excerpt}")
            }));
        }

        // A child may legitimately exit without reading all of its input.
        if let Err(e) = written {
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(TransformError::new(format!("failed to write input: {e}")));
            }
        }

        output.map_err(|e| TransformError::new(format!("failed to read output: {e}")))
    }
}
