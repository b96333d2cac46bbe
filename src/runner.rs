use crate::error::CheckError;
use crate::utils::file;
use std::env;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// An invocation of the program under test
#[derive(Clone, Debug)]
pub struct Target {
    pub program: PathBuf,
    pub input_file: PathBuf,
    pub timeout: Duration,
}

impl Target {
    pub fn new<P, Q>(program: P, input_file: Q) -> Self
    where
        P: Into<PathBuf>,
        Q: Into<PathBuf>,
    {
        Self {
            program: program.into(),
            input_file: input_file.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn display_name(&self) -> String {
        self.program.display().to_string()
    }
}

/// Everything captured from one run of the target
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

#[derive(Clone, Copy, Debug)]
enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    fn name(self) -> &'static str {
        match self {
            Self::Stdout => "standard output",
            Self::Stderr => "standard error",
        }
    }
}

type PipeMessage = (Stream, io::Result<Vec<u8>>);

/// Run the target with its input file as the only argument
///
/// Output is buffered until the target exits. A non-zero exit code is not an
/// error here; it is returned in the `ExecutionResult`. On unix a target
/// killed by a signal reports the negated signal number as its exit code.
pub fn run(target: &Target) -> Result<ExecutionResult, CheckError> {
    let program = target.display_name();
    let current_dir = env::current_dir().map_err(|source| CheckError::Io {
        program: program.clone(),
        source,
    })?;

    let executable = file::find_executable_path(&target.program, current_dir).map_err(
        |source| CheckError::ProgramNotFound {
            program: program.clone(),
            source,
        },
    )?;
    debug!(executable = %executable.display(), "resolved target program");

    let mut cmd = Command::new(&executable);
    cmd.arg(&target.input_file);
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    // A timeout too large to represent means no deadline at all
    let deadline = Instant::now().checked_add(target.timeout);
    let mut child = cmd.spawn().map_err(|source| CheckError::FailedToSpawn {
        program: program.clone(),
        source,
    })?;
    debug!(pid = child.id(), input_file = %target.input_file.display(), "spawned target");

    let result = capture(&mut child, target, deadline);
    if result.is_err() {
        kill_and_reap(&mut child);
    }

    result
}

/// Collect output and exit status from a spawned child
///
/// The caller is responsible for killing the child if this fails.
fn capture(
    child: &mut Child,
    target: &Target,
    deadline: Option<Instant>,
) -> Result<ExecutionResult, CheckError> {
    let program = target.display_name();
    let receiver = spawn_pipe_readers(child);

    let mut stdout = None;
    let mut stderr = None;
    while stdout.is_none() || stderr.is_none() {
        let message = match deadline {
            Some(deadline) => {
                receiver.recv_timeout(deadline.saturating_duration_since(Instant::now()))
            }
            None => receiver
                .recv()
                .map_err(|_| RecvTimeoutError::Disconnected),
        };

        match message {
            Ok((stream, result)) => {
                let buf = result.map_err(|source| CheckError::Io {
                    program: program.clone(),
                    source,
                })?;
                let text = decode(buf, stream, &program)?;
                match stream {
                    Stream::Stdout => stdout = Some(text),
                    Stream::Stderr => stderr = Some(text),
                }
            }
            Err(RecvTimeoutError::Timeout) => return Err(timeout_error(child, target)),
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    let exit_status = match wait_until(child, deadline, &program)? {
        Some(exit_status) => exit_status,
        None => return Err(timeout_error(child, target)),
    };
    debug!(status = %exit_status, "target exited");

    let exit_code = status_code(exit_status).ok_or(CheckError::MissingExitCode { program })?;

    Ok(ExecutionResult {
        stdout: stdout.unwrap_or_default(),
        stderr: stderr.unwrap_or_default(),
        exit_code,
    })
}

/// Drain stdout and stderr on their own threads so neither pipe can fill up
/// and block the child
fn spawn_pipe_readers(child: &mut Child) -> Receiver<PipeMessage> {
    let (sender, receiver) = mpsc::channel();

    if let Some(mut pipe) = child.stdout.take() {
        let sender = sender.clone();
        thread::spawn(move || {
            let _ = sender.send((Stream::Stdout, read_pipe(&mut pipe)));
        });
    }

    if let Some(mut pipe) = child.stderr.take() {
        thread::spawn(move || {
            let _ = sender.send((Stream::Stderr, read_pipe(&mut pipe)));
        });
    }

    receiver
}

fn read_pipe<T>(pipe: &mut T) -> io::Result<Vec<u8>>
where
    T: Read,
{
    let mut buf: Vec<u8> = vec![];
    pipe.read_to_end(&mut buf)?;
    Ok(buf)
}

fn decode(buf: Vec<u8>, stream: Stream, program: &str) -> Result<String, CheckError> {
    String::from_utf8(buf).map_err(|_| CheckError::FailedToDecodeOutput {
        program: program.to_owned(),
        stream: stream.name(),
    })
}

/// Poll the child until it exits or the deadline passes
///
/// Returns `None` on timeout, leaving the child running. Without a deadline
/// this blocks until the child exits.
fn wait_until(
    child: &mut Child,
    deadline: Option<Instant>,
    program: &str,
) -> Result<Option<ExitStatus>, CheckError> {
    let io_error = |source| CheckError::Io {
        program: program.to_owned(),
        source,
    };

    let deadline = match deadline {
        Some(deadline) => deadline,
        None => return child.wait().map(Some).map_err(io_error),
    };

    loop {
        let status = child.try_wait().map_err(io_error)?;
        if status.is_some() {
            return Ok(status);
        }

        let now = Instant::now();
        if now >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL.min(deadline - now));
    }
}

#[cfg(unix)]
fn status_code(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;

    status.code().or_else(|| status.signal().map(|signal| -signal))
}

#[cfg(not(unix))]
fn status_code(status: ExitStatus) -> Option<i32> {
    status.code()
}

fn timeout_error(child: &Child, target: &Target) -> CheckError {
    warn!(pid = child.id(), timeout = ?target.timeout, "target timed out, killing it");

    CheckError::Timeout {
        program: target.display_name(),
        timeout: target.timeout,
    }
}

fn kill_and_reap(child: &mut Child) {
    // The child may already have exited on its own
    let _ = child.kill();
    let _ = child.wait();
}

// TESTS
