//! Synchronous command execution for demo recording.
//!
//! Every invocation blocks until the child exits; there are no timeouts and
//! no retries. Demo runs are short-lived top-level scripts, and a wedged
//! recorder is easier to diagnose interactively than through a killer.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

/// Non-zero child exit while exit-code checking was enabled.
///
/// Carried through anyhow; the binary downcasts it for reporting.
#[derive(Debug)]
pub struct ProcessFailed {
    pub command: Vec<String>,
    pub code: Option<i32>,
}

impl fmt::Display for ProcessFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(
                f,
                "command {:?} failed with exit code {}",
                self.command, code
            ),
            None => write!(f, "command {:?} terminated by signal", self.command),
        }
    }
}

impl std::error::Error for ProcessFailed {}

/// One command invocation: program, args, cwd, extra env, policy flags.
#[derive(Debug)]
pub struct ExecRequest {
    program: OsString,
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
    env: Vec<(OsString, OsString)>,
    check: bool,
    capture: bool,
}

impl ExecRequest {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            env: Vec::new(),
            check: true,
            capture: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn envs<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        self.env
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Fail on non-zero exit (default true).
    pub fn check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    /// Capture and return the child's stdout (default false).
    pub fn capture(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }

    /// Command words for error reporting, lossy on non-UTF-8 args.
    fn command_words(&self) -> Vec<String> {
        std::iter::once(&self.program)
            .chain(self.args.iter())
            .map(|s| s.to_string_lossy().into_owned())
            .collect()
    }
}

/// Run a command synchronously, waiting for it to exit.
///
/// Returns the captured stdout (trailing line endings trimmed) when capture
/// was requested, otherwise None. Non-zero exit with checking enabled maps
/// to a [`ProcessFailed`] error carrying the command words and exit code.
pub fn run(request: ExecRequest) -> Result<Option<String>> {
    let words = request.command_words();

    let mut cmd = Command::new(&request.program);
    cmd.args(&request.args);
    if let Some(ref cwd) = request.cwd {
        cmd.current_dir(cwd);
    }
    for (key, value) in &request.env {
        cmd.env(key, value);
    }

    let (status, stdout) = if request.capture {
        cmd.stdout(Stdio::piped());
        let output = cmd
            .output()
            .with_context(|| format!("failed to spawn {:?}", words))?;
        let text = String::from_utf8_lossy(&output.stdout)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        (output.status, Some(text))
    } else {
        let status = cmd
            .status()
            .with_context(|| format!("failed to spawn {:?}", words))?;
        (status, None)
    };

    if request.check && !status.success() {
        return Err(ProcessFailed {
            command: words,
            code: status.code(),
        }
        .into());
    }
    Ok(stdout)
}

/// Run `git <args>`; output is inherited, failure propagates as ProcessFailed.
pub fn run_git<I, S>(args: I, cwd: Option<&Path>, envs: &[(String, String)]) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut req = ExecRequest::new("git").args(args);
    if let Some(dir) = cwd {
        req = req.current_dir(dir);
    }
    req = req.envs(envs.iter().map(|(k, v)| (k.clone(), v.clone())));
    run(req).map(|_| ())
}

/// Default recorder binary; override with WT_DEMOS_VHS or an explicit name.
pub const DEFAULT_RECORDER: &str = "vhs";

/// Record a demo by handing the rendered tape to the terminal recorder.
///
/// The recorder is resolved on PATH up front so a missing binary surfaces
/// as NotFound (exit 127 at the CLI boundary) instead of a bare spawn error.
pub fn record_tape(tape_path: &Path, recorder: &str) -> Result<()> {
    let resolved = which::which(recorder).map_err(|_| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("recorder '{recorder}' not found in PATH"),
        )
    })?;
    run(ExecRequest::new(resolved).arg(tape_path)).map(|_| ())
}

/// Build the demoed binary with a fixed quiet cargo invocation.
pub fn build_quiet(repo_root: &Path) -> Result<()> {
    let use_color = crate::color::color_enabled_stderr();
    crate::color::log_info_stderr(use_color, "wt-demos: building binary (cargo build --quiet)");
    run(ExecRequest::new("cargo")
        .args(["build", "--quiet"])
        .current_dir(repo_root))
    .map(|_| ())
}
