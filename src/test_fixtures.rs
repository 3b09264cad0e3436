//! Test fixtures and utilities for reducing test setup duplication.
//!
//! This module provides:
//! - Temp directories created outside the current working directory
//! - [`FakeGit`]: a recording [`GitRunner`] that materializes a canned tree
//! - [`ScriptedPrompter`]: a [`Prompter`] answering from a fixed script
//! - [`FakePlatform`]: a [`Platform`] with a configurable symlink capability
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{FakeGit, ScriptedPrompter, create_temp_dir};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_temp_dir();
//!     let git = FakeGit::new().with_tree(&["skills/pdf"]).failing("pull");
//!     let mut prompter = ScriptedPrompter::new().texts(&["1", "."]);
//! }
//! ```

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use crate::config::{Paths, RunContext};
use crate::error::{Result, SkillError};
use crate::git::{GitOutput, GitRunner};
use crate::platform::Platform;
use crate::ui::Prompter;

/// Create a temp directory in the system temp location.
///
/// Uses `crate::temp::temp_dir_base()` to ensure temp dirs are never
/// created under the current working directory.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// Create every relative directory in `dirs` under `root`
///
/// # Panics
///
/// Panics if a directory cannot be created.
pub fn make_dirs(root: &Path, dirs: &[&str]) {
    for dir in dirs {
        fs::create_dir_all(root.join(dir)).expect("Failed to create directory");
    }
}

/// A skill directory with a SKILL.md and one nested file
///
/// # Panics
///
/// Panics if the files cannot be written.
pub fn write_skill(dir: &Path, name: &str) {
    fs::create_dir_all(dir.join("scripts")).expect("Failed to create skill directory");
    fs::write(
        dir.join("SKILL.md"),
        format!("---\nname: {name}\ndescription: Test skill {name}\n---\n# {name}\n"),
    )
    .expect("Failed to write SKILL.md");
    fs::write(dir.join("scripts/run.sh"), "echo ok\n").expect("Failed to write script");
}

/// Run context rooted at `home`, not a dry run
#[must_use]
pub fn test_context(home: &Path) -> RunContext {
    RunContext::new(Paths::new(home))
}

/// In-memory sink for log output captured by [`capture_logs`]
#[derive(Debug, Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("log buffer poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber and return its formatted log output
///
/// # Panics
///
/// Panics if the log buffer lock is poisoned.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buffer.0.lock().expect("log buffer poisoned")).into_owned();
    (out, logs)
}

/// Recording stand-in for the git executable.
///
/// `clone` materializes the configured tree into its last argument, `pull`
/// into the working directory, `init` drops [`FakeGit::INIT_MARKER`] into the
/// working directory. Commands matching a [`FakeGit::failing`] prefix exit
/// non-zero without side effects.
#[derive(Debug)]
pub struct FakeGit {
    version_output: String,
    ls_remote_output: String,
    failing: Vec<String>,
    tree: Vec<String>,
    missing: bool,
    calls: RefCell<Vec<String>>,
}

impl FakeGit {
    /// File written by a successful `init`
    pub const INIT_MARKER: &'static str = ".fake-git-init";

    #[must_use]
    pub fn new() -> Self {
        Self {
            version_output: "git version 2.43.0\n".to_string(),
            ls_remote_output: "ref: refs/heads/main\tHEAD\n".to_string(),
            failing: Vec::new(),
            tree: Vec::new(),
            missing: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A git that cannot be spawned at all
    #[must_use]
    pub fn missing() -> Self {
        Self {
            missing: true,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_version_output(mut self, output: &str) -> Self {
        self.version_output = output.to_string();
        self
    }

    #[must_use]
    pub fn with_head_branch(self, branch: &str) -> Self {
        self.with_ls_remote_output(&format!("ref: refs/heads/{branch}\tHEAD\n"))
    }

    #[must_use]
    pub fn with_ls_remote_output(mut self, output: &str) -> Self {
        self.ls_remote_output = output.to_string();
        self
    }

    /// Make every command whose joined arguments start with `prefix` fail
    #[must_use]
    pub fn failing(mut self, prefix: &str) -> Self {
        self.failing.push(prefix.to_string());
        self
    }

    /// Directories (relative to the checkout) created by clone and pull.
    /// Each leaf receives a SKILL.md named after it.
    #[must_use]
    pub fn with_tree(mut self, dirs: &[&str]) -> Self {
        self.tree = dirs.iter().map(|d| (*d).to_string()).collect();
        self
    }

    /// Every invocation so far, arguments joined by spaces
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn materialize(&self, root: &Path) {
        fs::create_dir_all(root.join(".git")).expect("Failed to create .git");
        fs::write(root.join(".git/HEAD"), "ref: refs/heads/main\n").expect("Failed to write HEAD");
        for dir in &self.tree {
            let path = root.join(dir);
            let name = path
                .file_name()
                .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
            write_skill(&path, &name);
        }
    }
}

impl Default for FakeGit {
    fn default() -> Self {
        Self::new()
    }
}

impl GitRunner for FakeGit {
    fn run(&self, args: &[&str], cwd: Option<&Path>) -> Result<GitOutput> {
        let joined = args.join(" ");
        self.calls.borrow_mut().push(joined.clone());

        if self.missing {
            return Err(SkillError::GitNotFound {
                program: "git".to_string(),
                reason: "No such file or directory".to_string(),
            });
        }

        if self.failing.iter().any(|p| joined.starts_with(p.as_str())) {
            return Ok(GitOutput {
                success: false,
                stdout: String::new(),
                stderr: "fatal: simulated failure".to_string(),
            });
        }

        let cwd = cwd.map(Path::to_path_buf).unwrap_or_default();
        let stdout = match args.first().copied() {
            Some("--version") => self.version_output.clone(),
            Some("ls-remote") => self.ls_remote_output.clone(),
            Some("init") => {
                fs::write(cwd.join(Self::INIT_MARKER), "").expect("Failed to write init marker");
                String::new()
            }
            Some("clone") => {
                let target = PathBuf::from(args.last().copied().unwrap_or_default());
                self.materialize(&target);
                String::new()
            }
            Some("pull") => {
                self.materialize(&cwd);
                String::new()
            }
            _ => String::new(),
        };

        Ok(GitOutput {
            success: true,
            stdout,
            stderr: String::new(),
        })
    }
}

/// One scripted operator answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Confirm(bool),
    Select(Vec<usize>),
}

/// Prompter that replays a fixed list of answers in order.
///
/// A prompt with no matching answer left fails with
/// [`SkillError::PromptFailed`], so a wrong script terminates instead of
/// looping forever.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    output: Vec<String>,
    warnings: Vec<String>,
    prompts: Vec<String>,
}

impl ScriptedPrompter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn texts(mut self, answers: &[&str]) -> Self {
        self.answers
            .extend(answers.iter().map(|a| Answer::Text((*a).to_string())));
        self
    }

    #[must_use]
    pub fn confirms(mut self, answer: bool) -> Self {
        self.answers.push_back(Answer::Confirm(answer));
        self
    }

    #[must_use]
    pub fn selects(mut self, indices: &[usize]) -> Self {
        self.answers.push_back(Answer::Select(indices.to_vec()));
        self
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Messages of every prompt shown, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty()
    }

    fn next(&mut self, message: &str) -> Result<Answer> {
        self.prompts.push(message.to_string());
        self.answers.pop_front().ok_or_else(|| SkillError::PromptFailed {
            message: format!("no scripted answer for '{message}'"),
        })
    }
}

fn mismatch(expected: &str, got: &Answer) -> SkillError {
    SkillError::PromptFailed {
        message: format!("expected {expected} answer, script has {got:?}"),
    }
}

impl Prompter for ScriptedPrompter {
    fn say(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn warn(&mut self, line: &str) {
        self.warnings.push(line.to_string());
    }

    fn input(&mut self, message: &str) -> Result<String> {
        match self.next(message)? {
            Answer::Text(text) => Ok(text),
            other => Err(mismatch("text", &other)),
        }
    }

    fn confirm(&mut self, message: &str, _default: bool) -> Result<bool> {
        match self.next(message)? {
            Answer::Confirm(yes) => Ok(yes),
            other => Err(mismatch("confirm", &other)),
        }
    }

    fn multi_select(
        &mut self,
        message: &str,
        options: &[String],
        _defaults: &[usize],
    ) -> Result<Vec<usize>> {
        match self.next(message)? {
            Answer::Select(indices) => {
                if indices.iter().any(|i| *i >= options.len()) {
                    return Err(SkillError::PromptFailed {
                        message: format!("scripted selection {indices:?} out of range"),
                    });
                }
                Ok(indices)
            }
            other => Err(mismatch("select", &other)),
        }
    }
}

/// Platform with a fixed symlink capability that records relaunches
#[derive(Debug)]
pub struct FakePlatform {
    can_link: bool,
    relaunch_code: i32,
    probes: Cell<usize>,
    relaunches: RefCell<Vec<Vec<String>>>,
}

impl FakePlatform {
    #[must_use]
    pub fn linking() -> Self {
        Self {
            can_link: true,
            relaunch_code: 0,
            probes: Cell::new(0),
            relaunches: RefCell::new(Vec::new()),
        }
    }

    /// Symlinks need elevation; a relaunch exits with `code`
    #[must_use]
    pub fn restricted(code: i32) -> Self {
        Self {
            can_link: false,
            relaunch_code: code,
            ..Self::linking()
        }
    }

    pub fn probes(&self) -> usize {
        self.probes.get()
    }

    pub fn relaunches(&self) -> Vec<Vec<String>> {
        self.relaunches.borrow().clone()
    }
}

impl Platform for FakePlatform {
    fn can_create_symlink(&self, _scratch: &Path) -> Result<bool> {
        self.probes.set(self.probes.get() + 1);
        Ok(self.can_link)
    }

    fn request_elevated_relaunch(&self, args: &[String]) -> Result<i32> {
        self.relaunches
            .borrow_mut()
            .push(crate::platform::elevation::relaunch_args(args));
        Ok(self.relaunch_code)
    }
}
