// ── Scripted dialogs ──────────────────────────────────────────────────────────
//
// Queue-driven `FileDialog` for tests and headless hosts: the host scripts
// the answers up front, the session logic consumes them in order.  Every
// prompt is counted and every alert recorded so callers can assert on what
// was shown.
//
// An exhausted queue behaves like the user backing out: path prompts return
// `None`, yes/no prompts answer `No`.

use std::collections::VecDeque;
use std::path::PathBuf;

use super::{Choice, FileDialog, FileFilter};

/// A [`FileDialog`] that replays pre-scripted answers.
#[derive(Default)]
pub struct ScriptedDialog {
    open_paths: VecDeque<Option<PathBuf>>,
    save_paths: VecDeque<Option<PathBuf>>,
    answers: VecDeque<Choice>,
    open_prompts: usize,
    save_prompts: usize,
    yes_no_prompts: usize,
    alerts: Vec<(String, String)>,
}

impl ScriptedDialog {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Scripting ─────────────────────────────────────────────────────────────

    /// Queue the next answer to an open prompt.
    pub fn push_open_path(&mut self, path: impl Into<PathBuf>) {
        self.open_paths.push_back(Some(path.into()));
    }

    /// Queue a cancel for the next open prompt.
    pub fn push_open_cancel(&mut self) {
        self.open_paths.push_back(None);
    }

    /// Queue the next answer to a save prompt.
    pub fn push_save_path(&mut self, path: impl Into<PathBuf>) {
        self.save_paths.push_back(Some(path.into()));
    }

    /// Queue a cancel for the next save prompt.
    pub fn push_save_cancel(&mut self) {
        self.save_paths.push_back(None);
    }

    /// Queue the next yes/no answer.
    pub fn push_answer(&mut self, choice: Choice) {
        self.answers.push_back(choice);
    }

    // ── Inspection ────────────────────────────────────────────────────────────

    /// How many open prompts were issued.
    pub fn open_prompts(&self) -> usize {
        self.open_prompts
    }

    /// How many save prompts were issued.
    pub fn save_prompts(&self) -> usize {
        self.save_prompts
    }

    /// How many yes/no prompts were issued.
    pub fn yes_no_prompts(&self) -> usize {
        self.yes_no_prompts
    }

    /// Every `(title, message)` pair shown via [`FileDialog::alert`].
    pub fn alerts(&self) -> &[(String, String)] {
        &self.alerts
    }
}

impl FileDialog for ScriptedDialog {
    fn prompt_open_path(&mut self, _filters: &[FileFilter]) -> Option<PathBuf> {
        self.open_prompts += 1;
        self.open_paths.pop_front().flatten()
    }

    fn prompt_save_path(
        &mut self,
        _default_name: &str,
        _filters: &[FileFilter],
    ) -> Option<PathBuf> {
        self.save_prompts += 1;
        self.save_paths.pop_front().flatten()
    }

    fn prompt_yes_no(&mut self, _title: &str, _message: &str) -> Choice {
        self.yes_no_prompts += 1;
        self.answers.pop_front().unwrap_or(Choice::No)
    }

    fn alert(&mut self, title: &str, message: &str) {
        self.alerts.push((title.to_owned(), message.to_owned()));
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
