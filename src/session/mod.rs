// ── Document session ──────────────────────────────────────────────────────────
//
// Owns the save state of the one open buffer and mediates every transition
// between untitled, saved, and modified.  Driven by external events (menu
// commands, keystrokes, window close) and talks to the text widget and the
// modal prompts exclusively through the `TextSurface` / `FileDialog`
// capability traits, never through concrete widget types or ambient globals.
//
// All mutations happen on the UI thread; no locking discipline is required.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::dialog::{Choice, FileDialog, DEFAULT_SAVE_NAME, FILE_FILTERS};
use crate::editor::TextSurface;
use crate::error::{JotError, Result};

/// Application name used in window titles and notifications.
pub const APP_NAME: &str = "Jot";

// Prompt texts.  The exit prompt keeps the original editor's wording.
const EXIT_TITLE: &str = "File not saved";
const EXIT_MESSAGE: &str = "Are you sure you want to leave without saving?";
const DISCARD_TITLE: &str = "Unsaved changes";
const DISCARD_MESSAGE: &str = "Discard unsaved changes?";

// ── State ─────────────────────────────────────────────────────────────────────

/// Where the buffer stands in its lifecycle, derived from the session flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Untitled, no edits since creation.
    Empty,
    /// Untitled with unsaved edits.
    Unsaved,
    /// Backed by a file, no edits since the last save or load.
    Saved,
    /// Backed by a file, edited since the last save.
    Modified,
}

/// Result of an operation that the user may cancel mid-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Cancelled,
}

/// What the host should do after an exit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// Terminate; the buffer is safe (or the user chose to abandon it).
    Exit,
    /// Keep running; the user backed out of the save offered on exit.
    Stay,
}

// ── Session ───────────────────────────────────────────────────────────────────

/// Path/dirty/ever-saved state for the currently open buffer.
///
/// Invariant: `path` is set iff the buffer originated from or was saved to a
/// real file.  `dirty` is set on every reported edit and cleared only by a
/// successful save or a wholesale reset (new/open).
#[derive(Debug)]
pub struct Session {
    path: Option<PathBuf>,
    dirty: bool,
    ever_saved: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh, untitled session.
    pub fn new() -> Self {
        Self {
            path: None,
            dirty: false,
            ever_saved: false,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The file backing the buffer, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// `true` when the buffer has edits not yet written to disk.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// `true` once any save has succeeded in this session's lifetime.
    pub fn ever_saved(&self) -> bool {
        self.ever_saved
    }

    /// Classify the session per the lifecycle state machine.
    pub fn state(&self) -> SessionState {
        match (self.path.is_some(), self.dirty) {
            (false, false) => SessionState::Empty,
            (false, true) => SessionState::Unsaved,
            (true, false) => SessionState::Saved,
            (true, true) => SessionState::Modified,
        }
    }

    // ── Change notifications ──────────────────────────────────────────────────

    /// Record that the buffer content changed.  Hosts wire this to the
    /// surface's change notification; every content-changing edit lands here.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Record that the buffer matches what is on disk.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    // ── Window title ──────────────────────────────────────────────────────────

    /// Compute the title string for the main window.
    ///
    /// | State | Title |
    /// |---|---|
    /// | No path, clean | `"Jot"` |
    /// | Path set, clean | `"filename — Jot"` |
    /// | Path set, dirty | `"*filename — Jot"` |
    /// | No path, dirty | `"*Untitled — Jot"` |
    pub fn window_title(&self) -> String {
        // Untitled + clean → bare app name (startup state)
        if self.path.is_none() && !self.dirty {
            return APP_NAME.to_owned();
        }
        let dirty = if self.dirty { "*" } else { "" };
        format!("{dirty}{} \u{2014} {APP_NAME}", self.display_name())
    }

    /// The bare filename component, or `"Untitled"` if no path is set.
    fn display_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_owned())
    }

    // ── New ───────────────────────────────────────────────────────────────────

    /// Discard the buffer and start over untitled.
    ///
    /// When the buffer is dirty the user confirms the discard first;
    /// answering No leaves buffer and session untouched.
    pub fn new_file(
        &mut self,
        surface: &mut dyn TextSurface,
        dialog: &mut dyn FileDialog,
    ) -> Outcome {
        if self.dirty && dialog.prompt_yes_no(DISCARD_TITLE, DISCARD_MESSAGE) == Choice::No {
            return Outcome::Cancelled;
        }
        surface.set_content("");
        *self = Self::new();
        debug!("session reset to untitled");
        Outcome::Completed
    }

    // ── Open ──────────────────────────────────────────────────────────────────

    /// Replace the buffer with a file chosen by the user.
    ///
    /// Dirty buffers confirm the discard first (same policy as
    /// [`new_file`](Self::new_file)).  A cancelled prompt changes nothing; a
    /// failed read propagates as [`JotError::Read`] with the session and the
    /// surface untouched.  Freshly loaded content counts as clean.
    pub fn open_file(
        &mut self,
        surface: &mut dyn TextSurface,
        dialog: &mut dyn FileDialog,
    ) -> Result<Outcome> {
        if self.dirty && dialog.prompt_yes_no(DISCARD_TITLE, DISCARD_MESSAGE) == Choice::No {
            return Ok(Outcome::Cancelled);
        }
        let Some(path) = dialog.prompt_open_path(FILE_FILTERS) else {
            return Ok(Outcome::Cancelled);
        };

        let text = fs::read_to_string(&path).map_err(|source| JotError::Read {
            path: path.clone(),
            source,
        })?;

        surface.set_content(&text);
        info!("opened {}", path.display());
        // Wholesale replacement: the previous session is gone.
        *self = Self {
            path: Some(path),
            dirty: false,
            ever_saved: false,
        };
        Ok(Outcome::Completed)
    }

    // ── Save ──────────────────────────────────────────────────────────────────

    /// Write the buffer to its backing file, or delegate to
    /// [`save_as`](Self::save_as) when there is none.
    ///
    /// A failed write propagates as [`JotError::Write`] and leaves the
    /// session unchanged (best-effort: a partially written file is not
    /// rolled back).
    pub fn save(
        &mut self,
        surface: &dyn TextSurface,
        dialog: &mut dyn FileDialog,
    ) -> Result<Outcome> {
        let Some(path) = self.path.clone() else {
            return self.save_as(surface, dialog);
        };
        write_text(&path, &surface.content())?;
        self.mark_clean();
        self.ever_saved = true;
        Ok(Outcome::Completed)
    }

    /// Ask for a destination, then write the buffer there.
    ///
    /// The prompt is seeded with [`DEFAULT_SAVE_NAME`]; cancelling it leaves
    /// session and buffer byte-for-byte unchanged.
    pub fn save_as(
        &mut self,
        surface: &dyn TextSurface,
        dialog: &mut dyn FileDialog,
    ) -> Result<Outcome> {
        let Some(path) = dialog.prompt_save_path(DEFAULT_SAVE_NAME, FILE_FILTERS) else {
            return Ok(Outcome::Cancelled);
        };
        write_text(&path, &surface.content())?;
        self.path = Some(path);
        self.mark_clean();
        self.ever_saved = true;
        Ok(Outcome::Completed)
    }

    // ── Exit ──────────────────────────────────────────────────────────────────

    /// Gate program exit on unsaved changes.
    ///
    /// A clean buffer exits immediately, with no prompt.  A dirty buffer
    /// asks "leave without saving?": Yes exits with zero writes; No offers
    /// one [`save_as`](Self::save_as), exiting after a successful save and
    /// staying put if the user cancels it.
    pub fn request_exit(
        &mut self,
        surface: &dyn TextSurface,
        dialog: &mut dyn FileDialog,
    ) -> Result<ExitOutcome> {
        if !self.dirty {
            return Ok(ExitOutcome::Exit);
        }
        match dialog.prompt_yes_no(EXIT_TITLE, EXIT_MESSAGE) {
            Choice::Yes => Ok(ExitOutcome::Exit),
            Choice::No => match self.save_as(surface, dialog)? {
                Outcome::Completed => Ok(ExitOutcome::Exit),
                Outcome::Cancelled => Ok(ExitOutcome::Stay),
            },
        }
    }
}

// ── File I/O ──────────────────────────────────────────────────────────────────

/// Write `content` to `path`, overwriting any existing file.
///
/// The handle is opened, written, and closed within this call; it is
/// released even when the write fails mid-way.
fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| JotError::Write {
        path: path.to_owned(),
        source,
    })?;
    info!("saved {}", path.display());
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
