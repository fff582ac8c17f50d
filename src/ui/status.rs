// ── Status bar line ───────────────────────────────────────────────────────────
//
// Maps the session lifecycle state to the status-bar text and a colour hint.
// The host picks the actual colours; `Tone` only names the intent.

use crate::session::{SessionState, APP_NAME};

/// Colour intent for the status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Startup / nothing to report.
    Neutral,
    /// Edits exist that have never been saved.
    Unsaved,
    /// Buffer matches the file on disk.
    Saved,
    /// Saved file with newer edits.
    Modified,
}

/// One rendered status-bar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: Tone,
}

/// Compute the status line for the given session state.
pub fn status_line(state: SessionState) -> StatusLine {
    let (text, tone) = match state {
        SessionState::Empty => (format!("{APP_NAME} 0.1"), Tone::Neutral),
        SessionState::Unsaved => (format!("{APP_NAME} \u{2014} unsaved file"), Tone::Unsaved),
        SessionState::Saved => (format!("{APP_NAME} \u{2014} file saved"), Tone::Saved),
        SessionState::Modified => ("* modified file".to_owned(), Tone::Modified),
    };
    StatusLine { text, tone }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
