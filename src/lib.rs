// ── Safety policy ────────────────────────────────────────────────────────────
// No `unsafe` anywhere in this crate.  All toolkit FFI lives in host
// front-ends, behind the `TextSurface` / `FileDialog` capability traits.
#![deny(unsafe_code)]

//! Document-session core for a minimal text editor.
//!
//! The one component here is the [`Session`]: the path/dirty/ever-saved
//! state of the open buffer and the control flow that gates destructive
//! actions (new/open/exit) on unsaved changes.  The text widget and the
//! modal dialogs are collaborators supplied by the host through the
//! [`TextSurface`](editor::TextSurface) and
//! [`FileDialog`](dialog::FileDialog) traits; [`Shell`] wires host events to
//! session operations.
//!
//! Everything runs on the host's single UI event thread.  Nothing here
//! spawns, blocks beyond a synchronous file read/write or modal prompt, or
//! retries.

pub mod dialog;
pub mod editor;
pub mod error;
pub mod session;
pub mod shell;
pub mod ui;

pub use dialog::{Choice, FileDialog, FileFilter, DEFAULT_SAVE_NAME, FILE_FILTERS};
pub use editor::{toggle_style, Span, Style, TextSurface};
pub use error::{JotError, Result};
pub use session::{ExitOutcome, Outcome, Session, SessionState, APP_NAME};
pub use shell::{Command, Shell};
