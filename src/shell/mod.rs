// ── Command dispatch ──────────────────────────────────────────────────────────
//
// The event-wiring layer between a host front-end and the document session.
// Menu picks, toolbar buttons, and accelerators all funnel into the single
// `Command` enum and one `Shell::handle` entry point; there is one callback
// shape regardless of how the host delivers the event.
//
// Read/write failures stop here: logged, shown to the user, never
// propagated, never retried.

use log::error;

use crate::dialog::FileDialog;
use crate::editor::{toggle_style, Style, TextSurface};
use crate::error::Result;
use crate::session::{ExitOutcome, Session, APP_NAME};
use crate::ui::status::{status_line, StatusLine};

const ABOUT_TITLE: &str = "About Jot";
const ABOUT_TEXT: &str = "Jot 0.1.0\n\nA minimal text editor.\n\nLicensed under MIT OR Apache-2.0.";

// ── Commands ──────────────────────────────────────────────────────────────────

/// Every user action the shell understands.
///
/// `ContentChanged` is not a menu entry: it is the host's translation of the
/// text widget's modified notification, delivered through the same channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NewFile,
    OpenFile,
    Save,
    SaveAs,
    Exit,
    SelectAll,
    ClearSelection,
    ToggleStyle(Style),
    ContentChanged,
    About,
}

// ── Shell ─────────────────────────────────────────────────────────────────────

/// Owns the session and its collaborators; the single explicit state root.
///
/// Hosts construct one `Shell` at startup, translate toolkit events into
/// [`Command`]s, and stop their event loop once
/// [`is_running`](Shell::is_running) turns false.
pub struct Shell<S: TextSurface, D: FileDialog> {
    session: Session,
    surface: S,
    dialog: D,
    running: bool,
}

impl<S: TextSurface, D: FileDialog> Shell<S, D> {
    pub fn new(surface: S, dialog: D) -> Self {
        Self {
            session: Session::new(),
            surface,
            dialog,
            running: true,
        }
    }

    /// Dispatch one user action.
    ///
    /// Infallible from the host's point of view: errors are shown to the
    /// user and recorded in the log, and the shell keeps running.
    pub fn handle(&mut self, command: Command) {
        let result: Result<()> = match command {
            Command::NewFile => {
                self.session.new_file(&mut self.surface, &mut self.dialog);
                Ok(())
            }
            Command::OpenFile => self
                .session
                .open_file(&mut self.surface, &mut self.dialog)
                .map(|_| ()),
            Command::Save => self.session.save(&self.surface, &mut self.dialog).map(|_| ()),
            Command::SaveAs => self
                .session
                .save_as(&self.surface, &mut self.dialog)
                .map(|_| ()),
            Command::Exit => self
                .session
                .request_exit(&self.surface, &mut self.dialog)
                .map(|outcome| {
                    if outcome == ExitOutcome::Exit {
                        self.running = false;
                    }
                }),
            Command::ContentChanged => {
                self.session.mark_dirty();
                Ok(())
            }
            Command::SelectAll => {
                self.surface.select_all();
                Ok(())
            }
            Command::ClearSelection => {
                self.surface.clear_selection();
                Ok(())
            }
            Command::ToggleStyle(style) => {
                if let Some(span) = self.surface.selection() {
                    toggle_style(&mut self.surface, style, span);
                }
                Ok(())
            }
            Command::About => {
                self.dialog.alert(ABOUT_TITLE, ABOUT_TEXT);
                Ok(())
            }
        };

        if let Err(e) = result {
            error!("{e}");
            self.dialog.alert(APP_NAME, &e.to_string());
        }
    }

    // ── Host queries ──────────────────────────────────────────────────────────

    /// `false` once an exit request has been granted.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current main-window title.
    pub fn title(&self) -> String {
        self.session.window_title()
    }

    /// Current status-bar line.
    pub fn status(&self) -> StatusLine {
        status_line(self.session.state())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn dialog(&self) -> &D {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut D {
        &mut self.dialog
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
