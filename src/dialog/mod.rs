// ── File-dialog abstraction ───────────────────────────────────────────────────
//
// The modal prompt capability the session logic uses: pick a path to open,
// pick a path to save to, ask a yes/no question, show a notification.  Each
// path prompt returns `Some(path)` on user confirmation and `None` on cancel;
// a cancel aborts only the operation that issued the prompt.
//
// A GUI host implements this over its toolkit's common dialogs.
// `scripted::ScriptedDialog` is the queue-driven implementation used by the
// test suite and by headless hosts.

pub mod scripted;

use std::path::PathBuf;

// ── Filters ───────────────────────────────────────────────────────────────────

/// One entry of the advisory extension filter shown in path prompts.
///
/// Advisory only: nothing enforces the pattern on the bytes actually read or
/// written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    /// Display label, e.g. `"Text Files"`.
    pub label: &'static str,
    /// Glob pattern, e.g. `"*.txt"`.
    pub pattern: &'static str,
}

/// The filter list offered by every open/save prompt.
pub const FILE_FILTERS: &[FileFilter] = &[
    FileFilter { label: "All Files", pattern: "*.*" },
    FileFilter { label: "Text Files", pattern: "*.txt" },
    FileFilter { label: "Python Scripts", pattern: "*.py" },
    FileFilter { label: "Markdown Files", pattern: "*.md" },
    FileFilter { label: "HTML Files", pattern: "*.html" },
    FileFilter { label: "CSS Files", pattern: "*.css" },
    FileFilter { label: "JavaScript Files", pattern: "*.js" },
    FileFilter { label: "PDF Documents", pattern: "*.pdf" },
];

/// Filename pre-populated in the save prompt for untitled buffers.
pub const DEFAULT_SAVE_NAME: &str = "Untitled.txt";

// ── Yes/no answers ────────────────────────────────────────────────────────────

/// Answer to a yes/no confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Yes,
    No,
}

// ── Capability trait ──────────────────────────────────────────────────────────

/// Modal path-selection and confirmation prompts, as the session logic sees
/// them.  All prompts suspend the caller until the user responds; none of
/// them can fail, only be cancelled.
pub trait FileDialog {
    /// Ask for an existing file to open.  `None` = cancelled.
    fn prompt_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf>;

    /// Ask for a destination path, pre-populated with `default_name`.
    /// `None` = cancelled.
    fn prompt_save_path(&mut self, default_name: &str, filters: &[FileFilter])
        -> Option<PathBuf>;

    /// Ask a yes/no question.
    fn prompt_yes_no(&mut self, title: &str, message: &str) -> Choice;

    /// Show a notification the user must acknowledge.  Used for read/write
    /// failures and informational notices.
    fn alert(&mut self, title: &str, message: &str);
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_list_leads_with_all_files() {
        assert_eq!(FILE_FILTERS[0].pattern, "*.*");
    }

    #[test]
    fn filter_list_covers_the_allowed_extensions() {
        let patterns: Vec<&str> = FILE_FILTERS.iter().map(|f| f.pattern).collect();
        for ext in ["*.txt", "*.py", "*.md", "*.html", "*.css", "*.js", "*.pdf"] {
            assert!(patterns.contains(&ext), "missing {ext}");
        }
        assert_eq!(FILE_FILTERS.len(), 8);
    }
}
