// ── In-memory text surface ────────────────────────────────────────────────────
//
// The concrete `TextSurface` used by the test suite and by headless hosts.
// Holds the buffer, the selection, per-byte style marks, and the registered
// change listeners.  A GUI host replaces this with an implementation over
// its real text control.

use std::collections::BTreeSet;

use super::{Span, Style, TextSurface};

/// Reference implementation of [`TextSurface`].
#[derive(Default)]
pub struct MemorySurface {
    text: String,
    selection: Option<Span>,
    // One mark per styled byte; the reference surface is not built for
    // large buffers.
    styled: BTreeSet<(usize, Style)>,
    listeners: Vec<Box<dyn FnMut()>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text at the end of the buffer, as a user typing would.
    /// Fires the registered change callbacks.
    pub fn type_text(&mut self, text: &str) {
        self.text.push_str(text);
        self.emit_change();
    }

    /// Replace the whole buffer, as a user edit (select-all + paste would).
    /// Fires the registered change callbacks.
    pub fn replace_with(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.styled.clear();
        self.emit_change();
    }

    /// Set the selection directly; hosts drive this from mouse/keyboard.
    pub fn set_selection(&mut self, span: Option<Span>) {
        self.selection = span;
    }

    fn emit_change(&mut self) {
        for cb in &mut self.listeners {
            cb();
        }
    }
}

impl TextSurface for MemorySurface {
    fn content(&self) -> String {
        self.text.clone()
    }

    fn set_content(&mut self, text: &str) {
        // Programmatic replacement: silent per the trait contract.
        self.text.clear();
        self.text.push_str(text);
        self.selection = None;
        self.styled.clear();
    }

    fn notify_on_change(&mut self, callback: Box<dyn FnMut()>) {
        self.listeners.push(callback);
    }

    fn selection(&self) -> Option<Span> {
        self.selection
    }

    fn has_style(&self, span: Span, style: Style) -> bool {
        !span.is_empty() && (span.start..span.end).all(|i| self.styled.contains(&(i, style)))
    }

    fn apply_style(&mut self, span: Span, style: Style) {
        for i in span.start..span.end {
            self.styled.insert((i, style));
        }
    }

    fn remove_style(&mut self, span: Span, style: Style) {
        for i in span.start..span.end {
            self.styled.remove(&(i, style));
        }
    }

    fn select_all(&mut self) {
        self.selection = Some(Span::new(0, self.text.len()));
    }

    fn clear_selection(&mut self) {
        self.selection = None;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
