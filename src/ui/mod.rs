// ── UI state helpers ──────────────────────────────────────────────────────────
//
// Pure functions from session state to display strings.  No widget calls
// here; hosts render the results however their toolkit likes.

pub mod status;
