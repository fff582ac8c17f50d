// End-to-end lifecycle scenarios driven through the shell, with a real
// filesystem underneath (tempfile) and scripted dialog answers.

use jot::dialog::scripted::ScriptedDialog;
use jot::editor::memory::MemorySurface;
use jot::{Choice, Command, SessionState, Shell, Span, Style, TextSurface};

fn shell() -> Shell<MemorySurface, ScriptedDialog> {
    Shell::new(MemorySurface::new(), ScriptedDialog::new())
}

/// Simulate the user typing: edit the surface, then deliver the change
/// notification the way a host front-end would.
fn type_text(shell: &mut Shell<MemorySurface, ScriptedDialog>, text: &str) {
    shell.surface_mut().type_text(text);
    shell.handle(Command::ContentChanged);
}

#[test]
fn new_session_type_hello_save_goes_through_save_as() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("out.txt");
    let mut shell = shell();

    type_text(&mut shell, "hello");
    shell.dialog_mut().push_save_path(&out);

    shell.handle(Command::Save);

    // Save on an untitled buffer prompted for a destination exactly once.
    assert_eq!(shell.dialog().save_prompts(), 1);
    assert_eq!(std::fs::read_to_string(&out).expect("read back"), "hello");
    assert_eq!(shell.session().path(), Some(out.as_path()));
    assert!(!shell.session().is_dirty());
    assert_eq!(shell.session().state(), SessionState::Saved);
}

#[test]
fn abandoning_edits_on_exit_leaves_the_file_untouched() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("a.txt");
    std::fs::write(&file, "X").expect("fixture write");
    let mut shell = shell();

    shell.dialog_mut().push_open_path(&file);
    shell.handle(Command::OpenFile);
    assert_eq!(shell.surface().content(), "X");

    type_text(&mut shell, "Y");
    assert_eq!(shell.surface().content(), "XY");
    assert_eq!(shell.session().state(), SessionState::Modified);

    // Leave without saving.
    shell.dialog_mut().push_answer(Choice::Yes);
    shell.handle(Command::Exit);

    assert!(!shell.is_running());
    assert_eq!(std::fs::read_to_string(&file).expect("read back"), "X");
}

#[test]
fn declining_the_exit_prompt_rescues_the_buffer_first() {
    let dir = tempfile::tempdir().expect("tempdir");
    let rescued = dir.path().join("rescued.txt");
    let mut shell = shell();

    type_text(&mut shell, "important");
    shell.dialog_mut().push_answer(Choice::No);
    shell.dialog_mut().push_save_path(&rescued);

    shell.handle(Command::Exit);

    assert!(!shell.is_running());
    assert_eq!(shell.dialog().save_prompts(), 1);
    assert_eq!(
        std::fs::read_to_string(&rescued).expect("read back"),
        "important"
    );
}

#[test]
fn save_as_cancel_is_a_complete_no_op() {
    let mut shell = shell();
    type_text(&mut shell, "draft");
    shell.dialog_mut().push_save_cancel();

    shell.handle(Command::SaveAs);

    assert_eq!(shell.surface().content(), "draft");
    assert_eq!(shell.session().path(), None);
    assert!(shell.session().is_dirty());
    assert!(!shell.session().ever_saved());
    assert!(shell.dialog().alerts().is_empty());
}

#[test]
fn open_save_edit_save_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("notes.md");
    std::fs::write(&file, "draft one").expect("fixture write");
    let mut shell = shell();

    shell.dialog_mut().push_open_path(&file);
    shell.handle(Command::OpenFile);
    assert_eq!(shell.title(), "notes.md \u{2014} Jot");

    // Edit and save in place: no further prompting.
    shell.surface_mut().replace_with("draft two");
    shell.handle(Command::ContentChanged);
    assert_eq!(shell.title(), "*notes.md \u{2014} Jot");

    shell.handle(Command::Save);

    assert_eq!(shell.dialog().save_prompts(), 0);
    assert_eq!(
        std::fs::read_to_string(&file).expect("read back"),
        "draft two"
    );
    assert_eq!(shell.title(), "notes.md \u{2014} Jot");

    // Nothing dirty, so exit needs no confirmation.
    shell.handle(Command::Exit);
    assert!(!shell.is_running());
    assert_eq!(shell.dialog().yes_no_prompts(), 0);
}

#[test]
fn failed_open_is_reported_and_recoverable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut shell = shell();

    shell
        .dialog_mut()
        .push_open_path(dir.path().join("missing.txt"));
    shell.handle(Command::OpenFile);

    assert_eq!(shell.dialog().alerts().len(), 1);
    assert!(shell.dialog().alerts()[0].1.contains("cannot read"));
    assert!(shell.is_running());
    assert_eq!(shell.session().state(), SessionState::Empty);

    // The session still works afterwards.
    let out = dir.path().join("after.txt");
    type_text(&mut shell, "recovered");
    shell.dialog_mut().push_save_path(&out);
    shell.handle(Command::Save);
    assert_eq!(
        std::fs::read_to_string(&out).expect("read back"),
        "recovered"
    );
}

#[test]
fn bold_toggle_twice_restores_unstyled_text() {
    let mut shell = shell();
    type_text(&mut shell, "hello");
    shell.surface_mut().set_selection(Some(Span::new(0, 5)));

    shell.handle(Command::ToggleStyle(Style::Bold));
    assert!(shell.surface().has_style(Span::new(0, 5), Style::Bold));

    shell.handle(Command::ToggleStyle(Style::Bold));
    assert!(!shell.surface().has_style(Span::new(0, 5), Style::Bold));
}

#[test]
fn new_file_after_saved_work_starts_a_fresh_untitled_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("done.txt");
    let mut shell = shell();

    type_text(&mut shell, "done");
    shell.dialog_mut().push_save_path(&out);
    shell.handle(Command::Save);
    assert_eq!(shell.session().state(), SessionState::Saved);

    shell.handle(Command::NewFile);

    assert_eq!(shell.surface().content(), "");
    assert_eq!(shell.session().path(), None);
    assert_eq!(shell.session().state(), SessionState::Empty);
    assert_eq!(shell.title(), "Jot");
}
