//! Tests for pre-filling save dialogs with a previous result.

use floem_dialogs_test::prelude::*;

#[test]
fn test_saved_path_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("exports").join("report.csv");
    std::fs::create_dir(target.parent().unwrap()).unwrap();

    let backend = HeadlessBackend::with_responses([
        ScriptedResponse::choose(&target),
        ScriptedResponse::AcceptDefault,
    ])
    .check_filesystem();
    let dialogs = DialogService::new(&backend);

    let first = dialogs.save_file(None).unwrap();
    let second = dialogs
        .save_with(None, FileDialogOptions::new().default_path(first.path()))
        .unwrap();

    assert_eq!(first.path(), target.as_path());
    assert_eq!(second.path(), first.path());

    let prefilled = backend.last_file_dialog().unwrap();
    assert_eq!(
        prefilled.starting_directory.as_deref(),
        target.parent()
    );
    assert_eq!(prefilled.default_name.as_deref(), Some("report.csv"));
}

#[test]
fn test_accept_default_without_prefill_cancels() {
    let backend = HeadlessBackend::with_responses([ScriptedResponse::AcceptDefault]);
    let dialogs = DialogService::new(&backend);

    assert_eq!(dialogs.save_file(None), None);
}
