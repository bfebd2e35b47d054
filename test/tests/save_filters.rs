//! Tests for save dialogs with named file type filters.

use floem_dialogs_test::prelude::*;

#[test]
fn test_filter_patterns_are_registered_per_group() {
    let backend = HeadlessBackend::new();
    let dialogs = DialogService::new(&backend);

    dialogs.save_file_with_filters(None, &[filters::images(), filters::documents()]);

    let dialog = backend.last_file_dialog().unwrap();
    assert_eq!(
        dialog.filter_patterns(),
        vec![
            (
                "Images".to_string(),
                vec!["*.png".to_string(), "*.jpg".to_string()]
            ),
            (
                "Documents".to_string(),
                vec!["*.txt".to_string(), "*.md".to_string(), "*.pdf".to_string()]
            ),
        ]
    );
}

#[test]
fn test_images_filter_accepts_only_images() {
    let backend = HeadlessBackend::new();
    let dialogs = DialogService::new(&backend);

    dialogs.save_file_with_filters(None, &[filters::images()]);

    let dialog = backend.last_file_dialog().unwrap();
    let active = dialog.filter_set();
    assert_eq!(active.active().map(FileSpec::name), Some("Images"));
    assert!(active.accepts("/photos/cat.png"));
    assert!(active.accepts("/photos/cat.jpg"));
    assert!(!active.accepts("/photos/cat.gif"));
    assert!(!active.accepts("/photos/notes.txt"));
    assert!(!active.accepts("/photos/png"));
}

#[test]
fn test_choice_hidden_by_filter_is_not_returned() {
    let backend = HeadlessBackend::with_responses([
        ScriptedResponse::choose("/photos/notes.txt"),
        ScriptedResponse::choose("/photos/cat.png"),
    ]);
    let dialogs = DialogService::new(&backend);
    let images = [filters::images()];

    assert_eq!(dialogs.save_file_with_filters(None, &images), None);

    let picked = dialogs.save_file_with_filters(None, &images).unwrap();
    assert_eq!(picked.path(), std::path::Path::new("/photos/cat.png"));
    assert_eq!(picked.format, Some(filters::images()));
}

#[test]
fn test_user_can_switch_filter_groups() {
    let backend = HeadlessBackend::with_responses([ScriptedResponse::choose_with_filter(
        "/docs/notes.md",
        1,
    )]);
    let dialogs = DialogService::new(&backend);

    let picked = dialogs
        .save_file_with_filters(None, &[filters::images(), filters::documents()])
        .unwrap();

    assert_eq!(picked.format, Some(filters::documents()));
    let dialog = backend.last_file_dialog().unwrap();
    let documents = dialog.filter_set().select(1);
    assert!(documents.accepts("notes.md"));
    assert!(!documents.accepts("cat.png"));
}

#[test]
fn test_empty_filters_match_plain_save() {
    let backend = HeadlessBackend::with_responses([
        ScriptedResponse::choose("/tmp/anything.bin"),
        ScriptedResponse::choose("/tmp/anything.bin"),
    ]);
    let window = MockWindow::new();
    let parent = window.parent();
    let dialogs = DialogService::new(&backend);

    let plain = dialogs.save_file(Some(&parent));
    let filtered = dialogs.save_file_with_filters(Some(&parent), &[]);
    assert_eq!(plain, filtered);

    let recorded = backend.file_dialogs();
    assert_eq!(recorded[0], recorded[1]);
    assert!(recorded[1].filter_set().is_empty());
    assert!(recorded[1].filter_set().accepts("/tmp/anything.bin"));
    assert!(recorded[1].filter_set().accepts("/tmp/Makefile"));
}

#[test]
fn test_open_with_filters() {
    let backend = HeadlessBackend::with_responses([
        ScriptedResponse::choose("/photos/cat.gif"),
        ScriptedResponse::choose("/photos/cat.jpg"),
    ]);
    let dialogs = DialogService::new(&backend);
    let options = FileDialogOptions::new().allowed_types(vec![filters::images()]);

    assert_eq!(dialogs.open_with(None, options.clone()), None);
    assert_eq!(
        dialogs.open_with(None, options).map(FileInfo::into_path),
        Some("/photos/cat.jpg".into())
    );
}
