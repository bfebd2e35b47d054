//! Tests for service-wide dialog settings.

use floem_dialogs_test::prelude::*;

#[test]
fn test_settings_reach_the_backend() {
    let backend = HeadlessBackend::new();
    let settings = DialogSettings {
        show_hidden: false,
        create_folders: false,
        save_label: "_Export".to_string(),
        ..DialogSettings::default()
    };
    let dialogs = DialogService::new(&backend).with_settings(settings);

    dialogs.save_file(None);

    let dialog = backend.last_file_dialog().unwrap();
    assert!(!dialog.show_hidden);
    assert!(!dialog.create_folders);
    assert!(dialog.confirm_overwrite);
    assert_eq!(dialog.accept_label, "_Export");
}

#[test]
fn test_settings_from_json() {
    let settings =
        DialogSettings::from_json(r#"{ "confirm_overwrite": false, "open_label": "_Pick" }"#)
            .unwrap();
    let dir = tempfile::tempdir().unwrap();
    let existing = dir.path().join("existing.txt");
    std::fs::write(&existing, "old").unwrap();

    let backend = HeadlessBackend::with_responses([ScriptedResponse::choose(&existing)])
        .check_filesystem();
    let dialogs = DialogService::new(&backend).with_settings(settings);

    assert!(dialogs.save_file(None).is_some());
    dialogs.open_folder(None);

    let recorded = backend.file_dialogs();
    assert!(!recorded[0].overwrite_prompted);
    assert_eq!(recorded[1].accept_label, "_Pick");
    assert!(recorded[1].show_hidden);
}

#[test]
fn test_invalid_settings_are_rejected() {
    let err = DialogSettings::from_json(r#"{ "show_hidden": "sometimes" }"#).unwrap_err();
    assert!(matches!(err, DialogError::Settings(_)));
}
