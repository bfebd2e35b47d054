//! Tests for borrowing windows as dialog parents.

use floem_dialogs::raw_window_handle::{HasWindowHandle, RawDisplayHandle};
use floem_dialogs_test::prelude::*;

#[test]
fn test_parent_exposes_window_handles() {
    let window = MockWindow::new();
    let parent = window.parent();

    assert_eq!(parent.raw_window_handle(), window.raw_window_handle());
    assert_eq!(
        parent.window_handle().unwrap().as_raw(),
        window.raw_window_handle()
    );
    assert!(matches!(parent.raw_display_handle(), RawDisplayHandle::Xlib(_)));
}

#[test]
fn test_unavailable_window_is_an_error() {
    let err = ParentWindow::new(&UnavailableWindow).unwrap_err();
    assert!(matches!(err, DialogError::ParentUnavailable(_)));
    assert!(err.to_string().contains("parent window handle is unavailable"));
}

#[test]
fn test_windows_have_distinct_handles() {
    let first = MockWindow::new();
    let second = MockWindow::new();
    assert_ne!(first.raw_window_handle(), second.raw_window_handle());
}
