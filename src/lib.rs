//! # Floem dialogs
//! Native modal file choosers and message boxes.
//!
//! Each operation builds a dialog, runs it until the user responds and returns
//! the result on the calling thread. There are six of them:
//!
//! - [`open_file`] and [`open_folder`] ask for something that already exists.
//! - [`save_file`] and [`save_file_with_filters`] ask for a destination,
//!   confirming before an existing file is replaced.
//! - [`message`] and [`message_error`] show a title with a longer description
//!   and wait for the user to press OK.
//!
//! Choosers return `None` when the user cancels.
//!
//! ## Anchoring
//!
//! Dialogs can be stacked above an existing window so they are modal to it.
//! Any window exposing [`raw_window_handle`] handles can be borrowed as a
//! [`ParentWindow`]; pass `None` instead to show an unanchored dialog.
//!
//! ```rust,no_run
//! use floem_dialogs::raw_window_handle::{HasDisplayHandle, HasWindowHandle};
//! use floem_dialogs::{DialogError, ParentWindow};
//!
//! fn open_from<W: HasWindowHandle + HasDisplayHandle>(window: &W) -> Result<(), DialogError> {
//!     let parent = ParentWindow::new(window)?;
//!     if let Some(file) = floem_dialogs::open_file(Some(&parent)) {
//!         println!("opening {}", file.path().display());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Testing
//!
//! The free functions always use the platform's dialogs. Code that should be
//! testable takes a [`DialogService`] instead, which can be backed by the
//! scripted [`HeadlessBackend`].

pub mod backend;
pub mod error;
pub mod file;
pub mod filter;
pub mod message;
pub mod service;
pub mod settings;
pub mod window;

pub use raw_window_handle;

pub use backend::{
    DialogBackend, DialogMode, FileRequest, HeadlessBackend, MessageRequest, NativeBackend,
    RecordedFileDialog, RecordedMessage, ScriptedResponse,
};
pub use error::DialogError;
pub use file::{FileDialogOptions, FileInfo, FileSpec};
pub use filter::FilterSet;
pub use message::MessageLevel;
pub use service::DialogService;
pub use settings::DialogSettings;
pub use window::ParentWindow;

/// Ask for an existing file using the platform's dialog.
pub fn open_file(parent: Option<&ParentWindow<'_>>) -> Option<FileInfo> {
    DialogService::native().open_file(parent)
}

/// Ask for an existing directory using the platform's dialog.
pub fn open_folder(parent: Option<&ParentWindow<'_>>) -> Option<FileInfo> {
    DialogService::native().open_folder(parent)
}

/// Ask for a save destination using the platform's dialog.
pub fn save_file(parent: Option<&ParentWindow<'_>>) -> Option<FileInfo> {
    DialogService::native().save_file(parent)
}

/// Ask for a save destination, offering `filters` in the type dropdown.
pub fn save_file_with_filters(
    parent: Option<&ParentWindow<'_>>,
    filters: &[FileSpec],
) -> Option<FileInfo> {
    DialogService::native().save_file_with_filters(parent, filters)
}

/// Show an informational message box and wait for it to be dismissed.
pub fn message(parent: Option<&ParentWindow<'_>>, title: &str, description: &str) {
    DialogService::native().message(parent, title, description)
}

/// Show an error message box and wait for it to be dismissed.
pub fn message_error(parent: Option<&ParentWindow<'_>>, title: &str, description: &str) {
    DialogService::native().message_error(parent, title, description)
}
