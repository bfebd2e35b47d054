//! Toolkit backends.
//!
//! A backend presents one fully described dialog and blocks until the user
//! is done with it. Everything a dialog needs is carried by the request, so
//! backends keep no state between calls.

mod headless;
mod native;

pub use headless::{HeadlessBackend, RecordedFileDialog, RecordedMessage, ScriptedResponse};
pub use native::NativeBackend;

use crate::file::{FileDialogOptions, FileInfo, FileSpec};
use crate::filter::FilterSet;
use crate::message::MessageLevel;
use crate::settings::DialogSettings;
use crate::window::ParentWindow;

/// What a file chooser lets the user pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogMode {
    /// An existing file.
    OpenFile,
    /// An existing directory.
    OpenFolder,
    /// A destination to write to, existing or not.
    SaveFile,
}

impl DialogMode {
    pub fn is_save(self) -> bool {
        matches!(self, DialogMode::SaveFile)
    }
}

/// A file chooser to present.
#[derive(Debug, Clone, Copy)]
pub struct FileRequest<'a> {
    pub mode: DialogMode,
    pub parent: Option<&'a ParentWindow<'a>>,
    pub options: &'a FileDialogOptions,
    pub settings: &'a DialogSettings,
}

impl<'a> FileRequest<'a> {
    pub fn filters(&self) -> &'a [FileSpec] {
        self.options.get_allowed_types()
    }

    pub fn filter_set(&self) -> FilterSet<'a> {
        FilterSet::new(self.filters())
    }

    pub fn accept_label(&self) -> &'a str {
        self.settings.accept_label(self.mode)
    }
}

/// A message box to present.
#[derive(Debug, Clone, Copy)]
pub struct MessageRequest<'a> {
    pub parent: Option<&'a ParentWindow<'a>>,
    pub title: &'a str,
    pub description: &'a str,
    pub level: MessageLevel,
}

/// A dialog toolkit able to run modal choosers and message boxes.
pub trait DialogBackend {
    /// Run the chooser described by `request` until the user confirms or
    /// cancels. Returns `None` when nothing was chosen.
    fn pick(&self, request: &FileRequest<'_>) -> Option<FileInfo>;

    /// Run a message box until the user dismisses it.
    fn show_message(&self, request: &MessageRequest<'_>);
}

impl<B: DialogBackend + ?Sized> DialogBackend for &B {
    fn pick(&self, request: &FileRequest<'_>) -> Option<FileInfo> {
        (**self).pick(request)
    }

    fn show_message(&self, request: &MessageRequest<'_>) {
        (**self).show_message(request)
    }
}

impl<B: DialogBackend + ?Sized> DialogBackend for Box<B> {
    fn pick(&self, request: &FileRequest<'_>) -> Option<FileInfo> {
        (**self).pick(request)
    }

    fn show_message(&self, request: &MessageRequest<'_>) {
        (**self).show_message(request)
    }
}
