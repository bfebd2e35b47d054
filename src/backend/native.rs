use std::path::PathBuf;

use tracing::{trace, warn};

use super::{DialogBackend, DialogMode, FileRequest, MessageRequest};
use crate::file::FileInfo;
use crate::settings::DialogSettings;

/// The platform's own dialogs, through `rfd`.
///
/// On Linux this is the GTK chooser or the XDG desktop portal, depending on
/// how `rfd` was built. Calls block the current thread, which on macOS must
/// be the main thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeBackend;

impl NativeBackend {
    pub fn new() -> Self {
        Self
    }

    fn file_dialog(request: &FileRequest<'_>) -> rfd::FileDialog {
        let options = request.options;
        let settings = request.settings;

        let mut dialog = rfd::FileDialog::new().set_can_create_directories(settings.create_folders);

        if let Some(parent) = request.parent {
            dialog = dialog.set_parent(parent);
        }
        if let Some(path) = options.get_starting_directory() {
            dialog = dialog.set_directory(path);
        }
        if let Some(name) = options.get_default_name() {
            dialog = dialog.set_file_name(name);
        }
        if let Some(title) = options.get_title() {
            dialog = dialog.set_title(title);
        }
        for spec in request.filters() {
            for pattern in spec.patterns() {
                trace!(filter = spec.name(), %pattern, "adding filter pattern");
            }
            dialog = dialog.add_filter(spec.name(), spec.extensions());
        }

        for setting in unsupported_settings(request.mode, settings) {
            warn!(setting, "native dialogs ignore this setting");
        }

        dialog
    }
}

/// Settings the `rfd` chooser cannot honor for `mode`.
///
/// rfd never asks GTK to list hidden files, so they stay hidden, and its save
/// dialogs always confirm overwrites.
fn unsupported_settings(mode: DialogMode, settings: &DialogSettings) -> Vec<&'static str> {
    let mut unsupported = Vec::new();
    if settings.show_hidden {
        unsupported.push("show_hidden");
    }
    if mode.is_save() && !settings.confirm_overwrite {
        unsupported.push("confirm_overwrite");
    }
    unsupported
}

impl DialogBackend for NativeBackend {
    fn pick(&self, request: &FileRequest<'_>) -> Option<FileInfo> {
        let dialog = Self::file_dialog(request);
        let path: Option<PathBuf> = match request.mode {
            DialogMode::OpenFile => dialog.pick_file(),
            DialogMode::OpenFolder => dialog.pick_folder(),
            DialogMode::SaveFile => dialog.save_file(),
        };
        path.map(|path| FileInfo { path, format: None })
    }

    fn show_message(&self, request: &MessageRequest<'_>) {
        let mut dialog = rfd::MessageDialog::new()
            .set_level(request.level.into())
            .set_title(request.title)
            .set_description(request.description)
            .set_buttons(rfd::MessageButtons::Ok);
        if let Some(parent) = request.parent {
            dialog = dialog.set_parent(parent);
        }
        dialog.show();
        trace!("message dialog dismissed");
    }
}
