use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::backend::{DialogBackend, DialogMode, FileRequest, MessageRequest, NativeBackend};
use crate::file::{FileDialogOptions, FileInfo, FileSpec};
use crate::message::MessageLevel;
use crate::settings::DialogSettings;
use crate::window::ParentWindow;

/// Shows modal file choosers and message boxes.
///
/// Every call builds its dialog, runs it to completion on the current thread
/// and tears it down before returning. Nothing is kept between calls apart
/// from the [`DialogSettings`].
///
/// # Example
///
/// ```rust,no_run
/// use floem_dialogs::{DialogService, FileSpec};
///
/// let dialogs = DialogService::native();
/// let images = FileSpec::new("Images", ["png", "jpg"]).unwrap();
/// if let Some(file) = dialogs.save_file_with_filters(None, &[images]) {
///     println!("saving to {}", file.path().display());
/// } else {
///     dialogs.message(None, "Nothing saved", "No destination was chosen.");
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct DialogService<B = NativeBackend> {
    backend: B,
    settings: DialogSettings,
}

impl DialogService<NativeBackend> {
    /// A service using the platform's own dialogs.
    pub fn native() -> Self {
        Self::new(NativeBackend::new())
    }
}

impl<B: DialogBackend> DialogService<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            settings: DialogSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: DialogSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &DialogSettings {
        &self.settings
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Ask for an existing file.
    pub fn open_file(&self, parent: Option<&ParentWindow<'_>>) -> Option<FileInfo> {
        self.open_with(parent, FileDialogOptions::new())
    }

    /// Ask for an existing directory.
    pub fn open_folder(&self, parent: Option<&ParentWindow<'_>>) -> Option<FileInfo> {
        self.open_with(parent, FileDialogOptions::new().select_directories())
    }

    /// Ask where to save, confirming before an existing file is replaced.
    pub fn save_file(&self, parent: Option<&ParentWindow<'_>>) -> Option<FileInfo> {
        self.save_with(parent, FileDialogOptions::new())
    }

    /// Like [`save_file`](Self::save_file), offering `filters` as named groups
    /// in the chooser's type dropdown. An empty slice behaves exactly like
    /// `save_file`.
    pub fn save_file_with_filters(
        &self,
        parent: Option<&ParentWindow<'_>>,
        filters: &[FileSpec],
    ) -> Option<FileInfo> {
        self.save_with(
            parent,
            FileDialogOptions::new().allowed_types(filters.to_vec()),
        )
    }

    /// Open dialog driven by `options`.
    ///
    /// [`FileDialogOptions::select_directories`] switches to folder selection.
    pub fn open_with(
        &self,
        parent: Option<&ParentWindow<'_>>,
        options: FileDialogOptions,
    ) -> Option<FileInfo> {
        let mode = if options.selects_directories() {
            DialogMode::OpenFolder
        } else {
            DialogMode::OpenFile
        };
        self.run(mode, parent, &options)
    }

    /// Save dialog driven by `options`.
    pub fn save_with(
        &self,
        parent: Option<&ParentWindow<'_>>,
        options: FileDialogOptions,
    ) -> Option<FileInfo> {
        self.run(DialogMode::SaveFile, parent, &options)
    }

    /// Show an informational message and wait for it to be dismissed.
    pub fn message(&self, parent: Option<&ParentWindow<'_>>, title: &str, description: &str) {
        self.show_message(parent, title, description, MessageLevel::Info);
    }

    /// Show an error message and wait for it to be dismissed.
    pub fn message_error(
        &self,
        parent: Option<&ParentWindow<'_>>,
        title: &str,
        description: &str,
    ) {
        self.show_message(parent, title, description, MessageLevel::Error);
    }

    pub fn show_message(
        &self,
        parent: Option<&ParentWindow<'_>>,
        title: &str,
        description: &str,
        level: MessageLevel,
    ) {
        debug!(?level, anchored = parent.is_some(), title, "showing message");
        self.backend.show_message(&MessageRequest {
            parent,
            title,
            description,
            level,
        });
    }

    fn run(
        &self,
        mode: DialogMode,
        parent: Option<&ParentWindow<'_>>,
        options: &FileDialogOptions,
    ) -> Option<FileInfo> {
        let request = FileRequest {
            mode,
            parent,
            options,
            settings: &self.settings,
        };
        debug!(
            ?mode,
            anchored = parent.is_some(),
            filters = request.filters().len(),
            "opening file dialog"
        );

        let Some(mut info) = self.backend.pick(&request) else {
            debug!(?mode, "file dialog cancelled");
            return None;
        };
        info.path = absolute(&info.path, options.get_starting_directory())?;
        debug!(?mode, path = %info.path.display(), "file dialog confirmed");
        Some(info)
    }
}

/// Resolve a backend result to an absolute path.
///
/// Relative results are taken relative to the directory the dialog was
/// opened in, falling back to the process working directory.
fn absolute(path: &Path, base: Option<&Path>) -> Option<PathBuf> {
    if path.is_absolute() {
        return Some(path.to_path_buf());
    }
    let joined = match base {
        Some(base) => base.join(path),
        None => path.to_path_buf(),
    };
    match std::path::absolute(&joined) {
        Ok(path) => Some(path),
        Err(err) => {
            warn!(path = %joined.display(), %err, "cannot resolve selected path");
            None
        }
    }
}
