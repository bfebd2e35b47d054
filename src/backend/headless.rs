//! Headless backend for testing code that shows dialogs.
//!
//! Instead of opening windows, [`HeadlessBackend`] answers each chooser with
//! the next scripted response and records every dialog it was asked to show.
//! It behaves like a user sitting in front of the GTK chooser: a path can
//! only be chosen if the active filter lists it, and message boxes are
//! dismissed right away.
//!
//! # Example
//!
//! ```rust
//! use floem_dialogs::{DialogService, HeadlessBackend, ScriptedResponse};
//!
//! let backend = HeadlessBackend::new();
//! backend.push_response(ScriptedResponse::choose("/tmp/notes.txt"));
//!
//! let dialogs = DialogService::new(&backend);
//! let picked = dialogs.open_file(None).unwrap();
//! assert_eq!(picked.path(), std::path::Path::new("/tmp/notes.txt"));
//! assert_eq!(backend.file_dialogs().len(), 1);
//! ```

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use raw_window_handle::RawWindowHandle;
use tracing::{debug, warn};

use super::{DialogBackend, DialogMode, FileRequest, MessageRequest};
use crate::file::{FileInfo, FileSpec};
use crate::filter::FilterSet;
use crate::message::MessageLevel;

/// What the simulated user does with the next file chooser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedResponse {
    /// Press cancel or close the dialog.
    Cancel,
    /// Select `path`, with the filter at index `filter` active if given.
    Choose {
        path: PathBuf,
        filter: Option<usize>,
    },
    /// Confirm whatever the dialog was pre-filled with.
    AcceptDefault,
    /// The toolkit fails to run the dialog.
    Fail,
}

impl ScriptedResponse {
    pub fn choose(path: impl Into<PathBuf>) -> Self {
        ScriptedResponse::Choose {
            path: path.into(),
            filter: None,
        }
    }

    pub fn choose_with_filter(path: impl Into<PathBuf>, filter: usize) -> Self {
        ScriptedResponse::Choose {
            path: path.into(),
            filter: Some(filter),
        }
    }
}

/// A file chooser as the headless backend saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFileDialog {
    pub mode: DialogMode,
    pub parent: Option<RawWindowHandle>,
    pub title: Option<String>,
    pub starting_directory: Option<PathBuf>,
    pub default_name: Option<String>,
    pub filters: Vec<FileSpec>,
    pub show_hidden: bool,
    pub create_folders: bool,
    pub confirm_overwrite: bool,
    pub local_only: bool,
    pub accept_label: String,
    pub cancel_label: String,
    /// Whether the user was asked to confirm replacing an existing file.
    pub overwrite_prompted: bool,
    pub result: Option<PathBuf>,
}

impl RecordedFileDialog {
    pub fn is_anchored(&self) -> bool {
        self.parent.is_some()
    }

    pub fn filter_set(&self) -> FilterSet<'_> {
        FilterSet::new(&self.filters)
    }

    /// `(name, patterns)` for every filter, in dropdown order.
    pub fn filter_patterns(&self) -> Vec<(String, Vec<String>)> {
        self.filters
            .iter()
            .map(|spec| (spec.name().to_string(), spec.patterns().collect()))
            .collect()
    }
}

/// A message box as the headless backend saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedMessage {
    pub parent: Option<RawWindowHandle>,
    pub title: String,
    pub description: String,
    pub level: MessageLevel,
}

#[derive(Debug, Default)]
pub struct HeadlessBackend {
    responses: Mutex<VecDeque<ScriptedResponse>>,
    file_dialogs: Mutex<Vec<RecordedFileDialog>>,
    messages: Mutex<Vec<RecordedMessage>>,
    check_filesystem: bool,
}

impl HeadlessBackend {
    /// A backend whose user cancels every chooser unless told otherwise.
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend with `responses` queued in order.
    pub fn with_responses(responses: impl IntoIterator<Item = ScriptedResponse>) -> Self {
        let backend = Self::new();
        backend.responses.lock().extend(responses);
        backend
    }

    /// Consult the real filesystem like a chooser would.
    ///
    /// Open dialogs then only return existing files or folders matching their
    /// mode, save dialogs need an existing parent directory, and saving over an
    /// existing file is recorded as an overwrite prompt.
    pub fn check_filesystem(mut self) -> Self {
        self.check_filesystem = true;
        self
    }

    pub fn push_response(&self, response: ScriptedResponse) {
        self.responses.lock().push_back(response);
    }

    pub fn pending_responses(&self) -> usize {
        self.responses.lock().len()
    }

    pub fn file_dialogs(&self) -> Vec<RecordedFileDialog> {
        self.file_dialogs.lock().clone()
    }

    pub fn last_file_dialog(&self) -> Option<RecordedFileDialog> {
        self.file_dialogs.lock().last().cloned()
    }

    pub fn messages(&self) -> Vec<RecordedMessage> {
        self.messages.lock().clone()
    }

    fn resolve(&self, request: &FileRequest<'_>, response: ScriptedResponse) -> Option<FileInfo> {
        match response {
            ScriptedResponse::Cancel => None,
            ScriptedResponse::Fail => {
                warn!(mode = ?request.mode, "headless dialog failed");
                None
            }
            ScriptedResponse::AcceptDefault => {
                let options = request.options;
                let path = match (request.mode, options.default_target()) {
                    (_, Some(target)) => target,
                    (DialogMode::OpenFolder, None) => options.get_starting_directory()?.into(),
                    _ => return None,
                };
                self.choose(request, path, None)
            }
            ScriptedResponse::Choose { path, filter } => self.choose(request, path, filter),
        }
    }

    fn choose(
        &self,
        request: &FileRequest<'_>,
        path: PathBuf,
        filter: Option<usize>,
    ) -> Option<FileInfo> {
        let mut filters = request.filter_set();
        if let Some(index) = filter {
            if index >= filters.filters().len() {
                warn!(index, "scripted filter does not exist");
                return None;
            }
            filters = filters.select(index);
        }

        // Folders are never filtered.
        if request.mode != DialogMode::OpenFolder && !filters.accepts(&path) {
            debug!(path = %path.display(), "path hidden by the active filter");
            return None;
        }
        if self.check_filesystem && !exists_for(request.mode, &path) {
            debug!(path = %path.display(), mode = ?request.mode, "path not selectable");
            return None;
        }

        Some(FileInfo {
            path,
            format: filters.active().cloned(),
        })
    }
}

fn exists_for(mode: DialogMode, path: &Path) -> bool {
    match mode {
        DialogMode::OpenFile => path.is_file(),
        DialogMode::OpenFolder => path.is_dir(),
        DialogMode::SaveFile => path
            .parent()
            .is_some_and(|dir| dir.as_os_str().is_empty() || dir.is_dir()),
    }
}

impl DialogBackend for HeadlessBackend {
    fn pick(&self, request: &FileRequest<'_>) -> Option<FileInfo> {
        let response = self
            .responses
            .lock()
            .pop_front()
            .unwrap_or(ScriptedResponse::Cancel);
        let picked = self.resolve(request, response);

        let overwrite_prompted = self.check_filesystem
            && request.mode.is_save()
            && request.settings.confirm_overwrite
            && picked.as_ref().is_some_and(|info| info.path.exists());

        let options = request.options;
        let settings = request.settings;
        self.file_dialogs.lock().push(RecordedFileDialog {
            mode: request.mode,
            parent: request.parent.map(|parent| parent.raw_window_handle()),
            title: options.get_title().map(str::to_string),
            starting_directory: options.get_starting_directory().map(Path::to_path_buf),
            default_name: options.get_default_name().map(str::to_string),
            filters: request.filters().to_vec(),
            show_hidden: settings.show_hidden,
            create_folders: settings.create_folders,
            confirm_overwrite: settings.confirm_overwrite,
            local_only: settings.local_only,
            accept_label: request.accept_label().to_string(),
            cancel_label: settings.cancel_label.clone(),
            overwrite_prompted,
            result: picked.as_ref().map(|info| info.path.clone()),
        });

        picked
    }

    fn show_message(&self, request: &MessageRequest<'_>) {
        self.messages.lock().push(RecordedMessage {
            parent: request.parent.map(|parent| parent.raw_window_handle()),
            title: request.title.to_string(),
            description: request.description.to_string(),
            level: request.level,
        });
    }
}
