use std::path::{Path, PathBuf};

use crate::error::DialogError;
use crate::filter::glob_match;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileSpec {
    name: String,
    extensions: Vec<String>,
}

impl FileSpec {
    /// Describe a file type.
    ///
    /// `name` is the human readable label shown in the chooser's filter
    /// dropdown, for instance "Images". It should not include the extensions;
    /// toolkits that display them add them automatically.
    ///
    /// `extensions` are matched as `*.{extension}` in the order given. They
    /// should not include the leading '.'. An extension may itself contain
    /// `*` or `?` wildcards, so `"*"` matches any file name with a dot.
    pub fn new<I, S>(name: impl Into<String>, extensions: I) -> Result<Self, DialogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let extensions: Vec<String> = extensions.into_iter().map(Into::into).collect();

        let invalid = |reason| DialogError::InvalidFilter {
            name: name.clone(),
            reason,
        };
        if name.trim().is_empty() {
            return Err(invalid("the name is empty"));
        }
        if extensions.is_empty() {
            return Err(invalid("no extensions were given"));
        }
        for ext in &extensions {
            if ext.is_empty() {
                return Err(invalid("an extension is empty"));
            }
            if ext.starts_with('.') {
                return Err(invalid("an extension starts with '.'"));
            }
            if ext.contains(['/', '\\']) {
                return Err(invalid("an extension contains a path separator"));
            }
        }

        Ok(Self { name, extensions })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// The glob patterns registered for this file type, one per extension.
    pub fn patterns(&self) -> impl Iterator<Item = String> + '_ {
        self.extensions.iter().map(|ext| format!("*.{ext}"))
    }

    /// Whether the file name of `path` matches any of this type's patterns.
    ///
    /// Matching is case-sensitive, as with the GTK chooser.
    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        let Some(file_name) = path.as_ref().file_name() else {
            return false;
        };
        let file_name = file_name.to_string_lossy();
        self.patterns()
            .any(|pattern| glob_match(&pattern, &file_name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// The absolute path to the selected file or folder.
    pub path: PathBuf,
    /// The file type that was active when the user confirmed.
    ///
    /// Only backends that can observe the chooser's filter dropdown report
    /// this; the native backend always leaves it empty.
    pub format: Option<FileSpec>,
}

impl FileInfo {
    /// Returns the underlying path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDialogOptions {
    pub(crate) title: Option<String>,
    pub(crate) default_name: Option<String>,
    pub(crate) allowed_types: Option<Vec<FileSpec>>,
    pub(crate) select_directories: bool,
    pub(crate) starting_directory: Option<PathBuf>,
}

impl FileDialogOptions {
    /// Create a new set of options.
    pub fn new() -> FileDialogOptions {
        FileDialogOptions::default()
    }

    /// Set directories to be selectable instead of files.
    ///
    /// This is only relevant for open dialogs.
    pub fn select_directories(mut self) -> Self {
        self.select_directories = true;
        self
    }

    /// Set the file types the user is allowed to select.
    ///
    /// This filter is only applied to files, not to directories.
    ///
    /// An empty collection is treated as no filter.
    pub fn allowed_types(mut self, types: Vec<FileSpec>) -> Self {
        // An empty vector can cause platform issues, so treat it as no filter
        if types.is_empty() {
            self.allowed_types = None;
        } else {
            self.allowed_types = Some(types);
        }
        self
    }

    /// Set the default filename that appears in the dialog.
    pub fn default_name(mut self, default_name: impl Into<String>) -> Self {
        self.default_name = Some(default_name.into());
        self
    }

    /// Pre-fill the dialog with an existing target.
    ///
    /// The dialog opens in the parent directory of `path` with its file name
    /// filled in. Feeding back a path returned by a save dialog selects that
    /// same path again.
    pub fn default_path(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.starting_directory = Some(parent.to_path_buf());
        }
        if let Some(name) = path.file_name() {
            self.default_name = Some(name.to_string_lossy().into_owned());
        }
        self
    }

    /// Set the title text of the dialog.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Force the starting directory to the specified `path`.
    ///
    /// # User experience
    ///
    /// This should almost never be used because it overrides the OS choice,
    /// which will usually be a directory that the user recently visited.
    pub fn force_starting_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.starting_directory = Some(path.into());
        self
    }

    pub fn get_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn get_default_name(&self) -> Option<&str> {
        self.default_name.as_deref()
    }

    pub fn get_starting_directory(&self) -> Option<&Path> {
        self.starting_directory.as_deref()
    }

    /// The allowed file types, empty when the dialog is unfiltered.
    pub fn get_allowed_types(&self) -> &[FileSpec] {
        self.allowed_types.as_deref().unwrap_or_default()
    }

    pub fn selects_directories(&self) -> bool {
        self.select_directories
    }

    /// The pre-filled target, when both a directory and a name are set.
    pub fn default_target(&self) -> Option<PathBuf> {
        let dir = self.starting_directory.as_ref()?;
        let name = self.default_name.as_ref()?;
        Some(dir.join(name))
    }
}
