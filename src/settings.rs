use crate::backend::DialogMode;
#[cfg(feature = "serde")]
use crate::error::DialogError;

/// Chooser behavior shared by every dialog a [`DialogService`] shows.
///
/// The defaults match what users of the GTK chooser expect: hidden files are
/// listed, folders can be created inline, and saving over an existing file
/// asks for confirmation first.
///
/// [`DialogService`]: crate::DialogService
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DialogSettings {
    pub show_hidden: bool,
    pub create_folders: bool,
    pub confirm_overwrite: bool,
    /// Restrict choices to local files, hiding remote locations.
    pub local_only: bool,
    /// Mnemonic label of the accept button in open dialogs.
    pub open_label: String,
    /// Mnemonic label of the accept button in save dialogs.
    pub save_label: String,
    pub cancel_label: String,
}

impl Default for DialogSettings {
    fn default() -> Self {
        Self {
            show_hidden: true,
            create_folders: true,
            confirm_overwrite: true,
            local_only: false,
            open_label: "_Open".to_string(),
            save_label: "_Save".to_string(),
            cancel_label: "_Cancel".to_string(),
        }
    }
}

impl DialogSettings {
    /// Parse settings from a JSON document. Missing keys keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, DialogError> {
        serde_json::from_str(json).map_err(|err| {
            tracing::warn!(%err, "rejected dialog settings");
            DialogError::Settings(err)
        })
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, DialogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn accept_label(&self, mode: DialogMode) -> &str {
        match mode {
            DialogMode::OpenFile | DialogMode::OpenFolder => &self.open_label,
            DialogMode::SaveFile => &self.save_label,
        }
    }
}
