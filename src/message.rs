/// Severity of a message box. Decides its icon and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageLevel {
    /// Neutral information, without a warning or error connotation.
    #[default]
    Info,
    Error,
}

impl From<MessageLevel> for rfd::MessageLevel {
    fn from(level: MessageLevel) -> Self {
        match level {
            MessageLevel::Info => rfd::MessageLevel::Info,
            MessageLevel::Error => rfd::MessageLevel::Error,
        }
    }
}
