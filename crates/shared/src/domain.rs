use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(SessionId);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether the filename dialog is naming a file to write or to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogMode {
    Save,
    Load,
}

impl DialogMode {
    /// Label shown on the accept button.
    pub fn accept_label(self) -> &'static str {
        match self {
            DialogMode::Save => "Save",
            DialogMode::Load => "Load",
        }
    }

    /// Caption shown above the filename field.
    pub fn caption(self) -> &'static str {
        match self {
            DialogMode::Save => "Enter a filename to write:",
            DialogMode::Load => "Enter a filename to read:",
        }
    }
}

/// File usage categories the interpreter may ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileUsage {
    Data,
    Save,
    Transcript,
    Command,
}

impl FileUsage {
    /// Parse a usage string; unrecognized categories yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "data" => Some(FileUsage::Data),
            "save" => Some(FileUsage::Save),
            "transcript" => Some(FileUsage::Transcript),
            "command" => Some(FileUsage::Command),
            _ => None,
        }
    }

    /// Human-readable label for dialog prompts.
    pub fn label(self) -> &'static str {
        match self {
            FileUsage::Data => "data file",
            FileUsage::Save => "save file",
            FileUsage::Transcript => "transcript",
            FileUsage::Command => "command script",
        }
    }

    /// Whether files of this usage are likely to contain text data.
    pub fn is_textual(self) -> bool {
        matches!(self, FileUsage::Transcript | FileUsage::Command)
    }
}

/// Label for an arbitrary usage string. Unknown categories, and no category
/// at all, fall back to the generic "file".
pub fn usage_label(usage: Option<&str>) -> &'static str {
    usage
        .and_then(FileUsage::parse)
        .map(FileUsage::label)
        .unwrap_or("file")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_label_covers_known_categories() {
        assert_eq!(usage_label(Some("data")), "data file");
        assert_eq!(usage_label(Some("save")), "save file");
        assert_eq!(usage_label(Some("transcript")), "transcript");
        assert_eq!(usage_label(Some("command")), "command script");
    }

    #[test]
    fn usage_label_falls_back_for_everything_else() {
        assert_eq!(usage_label(None), "file");
        assert_eq!(usage_label(Some("")), "file");
        assert_eq!(usage_label(Some("screenshot")), "file");
        assert_eq!(usage_label(Some("Save")), "file");
    }

    #[test]
    fn textual_usages() {
        assert!(FileUsage::Transcript.is_textual());
        assert!(FileUsage::Command.is_textual());
        assert!(!FileUsage::Data.is_textual());
        assert!(!FileUsage::Save.is_textual());
    }

    #[test]
    fn mode_labels() {
        assert_eq!(DialogMode::Save.accept_label(), "Save");
        assert_eq!(DialogMode::Load.accept_label(), "Load");
        assert_eq!(DialogMode::Save.caption(), "Enter a filename to write:");
        assert_eq!(DialogMode::Load.caption(), "Enter a filename to read:");
    }
}
