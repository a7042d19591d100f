/// Errors from the sidebar registry layer.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or querying the sidebar registry.
#[derive(Debug, Error)]
pub enum SidebarError {
    /// `get` on an identifier that is not registered.
    #[error("Sidebar '{id}' not found")]
    NotFound {
        /// The requested sidebar identifier.
        id: String,
    },

    /// `widgets` on an identifier that is not registered.
    #[error("Sidebar '{id}' does not exist")]
    DoesNotExist {
        /// The requested sidebar identifier.
        id: String,
    },

    /// A `--fields` entry that is not part of the record schema.
    #[error("Invalid field: {field}. Available fields: {}", available.join(", "))]
    InvalidField {
        /// The rejected field name.
        field: String,
        /// Every field name the record supports.
        available: Vec<String>,
    },

    /// Two sidebars in one snapshot share an identifier.
    #[error("Duplicate sidebar id '{id}' in registry snapshot")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },

    /// A sidebar in the snapshot has an empty identifier.
    #[error("Sidebar at position {index} in registry snapshot has an empty id")]
    EmptyId {
        /// Zero-based position in the `sidebars` array.
        index: usize,
    },

    /// No registry snapshot was configured.
    #[error("No registry snapshot given; pass --registry <PATH> or set `registry` in the config")]
    NoRegistry,

    /// The snapshot file could not be read.
    #[error("Cannot read registry snapshot {}: {source}", path.display())]
    Read {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file is not valid JSON/YAML for the registry schema.
    #[error("Invalid registry snapshot {}: {message}", path.display())]
    Parse {
        /// Path that failed.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// Writing rendered output failed.
    #[error("Output error: {0}")]
    Output(String),
}

/// Exit code mapping for `SidebarError` variants.
impl SidebarError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } | Self::DoesNotExist { .. } | Self::Output(_) => 1,
            Self::InvalidField { .. }
            | Self::DuplicateId { .. }
            | Self::EmptyId { .. }
            | Self::NoRegistry
            | Self::Read { .. }
            | Self::Parse { .. } => 2,
        }
    }
}

impl From<std::io::Error> for SidebarError {
    fn from(err: std::io::Error) -> Self {
        Self::Output(err.to_string())
    }
}

impl From<csv::Error> for SidebarError {
    fn from(err: csv::Error) -> Self {
        Self::Output(err.to_string())
    }
}

impl From<serde_json::Error> for SidebarError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}

impl From<serde_yaml::Error> for SidebarError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Output(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_id() {
        let err = SidebarError::NotFound {
            id: "unknown-id".to_owned(),
        };
        assert!(err.to_string().contains("unknown-id"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_invalid_field_lists_candidates() {
        let err = SidebarError::InvalidField {
            field: "color".to_owned(),
            available: vec!["name".to_owned(), "id".to_owned()],
        };
        assert_eq!(
            err.to_string(),
            "Invalid field: color. Available fields: name, id"
        );
        assert_eq!(err.exit_code(), 2);
    }
}
