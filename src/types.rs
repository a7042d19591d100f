/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout (or stderr for errors), in
/// whichever encoding the command selected. They are decoupled from the
/// registry's `Sidebar` type so projection decides what is visible.
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

use crate::registry::SidebarError;

/// One projected output row: an ordered list of `(field, value)` pairs.
///
/// Serializes as a map whose key order is the projection order, for both
/// JSON and YAML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    cells: Vec<(&'static str, String)>,
}

impl Record {
    /// Empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Later pushes appear after earlier ones.
    pub fn push(&mut self, field: &'static str, value: impl Into<String>) {
        self.cells.push((field, value.into()));
    }

    /// Value of `field`, if the record carries it.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Field values in order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(_, value)| value.as_str())
    }

    /// `(field, value)` pairs in order.
    pub fn cells(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.cells.iter().map(|(name, value)| (*name, value.as_str()))
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, value) in &self.cells {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, serde::Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, serde::Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Valid alternatives, for invalid-field errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<String>>,
}

impl ErrorOutput {
    /// Construct from a `SidebarError`.
    #[must_use]
    pub fn from_sidebar_error(err: &SidebarError) -> Self {
        let code = match err {
            SidebarError::NotFound { .. } => "sidebar_not_found",
            SidebarError::DoesNotExist { .. } => "sidebar_does_not_exist",
            SidebarError::InvalidField { .. } => "invalid_field",
            SidebarError::DuplicateId { .. } | SidebarError::EmptyId { .. } => "invalid_registry",
            SidebarError::NoRegistry => "no_registry",
            SidebarError::Read { .. } => "registry_unreadable",
            SidebarError::Parse { .. } => "registry_parse_error",
            SidebarError::Output(_) => "output_error",
        };
        let candidates = match err {
            SidebarError::InvalidField { available, .. } => Some(available.clone()),
            _ => None,
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
                candidates,
            },
        }
    }

    /// Construct from a start-up failure (configuration, logging).
    #[must_use]
    pub fn startup(err: &anyhow::Error) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: "startup_error".to_owned(),
                message: format!("{err:#}"),
                candidates: None,
            },
        }
    }
}
