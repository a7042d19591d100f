/// Sidebar records and the closed field schema used for projection.
use serde::{Deserialize, Serialize};

use super::errors::SidebarError;
use crate::types::Record;

/// Identifier of the host's inactive-widgets holding area.
pub const INACTIVE_WIDGETS_ID: &str = "wp_inactive_widgets";

/// A registered widget area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sidebar {
    /// Unique, case-sensitive identifier (e.g., "sidebar-1").
    pub id: String,
    /// Display name (e.g., "Widget Area").
    #[serde(default)]
    pub name: String,
    /// Free-form description shown in the host's admin screens.
    #[serde(default)]
    pub description: Option<String>,
    /// Extra CSS class applied to the area.
    #[serde(default)]
    pub class: Option<String>,
    /// Markup emitted before each widget.
    #[serde(default)]
    pub before_widget: Option<String>,
    /// Markup emitted after each widget.
    #[serde(default)]
    pub after_widget: Option<String>,
    /// Markup emitted before each widget title.
    #[serde(default)]
    pub before_title: Option<String>,
    /// Markup emitted after each widget title.
    #[serde(default)]
    pub after_title: Option<String>,
}

impl Sidebar {
    /// Sidebar with only an id and a name; every other attribute empty.
    #[cfg(test)]
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            class: None,
            before_widget: None,
            after_widget: None,
            before_title: None,
            after_title: None,
        }
    }

    /// Whether this is the reserved inactive-widgets area.
    #[must_use]
    pub fn is_inactive_widgets(&self) -> bool {
        self.id == INACTIVE_WIDGETS_ID
    }

    /// Rendered value of one field. Missing optional attributes render empty.
    #[must_use]
    pub fn value(&self, field: SidebarField) -> &str {
        match field {
            SidebarField::Name => &self.name,
            SidebarField::Id => &self.id,
            SidebarField::Description => self.description.as_deref().unwrap_or(""),
            SidebarField::Class => self.class.as_deref().unwrap_or(""),
            SidebarField::BeforeWidget => self.before_widget.as_deref().unwrap_or(""),
            SidebarField::AfterWidget => self.after_widget.as_deref().unwrap_or(""),
            SidebarField::BeforeTitle => self.before_title.as_deref().unwrap_or(""),
            SidebarField::AfterTitle => self.after_title.as_deref().unwrap_or(""),
        }
    }

    /// Project onto `fields`, in the order given.
    #[must_use]
    pub fn project(&self, fields: &[SidebarField]) -> Record {
        let mut record = Record::new();
        for &field in fields {
            record.push(field.as_str(), self.value(field));
        }
        record
    }
}

/// Every field a sidebar record exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarField {
    Name,
    Id,
    Description,
    Class,
    BeforeWidget,
    AfterWidget,
    BeforeTitle,
    AfterTitle,
}

impl SidebarField {
    /// All fields in schema order.
    pub const ALL: [Self; 8] = [
        Self::Name,
        Self::Id,
        Self::Description,
        Self::Class,
        Self::BeforeWidget,
        Self::AfterWidget,
        Self::BeforeTitle,
        Self::AfterTitle,
    ];

    /// Fields shown when `--fields` is not given.
    pub const DEFAULT: [Self; 3] = [Self::Name, Self::Id, Self::Description];

    /// Field name as used on the command line and in output headers.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Id => "id",
            Self::Description => "description",
            Self::Class => "class",
            Self::BeforeWidget => "before_widget",
            Self::AfterWidget => "after_widget",
            Self::BeforeTitle => "before_title",
            Self::AfterTitle => "after_title",
        }
    }

    /// Exact-match lookup of a field name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

/// Parse a `--fields` value into a field list.
///
/// Entries are comma-separated and trimmed; empty entries are skipped.
/// `None` or an empty list selects [`SidebarField::DEFAULT`].
///
/// # Errors
///
/// Returns `SidebarError::InvalidField` for the first unknown name.
pub fn parse_fields(raw: Option<&str>) -> Result<Vec<SidebarField>, SidebarError> {
    let Some(raw) = raw else {
        return Ok(SidebarField::DEFAULT.to_vec());
    };

    let mut fields = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        let field = SidebarField::from_name(name).ok_or_else(|| SidebarError::InvalidField {
            field: name.to_owned(),
            available: SidebarField::ALL
                .iter()
                .map(|f| f.as_str().to_owned())
                .collect(),
        })?;
        fields.push(field);
    }

    if fields.is_empty() {
        return Ok(SidebarField::DEFAULT.to_vec());
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fields() {
        assert_eq!(
            parse_fields(None).unwrap(),
            vec![SidebarField::Name, SidebarField::Id, SidebarField::Description]
        );
    }

    #[test]
    fn test_fields_keep_given_order() {
        let fields = parse_fields(Some("id, before_title,name")).unwrap();
        assert_eq!(
            fields,
            vec![SidebarField::Id, SidebarField::BeforeTitle, SidebarField::Name]
        );
    }

    #[test]
    fn test_blank_fields_fall_back_to_default() {
        assert_eq!(parse_fields(Some(" , ")).unwrap(), SidebarField::DEFAULT.to_vec());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = parse_fields(Some("name,colour"));
        assert!(matches!(
            result,
            Err(SidebarError::InvalidField { ref field, .. }) if field == "colour"
        ));
    }

    #[test]
    fn test_field_names_are_case_sensitive() {
        assert!(SidebarField::from_name("Name").is_none());
    }

    #[test]
    fn test_project_renders_missing_attributes_empty() {
        let mut sidebar = Sidebar::new("sidebar-1", "Widget Area");
        sidebar.class = Some("primary".to_owned());
        let record = sidebar.project(&[SidebarField::Class, SidebarField::Description]);
        assert_eq!(record.get("class"), Some("primary"));
        assert_eq!(record.get("description"), Some(""));
        let columns: Vec<&str> = record.cells().map(|(name, _)| name).collect();
        assert_eq!(columns, ["class", "description"]);
    }
}
