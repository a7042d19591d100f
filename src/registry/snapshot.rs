/// The read-only registry snapshot and its on-disk document format.
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::IgnoredAny;
use tracing::{debug, warn};

use super::errors::SidebarError;
use super::sidebar::Sidebar;

/// Sidebars in registration order plus the widget assignments per sidebar.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    sidebars: Vec<Sidebar>,
    widgets: HashMap<String, Vec<String>>,
}

impl Registry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sidebar at the end of the registration order.
    ///
    /// # Errors
    ///
    /// Returns `SidebarError::EmptyId` or `SidebarError::DuplicateId` if the
    /// id would break the identifier set.
    pub fn register(&mut self, sidebar: Sidebar) -> Result<(), SidebarError> {
        if sidebar.id.is_empty() {
            return Err(SidebarError::EmptyId {
                index: self.sidebars.len(),
            });
        }
        if self.contains(&sidebar.id) {
            return Err(SidebarError::DuplicateId { id: sidebar.id });
        }
        self.sidebars.push(sidebar);
        Ok(())
    }

    /// Set the ordered widget list for a sidebar id.
    pub fn assign_widgets(&mut self, sidebar_id: impl Into<String>, widgets: Vec<String>) {
        self.widgets.insert(sidebar_id.into(), widgets);
    }

    /// Exact-match lookup.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Sidebar> {
        self.sidebars.iter().find(|s| s.id == id)
    }

    /// Whether `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All sidebars, reserved area included, in registration order.
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Sidebar> {
        self.sidebars.iter()
    }

    /// Sidebars shown by default listings: everything but the reserved
    /// inactive-widgets area.
    pub fn visible(&self) -> impl Iterator<Item = &Sidebar> {
        self.sidebars.iter().filter(|s| !s.is_inactive_widgets())
    }

    /// Widget ids assigned to `sidebar_id`, in display order.
    #[must_use]
    pub fn widgets_for(&self, sidebar_id: &str) -> Option<&[String]> {
        self.widgets.get(sidebar_id).map(Vec::as_slice)
    }

    /// Number of registered sidebars, reserved area included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sidebars.len()
    }

    /// Whether no sidebar is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }
}

// --- Snapshot document ---

/// Serialized form exported by the host.
#[derive(Debug, Deserialize)]
struct SnapshotDocument {
    #[serde(default)]
    sidebars: Vec<Sidebar>,
    #[serde(default)]
    sidebars_widgets: HashMap<String, AssignmentEntry>,
}

/// One value of the host's `sidebars_widgets` option.
///
/// The host keeps bookkeeping keys (`array_version`) and `null` entries in
/// the same map; those deserialize as `Other` and are skipped.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AssignmentEntry {
    Widgets(Vec<String>),
    Other(IgnoredAny),
}

/// Where the snapshot comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSource {
    /// JSON on standard input.
    Stdin,
    /// A file; YAML when the extension is `.yaml`/`.yml`, JSON otherwise.
    File(PathBuf),
}

impl SnapshotSource {
    /// `-` means stdin, anything else is a path.
    #[must_use]
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path.to_owned())
        }
    }

    fn display_path(&self) -> PathBuf {
        match self {
            Self::Stdin => PathBuf::from("<stdin>"),
            Self::File(path) => path.clone(),
        }
    }

    fn is_yaml(&self) -> bool {
        match self {
            Self::Stdin => false,
            Self::File(path) => path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml")),
        }
    }
}

/// Read and validate a registry snapshot.
///
/// # Errors
///
/// Returns `SidebarError::Read` if the source cannot be read,
/// `SidebarError::Parse` if it does not match the snapshot schema, and
/// `EmptyId`/`DuplicateId` if the sidebar list breaks the identifier set.
pub fn load(source: &SnapshotSource) -> Result<Registry, SidebarError> {
    let path = source.display_path();
    let read_err = |source| SidebarError::Read {
        path: path.clone(),
        source,
    };

    let text = match source {
        SnapshotSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).map_err(read_err)?;
            buf
        }
        SnapshotSource::File(file) => std::fs::read_to_string(file).map_err(read_err)?,
    };

    debug!(path = %path.display(), yaml = source.is_yaml(), "loading registry snapshot");
    let registry = if source.is_yaml() {
        parse_yaml(&text, &path)
    } else {
        parse_json(&text, &path)
    }?;

    if registry.is_empty() {
        warn!(path = %path.display(), "registry snapshot has no sidebars");
    }
    debug!(sidebars = registry.len(), "registry snapshot loaded");
    Ok(registry)
}

/// Build a registry from a JSON snapshot document; `origin` names it in errors.
///
/// # Errors
///
/// Returns `SidebarError::Parse` for malformed JSON; see [`load`] for the
/// validation errors.
pub fn parse_json(text: &str, origin: &Path) -> Result<Registry, SidebarError> {
    let doc: SnapshotDocument =
        serde_json::from_str(text).map_err(|e| parse_error(origin, &e))?;
    from_document(doc)
}

/// Build a registry from a YAML snapshot document.
///
/// # Errors
///
/// As [`parse_json`].
pub fn parse_yaml(text: &str, origin: &Path) -> Result<Registry, SidebarError> {
    let doc: SnapshotDocument =
        serde_yaml::from_str(text).map_err(|e| parse_error(origin, &e))?;
    from_document(doc)
}

fn parse_error(origin: &Path, err: &dyn std::fmt::Display) -> SidebarError {
    SidebarError::Parse {
        path: origin.to_owned(),
        message: err.to_string(),
    }
}

fn from_document(doc: SnapshotDocument) -> Result<Registry, SidebarError> {
    let mut registry = Registry::new();
    for sidebar in doc.sidebars {
        registry.register(sidebar)?;
    }

    for (sidebar_id, entry) in doc.sidebars_widgets {
        match entry {
            AssignmentEntry::Widgets(widgets) => {
                if !registry.contains(&sidebar_id) && sidebar_id != super::INACTIVE_WIDGETS_ID {
                    warn!(sidebar = %sidebar_id, "widget assignment for unregistered sidebar");
                }
                registry.assign_widgets(sidebar_id, widgets);
            }
            AssignmentEntry::Other(_) => {
                debug!(key = %sidebar_id, "skipping non-list sidebars_widgets entry");
            }
        }
    }

    Ok(registry)
}
