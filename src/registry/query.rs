/// Read operations over a registry snapshot.
///
/// Every operation runs the optional normalization hook against its own copy
/// of the snapshot first, so the snapshot itself is never modified.
use super::errors::SidebarError;
use super::normalize::{NormalizeHook, normalized};
use super::sidebar::SidebarField;
use super::snapshot::Registry;
use crate::types::Record;

/// The registry snapshot plus the hook installed for this invocation.
#[derive(Clone, Copy)]
pub struct SidebarQuery<'a> {
    registry: &'a Registry,
    hook: Option<&'a dyn NormalizeHook>,
}

impl<'a> SidebarQuery<'a> {
    #[must_use]
    pub fn new(registry: &'a Registry, hook: Option<&'a dyn NormalizeHook>) -> Self {
        Self { registry, hook }
    }

    fn view(&self) -> Registry {
        normalized(self.registry, self.hook)
    }

    /// Visible sidebars projected onto `fields`, in registration order.
    #[must_use]
    pub fn list(&self, fields: &[SidebarField]) -> Vec<Record> {
        self.view().visible().map(|s| s.project(fields)).collect()
    }

    /// Ids of the visible sidebars, in registration order.
    #[must_use]
    pub fn list_ids(&self) -> Vec<String> {
        self.view().visible().map(|s| s.id.clone()).collect()
    }

    /// Number of visible sidebars.
    #[must_use]
    pub fn count(&self) -> usize {
        self.view().visible().count()
    }

    /// One sidebar by exact id, reserved area included.
    ///
    /// # Errors
    ///
    /// Returns `SidebarError::NotFound` if `id` is not registered.
    pub fn get(&self, id: &str, fields: &[SidebarField]) -> Result<Record, SidebarError> {
        self.view()
            .get(id)
            .map(|s| s.project(fields))
            .ok_or_else(|| SidebarError::NotFound { id: id.to_owned() })
    }

    /// Whether `id` is registered, reserved area included.
    #[must_use]
    pub fn exists(&self, id: &str) -> bool {
        self.view().contains(id)
    }

    /// Widget ids assigned to sidebar `id`, in display order. Empty when the
    /// sidebar has no assignment.
    ///
    /// # Errors
    ///
    /// Returns `SidebarError::DoesNotExist` if `id` is not registered.
    pub fn widgets(&self, id: &str) -> Result<Vec<String>, SidebarError> {
        let view = self.view();
        if !view.contains(id) {
            return Err(SidebarError::DoesNotExist { id: id.to_owned() });
        }
        Ok(view.widgets_for(id).map(<[String]>::to_vec).unwrap_or_default())
    }
}
