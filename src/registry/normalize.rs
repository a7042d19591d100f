/// Normalization hooks run against the registry before any query reads it.
use tracing::debug;

use super::sidebar::{INACTIVE_WIDGETS_ID, Sidebar};
use super::snapshot::Registry;

/// A host capability that brings the registry into its canonical shape.
///
/// Implementations must be idempotent.
pub trait NormalizeHook {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Adjust `registry` in place.
    fn normalize(&self, registry: &mut Registry);
}

/// Registers the inactive-widgets area when the snapshot lacks it, with the
/// host's stock attributes. An existing entry is left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct InactiveWidgetsPlaceholder;

impl InactiveWidgetsPlaceholder {
    /// The sidebar this hook registers.
    #[must_use]
    pub fn sidebar() -> Sidebar {
        Sidebar {
            id: INACTIVE_WIDGETS_ID.to_owned(),
            name: "Inactive Widgets".to_owned(),
            description: Some(
                "Drag widgets here to remove them from the sidebar but keep their settings."
                    .to_owned(),
            ),
            class: Some("inactive-sidebar".to_owned()),
            before_widget: Some(String::new()),
            after_widget: Some(String::new()),
            before_title: Some(String::new()),
            after_title: Some(String::new()),
        }
    }
}

impl NormalizeHook for InactiveWidgetsPlaceholder {
    fn name(&self) -> &'static str {
        "inactive_widgets_placeholder"
    }

    fn normalize(&self, registry: &mut Registry) {
        if registry.contains(INACTIVE_WIDGETS_ID) {
            return;
        }
        // Non-empty id, checked absent above.
        if registry.register(Self::sidebar()).is_ok() {
            debug!(id = INACTIVE_WIDGETS_ID, "registered unused sidebar placeholder");
        }
    }
}

/// Apply `hook` to a copy of `registry`. Without a hook the copy is unchanged.
#[must_use]
pub fn normalized(registry: &Registry, hook: Option<&dyn NormalizeHook>) -> Registry {
    let mut registry = registry.clone();
    if let Some(hook) = hook {
        debug!(hook = hook.name(), "running normalization hook");
        hook.normalize(&mut registry);
    }
    registry
}
