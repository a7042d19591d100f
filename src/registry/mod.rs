/// Registry layer: snapshot loading, normalization, field projection, queries.
pub mod errors;
pub mod normalize;
pub mod query;
pub mod sidebar;
pub mod snapshot;

pub use errors::SidebarError;
pub use normalize::{InactiveWidgetsPlaceholder, NormalizeHook};
pub use query::SidebarQuery;
pub use sidebar::{INACTIVE_WIDGETS_ID, parse_fields};
pub use snapshot::SnapshotSource;
