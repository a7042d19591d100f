/// `exists` command: exit-status predicate for a sidebar id.
use tracing::debug;

use super::Outcome;
use crate::cli::args::ExistsArgs;
use crate::registry::SidebarQuery;

/// Run `sidebarcli sidebar exists`. Writes nothing; the outcome is the answer.
#[must_use]
pub fn run(args: &ExistsArgs, query: &SidebarQuery<'_>) -> Outcome {
    let found = query.exists(&args.id);
    debug!(id = %args.id, found, "sidebar existence check");
    if found {
        Outcome::Success
    } else {
        Outcome::Absent
    }
}
