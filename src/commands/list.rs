/// `list` command: list registered sidebars.
use tracing::debug;

use super::{Outcome, Streams};
use crate::cli::args::{ListArgs, ListFormat};
use crate::cli::output::{write_count, write_ids, write_records};
use crate::cli::OutputCtx;
use crate::registry::{SidebarError, SidebarQuery, parse_fields};

/// Run `sidebarcli sidebar list`.
///
/// # Errors
///
/// Returns `SidebarError::InvalidField` for an unknown `--fields` entry, or
/// `SidebarError::Output` if writing fails.
pub fn run(
    args: &ListArgs,
    query: &SidebarQuery<'_>,
    ctx: &OutputCtx,
    io: &mut Streams<'_>,
) -> Result<Outcome, SidebarError> {
    let fields = parse_fields(args.fields.as_deref())?;
    match args.format {
        ListFormat::Ids => write_ids(io.out, &query.list_ids())?,
        ListFormat::Count => write_count(io.out, query.count())?,
        format => {
            let records = query.list(&fields);
            debug!(rows = records.len(), ?format, "listing sidebars");
            let columns: Vec<&str> = fields.iter().map(|f| f.as_str()).collect();
            write_records(io.out, &records, &columns, format.into(), ctx)?;
        }
    }
    Ok(Outcome::Success)
}
