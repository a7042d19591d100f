/// `widgets` command: list widgets assigned to a sidebar.
use super::{Outcome, Streams};
use crate::cli::args::{WidgetsArgs, WidgetsFormat};
use crate::cli::output::{write_ids, write_records, write_warning};
use crate::cli::OutputCtx;
use crate::registry::{SidebarError, SidebarQuery};
use crate::types::Record;

/// Run `sidebarcli sidebar widgets`.
///
/// An empty sidebar is not an error: a warning goes to the diagnostic stream
/// and nothing is rendered.
///
/// # Errors
///
/// Returns `SidebarError::DoesNotExist` for an unregistered id, or
/// `SidebarError::Output` if writing fails.
pub fn run(
    args: &WidgetsArgs,
    query: &SidebarQuery<'_>,
    ctx: &OutputCtx,
    io: &mut Streams<'_>,
) -> Result<Outcome, SidebarError> {
    let widgets = query.widgets(&args.id)?;

    if widgets.is_empty() {
        write_warning(io.err, "No widgets found.");
        return Ok(Outcome::Success);
    }

    if args.format == WidgetsFormat::Ids {
        write_ids(io.out, &widgets)?;
        return Ok(Outcome::Success);
    }

    let records: Vec<Record> = widgets
        .into_iter()
        .map(|id| {
            let mut record = Record::new();
            record.push("id", id);
            record
        })
        .collect();
    write_records(io.out, &records, &["id"], args.format.into(), ctx)?;
    Ok(Outcome::Success)
}

#[cfg(test)]
mod tests {
    use crate::commands::Outcome;
    use crate::commands::testing::run;
    use crate::registry::SidebarError;

    #[test]
    fn test_widget_ids() {
        let r = run(&["sidebar", "widgets", "sidebar-1", "--format=ids"]);
        assert_eq!(r.result.unwrap(), Outcome::Success);
        assert_eq!(r.stdout, "w1 w2\n");
    }

    #[test]
    fn test_widget_csv() {
        let r = run(&["sidebar", "widgets", "sidebar-1", "--format=csv"]);
        assert_eq!(r.stdout, "id\nw1\nw2\n");
    }

    #[test]
    fn test_empty_sidebar_warns() {
        let r = run(&["sidebar", "widgets", "footer"]);
        assert_eq!(r.result.unwrap().exit_code(), 0);
        assert!(r.stdout.is_empty());
        assert!(r.stderr.contains("No widgets found."));
    }

    #[test]
    fn test_unassigned_placeholder_warns() {
        let r = run(&["sidebar", "widgets", "wp_inactive_widgets", "--format=json"]);
        assert!(r.result.is_ok());
        assert!(r.stdout.is_empty());
        assert!(!r.stderr.is_empty());
    }

    #[test]
    fn test_unknown_sidebar() {
        let r = run(&["sidebar", "widgets", "missing"]);
        let err = r.result.unwrap_err();
        assert!(matches!(err, SidebarError::DoesNotExist { .. }));
        assert!(err.to_string().contains("does not exist"));
        assert!(r.stdout.is_empty());
    }
}
