/// `get` command: show one sidebar by id.
use super::{Outcome, Streams};
use crate::cli::args::GetArgs;
use crate::cli::output::write_record;
use crate::cli::OutputCtx;
use crate::registry::{SidebarError, SidebarQuery, parse_fields};

/// Run `sidebarcli sidebar get`.
///
/// # Errors
///
/// Returns `SidebarError::NotFound` for an unregistered id,
/// `SidebarError::InvalidField` for an unknown `--fields` entry, or
/// `SidebarError::Output` if writing fails.
pub fn run(
    args: &GetArgs,
    query: &SidebarQuery<'_>,
    ctx: &OutputCtx,
    io: &mut Streams<'_>,
) -> Result<Outcome, SidebarError> {
    let fields = parse_fields(args.fields.as_deref())?;
    let record = query.get(&args.id, &fields)?;
    write_record(io.out, &record, args.format, ctx)?;
    Ok(Outcome::Success)
}

#[cfg(test)]
mod tests {
    use crate::commands::testing::run;
    use crate::registry::SidebarError;

    #[test]
    fn test_get_yaml() {
        let r = run(&["sidebar", "get", "footer", "--format=yaml", "--fields=id,class"]);
        assert!(r.result.is_ok());
        assert_eq!(r.stdout, "id: footer\nclass: footer\n");
    }

    #[test]
    fn test_get_inactive_widgets_by_id() {
        let r = run(&["sidebar", "get", "wp_inactive_widgets", "--format=json"]);
        let parsed: serde_json::Value = serde_json::from_str(&r.stdout).unwrap();
        assert_eq!(parsed["id"], "wp_inactive_widgets");
    }

    #[test]
    fn test_get_unknown_id() {
        let r = run(&["sidebar", "get", "unknown-id"]);
        let err = r.result.unwrap_err();
        assert!(matches!(err, SidebarError::NotFound { .. }));
        assert!(err.to_string().contains("unknown-id"));
        assert_ne!(err.exit_code(), 0);
        assert!(r.stdout.is_empty());
    }
}
