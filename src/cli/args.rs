/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use super::output::OutputFormat;

/// sidebarcli — list and inspect widget-area sidebars from a CMS registry snapshot.
#[derive(Debug, Parser)]
#[command(
    name = "sidebarcli",
    about = "List, inspect and check widget-area sidebars from a CMS registry snapshot",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Registry snapshot (JSON or YAML). Use `-` to read JSON from stdin.
    #[arg(long, global = true, value_name = "PATH")]
    pub registry: Option<PathBuf>,

    /// Configuration file, layered over the user-level config.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Omit table and CSV headers (useful for awk/cut processing).
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Render errors as a JSON envelope on stderr.
    #[arg(long, global = true)]
    pub json_errors: bool,

    /// Log at debug level to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level command namespaces.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Query registered sidebars.
    #[command(subcommand)]
    Sidebar(SidebarCommand),
}

/// `sidebar` subcommands.
#[derive(Debug, Subcommand)]
pub enum SidebarCommand {
    /// List registered sidebars (the inactive-widgets area is excluded).
    List(ListArgs),
    /// Show one sidebar by id.
    Get(GetArgs),
    /// Exit 0 if a sidebar id is registered, 1 otherwise. Prints nothing.
    Exists(ExistsArgs),
    /// List the widgets assigned to a sidebar.
    Widgets(WidgetsArgs),
}

/// Arguments for `sidebarcli sidebar list`.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Comma-separated fields: name, id, description, class,
    /// before_widget, after_widget, before_title, after_title.
    #[arg(long, value_name = "FIELDS")]
    pub fields: Option<String>,

    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    pub format: ListFormat,
}

/// Arguments for `sidebarcli sidebar get`.
#[derive(Debug, Parser)]
pub struct GetArgs {
    /// Sidebar id (exact, case-sensitive).
    pub id: String,

    /// Comma-separated fields (see `sidebar list --help`).
    #[arg(long, value_name = "FIELDS")]
    pub fields: Option<String>,

    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    pub format: GetFormat,
}

/// Arguments for `sidebarcli sidebar exists`.
#[derive(Debug, Parser)]
pub struct ExistsArgs {
    /// Sidebar id (exact, case-sensitive).
    pub id: String,
}

/// Arguments for `sidebarcli sidebar widgets`.
#[derive(Debug, Parser)]
pub struct WidgetsArgs {
    /// Sidebar id (exact, case-sensitive).
    pub id: String,

    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    pub format: WidgetsFormat,
}

/// Formats accepted by `sidebar list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ListFormat {
    #[default]
    Table,
    Csv,
    Json,
    Yaml,
    /// Space-separated ids on one line.
    Ids,
    /// Number of sidebars.
    Count,
}

/// Formats accepted by `sidebar get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum GetFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

/// Formats accepted by `sidebar widgets`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum WidgetsFormat {
    #[default]
    Table,
    Csv,
    Json,
    Yaml,
    /// Space-separated widget ids on one line.
    Ids,
}

impl From<ListFormat> for OutputFormat {
    fn from(f: ListFormat) -> Self {
        match f {
            ListFormat::Table => Self::Table,
            ListFormat::Csv => Self::Csv,
            ListFormat::Json => Self::Json,
            ListFormat::Yaml => Self::Yaml,
            ListFormat::Ids => Self::Ids,
            ListFormat::Count => Self::Count,
        }
    }
}

impl From<WidgetsFormat> for OutputFormat {
    fn from(f: WidgetsFormat) -> Self {
        match f {
            WidgetsFormat::Table => Self::Table,
            WidgetsFormat::Csv => Self::Csv,
            WidgetsFormat::Json => Self::Json,
            WidgetsFormat::Yaml => Self::Yaml,
            WidgetsFormat::Ids => Self::Ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_defaults_to_table() {
        let cli = Cli::try_parse_from(["sidebarcli", "sidebar", "list"]).unwrap();
        match cli.command {
            Command::Sidebar(SidebarCommand::List(args)) => {
                assert_eq!(args.format, ListFormat::Table);
                assert!(args.fields.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sidebarcli",
            "sidebar",
            "list",
            "--format=csv",
            "--fields=name,id",
            "--registry",
            "snap.json",
        ])
        .unwrap();
        assert_eq!(cli.registry, Some(PathBuf::from("snap.json")));
    }

    #[test]
    fn test_get_rejects_csv() {
        let result = Cli::try_parse_from(["sidebarcli", "sidebar", "get", "x", "--format=csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_widgets_rejects_count() {
        let result =
            Cli::try_parse_from(["sidebarcli", "sidebar", "widgets", "x", "--format=count"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_exists_requires_id() {
        assert!(Cli::try_parse_from(["sidebarcli", "sidebar", "exists"]).is_err());
    }
}
