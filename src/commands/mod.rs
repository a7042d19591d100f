/// Command dispatch: routes `SidebarCommand` variants to their implementations.
pub mod exists;
pub mod get;
pub mod list;
pub mod widgets;

use std::io::Write;

use crate::cli::OutputCtx;
use crate::cli::args::{Command, SidebarCommand};
use crate::registry::{SidebarError, SidebarQuery};

/// Primary and diagnostic output streams for one invocation.
pub struct Streams<'a> {
    /// Rendered data (stdout).
    pub out: &'a mut dyn Write,
    /// Warnings (stderr).
    pub err: &'a mut dyn Write,
}

/// How a successful command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Normal completion.
    Success,
    /// A predicate command found no match.
    Absent,
}

impl Outcome {
    /// Process exit status for this outcome.
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Absent => 1,
        }
    }
}

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `SidebarError` on any command failure.
pub fn dispatch(
    command: &Command,
    query: &SidebarQuery<'_>,
    ctx: &OutputCtx,
    io: &mut Streams<'_>,
) -> Result<Outcome, SidebarError> {
    match command {
        Command::Sidebar(SidebarCommand::List(args)) => list::run(args, query, ctx, io),
        Command::Sidebar(SidebarCommand::Get(args)) => get::run(args, query, ctx, io),
        Command::Sidebar(SidebarCommand::Exists(args)) => Ok(exists::run(args, query)),
        Command::Sidebar(SidebarCommand::Widgets(args)) => widgets::run(args, query, ctx, io),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::path::Path;

    use super::{Outcome, Streams};
    use crate::cli::OutputCtx;
    use crate::cli::args::{Cli, Command};
    use crate::registry::snapshot::{Registry, parse_json};
    use crate::registry::{InactiveWidgetsPlaceholder, SidebarError, SidebarQuery};
    use clap::Parser;

    /// The registry used across command tests.
    pub fn registry() -> Registry {
        parse_json(
            r#"{
                "sidebars": [
                    {"id": "sidebar-1", "name": "Widget Area", "description": ""},
                    {"id": "footer", "name": "Footer", "description": "Bottom row",
                     "class": "footer", "before_title": "<h3>", "after_title": "</h3>"},
                    {"id": "wp_inactive_widgets", "name": "Inactive Widgets"}
                ],
                "sidebars_widgets": {
                    "sidebar-1": ["w1", "w2"],
                    "footer": [],
                    "array_version": 3
                }
            }"#,
            Path::new("test.json"),
        )
        .unwrap()
    }

    /// Captured result of one command run.
    pub struct Run {
        pub result: Result<Outcome, SidebarError>,
        pub stdout: String,
        pub stderr: String,
    }

    /// Parse `args` as a command line and run it against [`registry`].
    pub fn run(args: &[&str]) -> Run {
        let mut argv = vec!["sidebarcli"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        let command: Command = cli.command;

        let registry = registry();
        let query = SidebarQuery::new(&registry, Some(&InactiveWidgetsPlaceholder));
        let ctx = OutputCtx::new(cli.no_header, cli.json_errors);

        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = {
            let mut io = Streams {
                out: &mut out,
                err: &mut err,
            };
            super::dispatch(&command, &query, &ctx, &mut io)
        };
        Run {
            result,
            stdout: String::from_utf8(out).unwrap(),
            stderr: String::from_utf8(err).unwrap(),
        }
    }
}
