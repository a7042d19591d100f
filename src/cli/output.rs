/// Output formatting: table, CSV, JSON, YAML, ids and count modes.
use std::io::Write;

use comfy_table::{Cell, Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::GetFormat;
use crate::registry::SidebarError;
use crate::types::{ErrorOutput, Record};

/// Every encoding the formatter can produce. Commands narrow this with their
/// own clap enums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned table with headers.
    Table,
    /// RFC 4180 CSV with a header row.
    Csv,
    /// Pretty-printed JSON.
    Json,
    /// YAML document.
    Yaml,
    /// Space-separated ids on one line.
    Ids,
    /// Item count on one line.
    Count,
}

/// Output settings shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputCtx {
    pub no_header: bool,
    pub json_errors: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(no_header: bool, json_errors: bool) -> Self {
        Self {
            no_header,
            json_errors,
        }
    }
}

// --- Collections ---

/// Write a collection of records with the given column order.
///
/// `columns` drives headers, so an empty collection still produces a header
/// row in table and CSV modes. `Ids` reads the `id` column; `Count` prints
/// the number of records.
///
/// # Errors
///
/// Returns `SidebarError::Output` if writing or serialization fails.
pub fn write_records(
    out: &mut dyn Write,
    records: &[Record],
    columns: &[&str],
    format: OutputFormat,
    ctx: &OutputCtx,
) -> Result<(), SidebarError> {
    match format {
        OutputFormat::Table => write_table(out, records, columns, ctx),
        OutputFormat::Csv => write_csv(out, records, columns, ctx),
        OutputFormat::Json => write_json(out, records),
        OutputFormat::Yaml => write_yaml(out, records),
        OutputFormat::Ids => {
            let ids: Vec<&str> = records.iter().filter_map(|r| r.get("id")).collect();
            write_ids(out, &ids)
        }
        OutputFormat::Count => write_count(out, records.len()),
    }
}

fn write_table(
    out: &mut dyn Write,
    records: &[Record],
    columns: &[&str],
    ctx: &OutputCtx,
) -> Result<(), SidebarError> {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);

    if !ctx.no_header {
        table.set_header(columns.iter().map(Cell::new));
    }

    for record in records {
        table.add_row(record.values().map(Cell::new));
    }

    writeln!(out, "{table}")?;
    Ok(())
}

fn write_csv(
    out: &mut dyn Write,
    records: &[Record],
    columns: &[&str],
    ctx: &OutputCtx,
) -> Result<(), SidebarError> {
    let mut writer = csv::Writer::from_writer(out);
    if !ctx.no_header {
        writer.write_record(columns)?;
    }
    for record in records {
        writer.write_record(record.values())?;
    }
    writer.flush()?;
    Ok(())
}

// --- Single record ---

/// Write one record: a field/value table, a JSON object or a YAML mapping.
///
/// # Errors
///
/// Returns `SidebarError::Output` if writing or serialization fails.
pub fn write_record(
    out: &mut dyn Write,
    record: &Record,
    format: GetFormat,
    ctx: &OutputCtx,
) -> Result<(), SidebarError> {
    match format {
        GetFormat::Json => write_json(out, record),
        GetFormat::Yaml => write_yaml(out, record),
        GetFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            if !ctx.no_header {
                table.set_header(["Field", "Value"]);
            }
            for (field, value) in record.cells() {
                table.add_row([field, value]);
            }
            writeln!(out, "{table}")?;
            Ok(())
        }
    }
}

// --- Scalars ---

/// Write ids space-separated on a single line.
///
/// # Errors
///
/// Returns `SidebarError::Output` if writing fails.
pub fn write_ids<S: AsRef<str>>(out: &mut dyn Write, ids: &[S]) -> Result<(), SidebarError> {
    let line: Vec<&str> = ids.iter().map(AsRef::as_ref).collect();
    writeln!(out, "{}", line.join(" "))?;
    Ok(())
}

/// Write a count on a single line.
///
/// # Errors
///
/// Returns `SidebarError::Output` if writing fails.
pub fn write_count(out: &mut dyn Write, count: usize) -> Result<(), SidebarError> {
    writeln!(out, "{count}")?;
    Ok(())
}

// --- Diagnostics ---

/// Write a non-fatal warning to the diagnostic stream.
pub fn write_warning(err: &mut dyn Write, message: &str) {
    let _ = writeln!(err, "Warning: {message}");
}

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, ctx: &OutputCtx) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    if ctx.json_errors {
        let s = serde_json::to_string_pretty(err).unwrap_or_default();
        let _ = writeln!(out, "{s}");
    } else {
        let _ = writeln!(out, "Error: {}", err.error.message);
    }
}

// --- Serde helpers ---

fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<(), SidebarError> {
    let s = serde_json::to_string_pretty(value)?;
    writeln!(out, "{s}")?;
    Ok(())
}

fn write_yaml<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<(), SidebarError> {
    let s = serde_yaml::to_string(value)?;
    out.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, id: &str) -> Record {
        let mut r = Record::new();
        r.push("name", name);
        r.push("id", id);
        r
    }

    fn render(records: &[Record], format: OutputFormat, ctx: &OutputCtx) -> String {
        let mut buf = Vec::new();
        write_records(&mut buf, records, &["name", "id"], format, ctx).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_csv_header_and_rows() {
        let out = render(
            &[record("Widget Area", "sidebar-1")],
            OutputFormat::Csv,
            &OutputCtx::default(),
        );
        assert_eq!(out, "name,id\nWidget Area,sidebar-1\n");
    }

    #[test]
    fn test_csv_quotes_markup() {
        let out = render(
            &[record("A, \"quoted\"", "a")],
            OutputFormat::Csv,
            &OutputCtx::new(true, false),
        );
        assert_eq!(out, "\"A, \"\"quoted\"\"\",a\n");
    }

    #[test]
    fn test_csv_empty_collection_keeps_header() {
        let out = render(&[], OutputFormat::Csv, &OutputCtx::default());
        assert_eq!(out, "name,id\n");
    }

    #[test]
    fn test_json_array_in_field_order() {
        let out = render(
            &[record("Widget Area", "sidebar-1")],
            OutputFormat::Json,
            &OutputCtx::default(),
        );
        let name_at = out.find("\"name\"").unwrap();
        let id_at = out.find("\"id\"").unwrap();
        assert!(name_at < id_at);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["id"], "sidebar-1");
    }

    #[test]
    fn test_yaml_sequence() {
        let out = render(
            &[record("Widget Area", "sidebar-1")],
            OutputFormat::Yaml,
            &OutputCtx::default(),
        );
        assert_eq!(out, "- name: Widget Area\n  id: sidebar-1\n");
    }

    #[test]
    fn test_table_contains_headers_and_values() {
        let out = render(
            &[record("Widget Area", "sidebar-1")],
            OutputFormat::Table,
            &OutputCtx::default(),
        );
        assert!(out.contains("name"));
        assert!(out.contains("Widget Area"));
        assert!(out.contains("sidebar-1"));
    }

    #[test]
    fn test_table_no_header() {
        let out = render(
            &[record("Widget Area", "sidebar-1")],
            OutputFormat::Table,
            &OutputCtx::new(true, false),
        );
        assert!(!out.contains("name"));
        assert!(out.contains("Widget Area"));
    }

    #[test]
    fn test_ids_and_count_from_records() {
        let records = [record("A", "a"), record("B", "b")];
        assert_eq!(render(&records, OutputFormat::Ids, &OutputCtx::default()), "a b\n");
        assert_eq!(render(&records, OutputFormat::Count, &OutputCtx::default()), "2\n");
    }

    #[test]
    fn test_single_record_json_is_object() {
        let mut buf = Vec::new();
        write_record(
            &mut buf,
            &record("Footer", "footer"),
            GetFormat::Json,
            &OutputCtx::default(),
        )
        .unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed["name"], "Footer");
    }

    #[test]
    fn test_single_record_table_is_field_value() {
        let mut buf = Vec::new();
        write_record(
            &mut buf,
            &record("Footer", "footer"),
            GetFormat::Table,
            &OutputCtx::default(),
        )
        .unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Field"));
        assert!(out.contains("Value"));
        assert!(out.contains("Footer"));
    }

    #[test]
    fn test_warning_prefix() {
        let mut buf = Vec::new();
        write_warning(&mut buf, "No widgets found.");
        assert_eq!(String::from_utf8(buf).unwrap(), "Warning: No widgets found.\n");
    }
}
