use crate::error::Result;
use crate::table::{Cell, Table};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone)]
pub struct RecordsOptions {
    /// Spaces per indent level for pretty-printing; 0 writes compact
    /// single-line output.
    pub indent_width: usize,
}

impl Default for RecordsOptions {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

/// Writes `table` to `path` as a JSON array of objects, one per row, each
/// object keyed by column name in column order.
///
/// Any existing file at `path` is overwritten; IO and serialization failures
/// propagate unmodified. Logs the destination on success.
pub fn export_records(
    table: &Table,
    path: impl AsRef<Path>,
    options: &RecordsOptions,
) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    let records: Vec<Record> = table
        .rows()
        .iter()
        .map(|row| Record {
            columns: table.columns(),
            row,
        })
        .collect();

    if options.indent_width == 0 {
        serde_json::to_writer(&mut writer, &records)?;
    } else {
        let indent = vec![b' '; options.indent_width];
        let formatter = PrettyFormatter::with_indent(&indent);
        let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
        records.serialize(&mut ser)?;
    }

    writer.flush()?;
    info!(path = %path.display(), rows = table.row_count(), "Data saved to records file");
    Ok(())
}

/// One row serialized as an object with keys in column order. serde_json's
/// default map type would sort keys, so the map is emitted by hand.
struct Record<'a> {
    columns: &'a [String],
    row: &'a [Cell],
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, cell) in self.columns.iter().zip(self.row) {
            map.serialize_entry(name, cell)?;
        }
        map.end()
    }
}
