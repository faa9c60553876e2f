use crate::error::Result;
use crate::table::Table;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

const DELIMITER: char = ',';
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Output encoding for delimited export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// UTF-8 with a leading byte-order mark, for spreadsheet imports that
    /// need one to detect the encoding.
    Utf8Bom,
}

#[derive(Debug, Clone, Default)]
pub struct DelimitedOptions {
    /// Prepend a 0-based integer row-index column (empty header cell).
    pub include_row_index: bool,
    pub encoding: TextEncoding,
}

/// Writes `table` to `path` as comma-separated text: a header row of column
/// names, then one line per row.
///
/// Fields containing the delimiter, a double quote, or a newline are quoted,
/// with embedded quotes doubled. Any existing file at `path` is overwritten;
/// IO failures propagate unmodified. Logs the destination on success.
pub fn export_delimited(
    table: &Table,
    path: impl AsRef<Path>,
    options: &DelimitedOptions,
) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    if options.encoding == TextEncoding::Utf8Bom {
        writer.write_all(UTF8_BOM)?;
    }

    let mut header: Vec<String> = Vec::with_capacity(table.columns().len() + 1);
    if options.include_row_index {
        header.push(String::new());
    }
    header.extend(table.columns().iter().cloned());
    write_row(&mut writer, &header)?;

    for (index, row) in table.rows().iter().enumerate() {
        let mut fields: Vec<String> = Vec::with_capacity(row.len() + 1);
        if options.include_row_index {
            fields.push(index.to_string());
        }
        fields.extend(row.iter().map(|cell| cell.to_string()));
        write_row(&mut writer, &fields)?;
    }

    writer.flush()?;
    info!(path = %path.display(), rows = table.row_count(), "Data saved to delimited file");
    Ok(())
}

fn needs_quotes(field: &str) -> bool {
    field.contains(DELIMITER)
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r')
}

fn write_row<W: Write>(w: &mut W, fields: &[String]) -> std::io::Result<()> {
    let mut first = true;
    for field in fields {
        if !first {
            write!(w, "{}", DELIMITER)?;
        } else {
            first = false;
        }
        if needs_quotes(field) {
            let escaped = field.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", field)?;
        }
    }
    writeln!(w)
}
