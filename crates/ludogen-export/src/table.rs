use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::errors::ExportError;

/// Write records as an aligned, column-padded text table.
///
/// Column order is the field order of the first record (serde_json keeps
/// insertion order); layout is a padded header row, a dash separator, and
/// one padded row per record. Returns bytes written.
pub fn write_pretty_table<T: Serialize>(path: &Path, rows: &[T]) -> Result<u64, ExportError> {
    let table_name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut rendered: Vec<Vec<String>> = Vec::with_capacity(rows.len());
    let mut headers: Vec<String> = Vec::new();
    for row in rows {
        let value = serde_json::to_value(row)?;
        let Value::Object(map) = value else {
            return Err(ExportError::NotTabular(table_name));
        };
        if headers.is_empty() {
            headers = map.keys().cloned().collect();
        }
        rendered.push(
            headers
                .iter()
                .map(|key| map.get(key).map(render_cell).unwrap_or_default())
                .collect(),
        );
    }

    let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
    for row in &rendered {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut writer = CountingWriter::new(BufWriter::new(File::create(path)?));
    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(name, &width)| format!("{name:<width$}"))
        .collect();
    writeln!(writer, "{}", header_line.join(" | "))?;
    let separator: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    writeln!(writer, "{}", separator.join("-+-"))?;
    for row in &rendered {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        writeln!(writer, "{}", line.join(" | "))?;
    }
    writer.flush()?;
    Ok(writer.bytes_written())
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
