// src/csv.rs
use std::io::{self, Write};

use crate::config::consts::UTF8_BOM;
use crate::config::options::ExportOptions;
use crate::data::{Dataset, MovieRecord};

/// Export column order. Fixed.
pub const HEADERS: [&str; 5] = ["Title", "Rate", "Number of ratings", "Year", "Actors"];

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// One export row in [`HEADERS`] order. Numbers use shortest round-trip formatting.
pub fn record_row(rec: &MovieRecord) -> [String; 5] {
    [
        s!(rec.title()),
        rec.rating().to_string(),
        rec.rating_count().to_string(),
        s!(rec.year()),
        s!(rec.lead_credit()),
    ]
}

/// Write the whole dataset (optional header, then one row per record).
pub fn write_dataset<W: Write>(mut w: W, dataset: &Dataset, include_headers: bool, sep: char) -> io::Result<()> {
    if include_headers {
        write_row(&mut w, &HEADERS, sep)?;
    }
    for rec in dataset {
        write_row(&mut w, &record_row(rec), sep)?;
    }
    Ok(())
}

/// Full export text as it goes to disk (BOM included when enabled).
pub fn to_export_string(export: &ExportOptions, dataset: &Dataset) -> String {
    let mut out = if export.bom { s!(UTF8_BOM) } else { s!() };
    out.push_str(&to_clipboard_string(export, dataset));
    out
}

/// Same text without the BOM, for the clipboard.
pub fn to_clipboard_string(export: &ExportOptions, dataset: &Dataset) -> String {
    let mut buf: Vec<u8> = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_dataset(&mut buf, dataset, export.include_headers, export.format.delim());

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
