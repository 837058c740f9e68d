mod serializer;

use self::serializer::record_literal;
use crate::reader::Opening;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Write one record literal per opening, newline-terminated, in input
/// order. The array declaration wrapping the lines is left to the
/// consumer of the generated file.
pub fn write_table(openings: &[Opening], table_path: &PathBuf) -> Result<()> {
    let output = File::create(table_path).with_context(|| {
        format!(
            "Could not open file {} for writing",
            table_path.to_string_lossy()
        )
    })?;

    let mut writer = BufWriter::new(output);
    for opening in openings {
        writeln!(writer, "{}", record_literal(opening)).with_context(|| {
            format!(
                "Error writing table data to {}",
                table_path.to_string_lossy()
            )
        })?;
    }

    writer.flush().with_context(|| {
        format!(
            "Error writing table data to {}",
            table_path.to_string_lossy()
        )
    })
}
