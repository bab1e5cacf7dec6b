use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
};

use anyhow::{Context, Result};

use super::{CompileCommand, CompileCommands};

/// Parse a `compile_commands.json` file.
pub fn parse_compile_database(db_file_path: &Path) -> Result<CompileCommands> {
    let mut db_file = File::open(db_file_path).with_context(|| {
        format!(
            "Failed to open compilation database '{}'",
            db_file_path.display()
        )
    })?;

    let mut db_data = vec![];
    db_file.read_to_end(&mut db_data)?;

    serde_json::from_slice(&db_data).with_context(|| {
        format!(
            "Failed to parse compilation database '{}'",
            db_file_path.display()
        )
    })
}

/// Write `compile_commands` as a JSON array, overwriting any existing file.
pub fn write_compile_database(
    db_file_path: &Path,
    compile_commands: &[CompileCommand],
) -> Result<()> {
    let db_file = File::create(db_file_path).with_context(|| {
        format!(
            "Failed to create compilation database '{}'",
            db_file_path.display()
        )
    })?;

    let mut writer = BufWriter::new(db_file);
    serde_json::to_writer_pretty(&mut writer, compile_commands)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
