//! Dump the executed instructions as pretty-printed JSON.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::TranscriptEntry;

pub fn emit(entries: &[TranscriptEntry], path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, entries)
        .with_context(|| format!("Writing {}", path.display()))?;
    writer.flush()?;
    Ok(())
}
