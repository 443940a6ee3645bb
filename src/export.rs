// File: src/export.rs
use crate::core::types::ScoredKeyword;
use crate::error::{KeywordError, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub const CSV_HEADER: &str = "keyword,opportunity,estVol,length";

/// Renders results as CSV. Only the keyword column is quoted; embedded
/// quotes are doubled. Rows are `\n`-separated with no trailing newline.
pub fn to_csv(items: &[ScoredKeyword]) -> String {
    let mut rows = Vec::with_capacity(items.len() + 1);
    rows.push(CSV_HEADER.to_string());
    for kw in items {
        rows.push(format!(
            "\"{}\",{},{},{}",
            kw.phrase.replace('"', "\"\""),
            kw.opportunity,
            kw.estimated_volume,
            kw.word_count
        ));
    }
    rows.join("\n")
}

pub fn to_json(items: &[ScoredKeyword]) -> Result<String> {
    Ok(serde_json::to_string_pretty(items)?)
}

/// Writes the CSV export to `path` atomically.
pub fn save_csv(items: &[ScoredKeyword], path: &Path) -> Result<()> {
    if items.is_empty() {
        return Err(KeywordError::NoResults("export"));
    }
    write_atomic(path, to_csv(items).as_bytes())?;
    tracing::info!(path = %path.display(), rows = items.len(), "CSV exported");
    Ok(())
}

pub fn save_json(items: &[ScoredKeyword], path: &Path) -> Result<()> {
    if items.is_empty() {
        return Err(KeywordError::NoResults("export"));
    }
    write_atomic(path, to_json(items)?.as_bytes())?;
    tracing::info!(path = %path.display(), rows = items.len(), "JSON exported");
    Ok(())
}

/// Writes through a temp file in the target directory and renames it into place.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        writer.write_all(contents)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
