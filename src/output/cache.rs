// Content-addressed cache for CSV exports.
//
// The key is the SHA-256 of the exported columns of the ranked table, so the
// same table always maps to the same artifact no matter how the input was
// laid out. The cache only saves rendering work: a read or write failure is
// logged and the export is rendered fresh.
//
// Entries are written to a temporary file and renamed into place, and an
// entry that does not look like a complete export for its table is ignored.
// The directory is pruned to the newest `max_entries` files after each write.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::models::{AnalysisRow, Grade};

/// Entries kept when no limit is configured.
pub const DEFAULT_MAX_ENTRIES: usize = 64;

/// The exported columns of one row. Input line numbers are not part of the key.
#[derive(Serialize)]
struct KeyRow<'a> {
    keyword: &'a str,
    search_volume: i64,
    document_count: i64,
    score: f64,
    grade: Grade,
    description: &'a str,
}

/// Cache key for a ranked table: hex SHA-256 of its exported columns.
pub fn table_key(rows: &[AnalysisRow]) -> Result<String> {
    let key_rows: Vec<KeyRow<'_>> = rows
        .iter()
        .map(|row| KeyRow {
            keyword: &row.record.keyword,
            search_volume: row.record.search_volume,
            document_count: row.record.document_count,
            score: row.result.score,
            grade: row.result.grade,
            description: row.result.description,
        })
        .collect();
    let encoded = serde_json::to_vec(&key_rows).context("failed to encode rows for cache key")?;
    Ok(hex::encode(Sha256::digest(&encoded)))
}

/// True if `contents` is a whole export of `row_count` rows: BOM, header, one
/// CRLF-terminated record per row.
pub fn is_complete_export(contents: &str, row_count: usize) -> bool {
    contents.starts_with(super::csv::UTF8_BOM)
        && contents.ends_with("\r\n")
        && contents.matches("\r\n").count() == row_count + 1
}

/// A directory of rendered exports keyed by table contents.
pub struct ExportCache {
    dir: PathBuf,
    max_entries: usize,
}

impl ExportCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }

    /// Keep at most `max_entries` artifacts (at least one).
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries.max(1);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.csv"))
    }

    /// Look up a previously rendered artifact for a table of `row_count` rows.
    pub fn get(&self, key: &str, row_count: usize) -> Option<String> {
        let path = self.entry_path(key);
        match fs::read_to_string(&path) {
            Ok(contents) if is_complete_export(&contents, row_count) => Some(contents),
            Ok(_) => {
                warn!(path = %path.display(), "Ignoring incomplete export cache entry");
                None
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Unreadable export cache entry");
                None
            }
        }
    }

    /// Store an artifact atomically, then prune old entries.
    /// Failures are logged, never returned.
    pub fn put(&self, key: &str, contents: &str) {
        let path = self.entry_path(key);
        let tmp = self
            .dir
            .join(format!(".{key}.{}.tmp", std::process::id()));

        let result = fs::create_dir_all(&self.dir)
            .and_then(|_| fs::write(&tmp, contents))
            .and_then(|_| fs::rename(&tmp, &path));
        if let Err(e) = result {
            warn!(path = %path.display(), error = %e, "Could not write export cache entry");
            let _ = fs::remove_file(&tmp);
            return;
        }

        self.prune();
    }

    /// Delete the oldest entries beyond `max_entries`.
    pub fn prune(&self) {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %self.dir.display(), error = %e, "Could not list export cache");
                return;
            }
        };

        let mut artifacts: Vec<(SystemTime, PathBuf)> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "csv"))
            .filter_map(|path| {
                let modified = fs::metadata(&path).and_then(|m| m.modified()).ok()?;
                Some((modified, path))
            })
            .collect();

        if artifacts.len() <= self.max_entries {
            return;
        }

        // Newest first; everything past the limit goes
        artifacts.sort_by(|a, b| b.0.cmp(&a.0));
        for (_, path) in artifacts.into_iter().skip(self.max_entries) {
            match fs::remove_file(&path) {
                Ok(()) => debug!(path = %path.display(), "Pruned export cache entry"),
                Err(e) => warn!(path = %path.display(), error = %e, "Could not prune cache entry"),
            }
        }
    }

    /// Return the cached CSV for these rows, rendering and storing it on a miss.
    ///
    /// The boolean is true on a cache hit.
    pub fn get_or_render(&self, rows: &[AnalysisRow]) -> Result<(String, bool)> {
        let key = table_key(rows)?;
        if let Some(contents) = self.get(&key, rows.len()) {
            debug!(key = %key, "Export cache hit");
            return Ok((contents, true));
        }
        debug!(key = %key, "Export cache miss");
        let contents = super::csv::render(rows);
        self.put(&key, &contents);
        Ok((contents, false))
    }
}

/// Where an export ended up and whether the cache supplied it.
#[derive(Debug)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub cache_hit: bool,
}

/// Write the ranked table as a dated CSV file into `out_dir`.
pub fn export_table(
    rows: &[AnalysisRow],
    out_dir: &Path,
    date: NaiveDate,
    cache: Option<&ExportCache>,
) -> Result<ExportOutcome> {
    let (contents, cache_hit) = match cache {
        Some(cache) => cache.get_or_render(rows)?,
        None => (super::csv::render(rows), false),
    };

    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create export directory {}", out_dir.display()))?;
    let path = out_dir.join(super::csv::export_filename(date));
    fs::write(&path, contents.as_bytes())
        .with_context(|| format!("failed to write export {}", path.display()))?;

    Ok(ExportOutcome { path, cache_hit })
}
