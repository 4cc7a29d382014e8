//! Seed script rendering and commit
//!
//! The script is rendered in full, staged next to its target path, applied to
//! the store, and only then moved into place. A failed store write leaves both
//! the previous script and the previous table untouched.

use crate::error::Result;
use crate::store;
use serde::Serialize;
use sqlx::SqlitePool;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use top10_common::checksum::sha256_hex;
use top10_common::DestinationRecord;
use tracing::{debug, info};

const DROP_TABLE: &str = "DROP TABLE IF EXISTS destinations;";

const CREATE_TABLE: &str = "CREATE TABLE destinations (id INTEGER PRIMARY KEY, name TEXT, state TEXT, region TEXT, lat REAL, lon REAL, short_desc TEXT, best_months TEXT, tags TEXT, hero_image TEXT);";

const INSERT_PREFIX: &str =
    "INSERT INTO destinations (id,name,state,region,lat,lon,short_desc,best_months,tags,hero_image) VALUES";

/// Single-quoted SQL string literal
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn real_or_null(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "NULL".to_string(),
    }
}

fn insert_statement(record: &DestinationRecord) -> String {
    format!(
        "{} ({},{},{},{},{},{},{},{},{},{});",
        INSERT_PREFIX,
        record.id,
        quote(&record.name),
        quote(&record.state),
        quote(record.region.as_str()),
        real_or_null(record.lat),
        real_or_null(record.lon),
        quote(&record.short_desc),
        quote(&record.best_months),
        quote(&record.tags),
        quote(&record.hero_image),
    )
}

/// Render the complete seed script: drop, create, then one insert per record
/// in the given order. Lines are joined with `\n`, no trailing newline.
pub fn render_script(records: &[DestinationRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(DROP_TABLE.to_string());
    lines.push(CREATE_TABLE.to_string());
    lines.extend(records.iter().map(insert_statement));
    lines.join("\n")
}

#[derive(Debug, Clone, Serialize)]
pub struct SeedOutcome {
    pub script: String,
    /// Whether the script was executed against the store
    pub applied: bool,
    pub script_path: PathBuf,
    /// SHA-256 of `script`, hex-encoded
    pub digest: String,
    pub records: usize,
}

/// Writes the seed script and applies it to the attached store
#[derive(Debug, Clone)]
pub struct SeedEmitter {
    script_path: PathBuf,
    store: Option<SqlitePool>,
}

impl SeedEmitter {
    pub fn new(script_path: impl Into<PathBuf>) -> Self {
        Self {
            script_path: script_path.into(),
            store: None,
        }
    }

    pub fn with_store(mut self, pool: SqlitePool) -> Self {
        self.store = Some(pool);
        self
    }

    pub fn script_path(&self) -> &Path {
        &self.script_path
    }

    pub async fn emit(&self, records: &[DestinationRecord]) -> Result<SeedOutcome> {
        let script = render_script(records);
        let digest = sha256_hex(script.as_bytes());

        let staged = self.stage(&script)?;
        debug!(staged = %staged.path().display(), "Seed script staged");

        let applied = match &self.store {
            Some(pool) => {
                // on error `staged` drops here and the temp file is removed
                store::apply_script(pool, &script).await?;
                true
            },
            None => false,
        };

        staged
            .persist(&self.script_path)
            .map_err(|e| e.error)?;

        info!(
            path = %self.script_path.display(),
            records = records.len(),
            applied,
            digest = %digest,
            "Seed script committed"
        );

        Ok(SeedOutcome {
            script,
            applied,
            script_path: self.script_path.clone(),
            digest,
            records: records.len(),
        })
    }

    fn stage(&self, script: &str) -> std::io::Result<NamedTempFile> {
        let dir = match self.script_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)?;

        let mut staged = NamedTempFile::new_in(&dir)?;
        staged.write_all(script.as_bytes())?;
        staged.as_file().sync_all()?;
        Ok(staged)
    }
}
