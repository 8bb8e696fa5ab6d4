// src/pipeline/mod.rs
use anyhow::{Context, Result};
use glob::glob;
use std::{
    fs::{self, File},
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};
use tracing::{error, info, instrument};

use crate::normalize::{self, fill, RawEvent, COLUMNS};

/// Parse one NDJSON file into raw events. The first malformed line aborts the
/// whole file; blank lines are skipped.
pub fn read_events(path: &Path) -> Result<Vec<RawEvent>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    let mut events = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line =
            line.with_context(|| format!("failed to read line {} of {}", idx + 1, path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let event: RawEvent = serde_json::from_str(&line)
            .with_context(|| format!("invalid JSON on line {} of {}", idx + 1, path.display()))?;
        events.push(event);
    }
    Ok(events)
}

/// Normalize one NDJSON file and write `<stem>.csv` into `out_dir`, replacing
/// any previous artifact at that path. Returns the artifact path.
#[instrument(level = "info", skip(json_path, out_dir), fields(file = %json_path.display()))]
pub fn process_file(json_path: &Path, out_dir: &Path, keep_unix: bool) -> Result<PathBuf> {
    let events = read_events(json_path)?;
    let mut table = normalize::normalize(&events, keep_unix);
    fill::impute(&mut table);

    // swap only the real extension; a dotted base name like `data.v2.json`
    // must keep its full stem (`data.v2.csv`)
    let file_name = json_path
        .file_name()
        .with_context(|| format!("input path {} has no file name", json_path.display()))?;
    let csv_path = out_dir.join(Path::new(file_name).with_extension("csv"));

    let mut writer = csv::Writer::from_path(&csv_path)
        .with_context(|| format!("failed to create {}", csv_path.display()))?;
    writer.write_record(COLUMNS)?;
    for i in 0..table.len() {
        writer.write_record(table.row(i))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write {}", csv_path.display()))?;

    Ok(csv_path)
}

/// Process every `*.json` file in `input_dir`, writing one CSV per input into
/// `output_dir` (created if missing). A file that fails is logged and
/// skipped; the rest still get processed.
pub fn process_dir(input_dir: &Path, output_dir: &Path, keep_unix: bool) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        anyhow::bail!(
            "input dir `{}` does not exist or is not a directory",
            input_dir.display()
        );
    }
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output dir {}", output_dir.display()))?;

    let pattern = format!("{}/*.json", input_dir.display());
    let mut artifacts = Vec::new();

    for entry in glob(&pattern).context("invalid glob pattern for process_dir")? {
        let json_path = match entry {
            Ok(p) => p,
            Err(e) => {
                error!("cannot read glob entry: {:?}", e);
                continue;
            }
        };
        match process_file(&json_path, output_dir, keep_unix) {
            Ok(csv_path) => {
                info!("processed file saved to {}", csv_path.display());
                artifacts.push(csv_path);
            }
            Err(e) => error!("{} failed: {:#}", json_path.display(), e),
        }
    }

    Ok(artifacts)
}
