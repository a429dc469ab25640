//! Newline-delimited JSON persistence of a harvest.

use anyhow::Context;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use harvest::harvester::HarvestOutcome;

/// File holding the approved standards.
pub const STANDARDS_FILE: &str = "step_1a.json";
/// File holding the apprenticeship postings.
pub const APPRENTICESHIPS_FILE: &str = "step_1b.json";
/// File holding the merged dataset.
pub const MERGED_FILE: &str = "step_2a.json";

/// Writes `rows` to `path`, one JSON object per line.
pub fn write_ndjson<T: Serialize>(path: &Path, rows: &[T]) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for row in rows {
        serde_json::to_writer(&mut writer, row)
            .with_context(|| format!("serializing a row of {}", path.display()))?;
        writer.write_all(b"\n")?;
    }
    writer
        .flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Writes the three datasets of `outcome` into `dir` and returns their paths.
pub fn write_outcome(dir: &Path, outcome: &HarvestOutcome) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let standards = dir.join(STANDARDS_FILE);
    write_ndjson(&standards, &outcome.standards)?;
    let apprenticeships = dir.join(APPRENTICESHIPS_FILE);
    write_ndjson(&apprenticeships, &outcome.apprenticeships)?;
    let merged = dir.join(MERGED_FILE);
    write_ndjson(&merged, &outcome.merged)?;

    Ok(vec![standards, apprenticeships, merged])
}
