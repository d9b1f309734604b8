//! Reading and appending response files.
//!
//! Submissions of the same (activity, phase) may carry different optional
//! field sets over the product's lifetime, so appending is a
//! read-union-rewrite sequence: the header becomes the union of all field
//! names seen so far (existing fields first, in first-seen order) and every
//! prior row is back-filled with empty values for fields it lacks.

use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::{debug, info};

use impact_model::{ActivityType, DatasetByPhase, Phase, ResponseRecord};

use crate::error::{IngestError, Result};
use crate::layout::{activity_dir, phase_file};

fn strip_bom(raw: &str) -> &str {
    raw.trim_matches('\u{feff}')
}

/// Raw contents of one phase file: the header row plus one record per line.
struct PhaseTable {
    headers: Vec<String>,
    records: Vec<ResponseRecord>,
}

fn read_phase_table(path: &Path) -> Result<PhaseTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::csv(path, e))?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::csv(path, e))?
        .iter()
        .map(|h| strip_bom(h).to_string())
        .collect();
    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| IngestError::csv(path, e))?;
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let record: ResponseRecord = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let value = row.get(idx).unwrap_or("");
                (name.clone(), value.to_string())
            })
            .collect();
        records.push(record);
    }
    Ok(PhaseTable { headers, records })
}

/// Reads all responses for one (activity, phase).
///
/// A missing file means the phase has received no submissions yet and
/// yields an empty list, never an error.
pub fn read_responses(
    project: &Path,
    activity: ActivityType,
    phase: Phase,
) -> Result<Vec<ResponseRecord>> {
    let path = phase_file(project, activity, phase);
    if !path.is_file() {
        debug!(path = %path.display(), "no response file, treating as empty");
        return Ok(Vec::new());
    }
    let table = read_phase_table(&path)?;
    debug!(
        path = %path.display(),
        records = table.records.len(),
        "loaded responses"
    );
    Ok(table.records)
}

/// Loads every phase of one activity.
pub fn load_dataset(project: &Path, activity: ActivityType) -> Result<DatasetByPhase> {
    let mut dataset = DatasetByPhase::new();
    for phase in Phase::ALL {
        dataset.insert(phase, read_responses(project, activity, phase)?);
    }
    Ok(dataset)
}

/// Appends one response, widening the file header to the union of existing
/// fields and the record's fields. Existing fields keep their position; new
/// fields are appended in record order; prior rows are back-filled empty.
pub fn append_response(
    project: &Path,
    activity: ActivityType,
    phase: Phase,
    record: &ResponseRecord,
) -> Result<()> {
    let path = phase_file(project, activity, phase);
    let dir = activity_dir(project, activity);
    std::fs::create_dir_all(&dir).map_err(|source| IngestError::CreateDirectory {
        path: dir.clone(),
        source,
    })?;

    let (mut headers, existing) = if path.is_file() {
        let table = read_phase_table(&path)?;
        (table.headers, table.records)
    } else {
        (Vec::new(), Vec::new())
    };
    for name in record.field_names() {
        if !headers.iter().any(|h| h == name) {
            headers.push(name.to_string());
        }
    }

    let mut writer = WriterBuilder::new()
        .from_path(&path)
        .map_err(|e| IngestError::write(&path, e))?;
    writer
        .write_record(&headers)
        .map_err(|e| IngestError::write(&path, e))?;
    for prior in &existing {
        write_row(&mut writer, &headers, prior).map_err(|e| IngestError::write(&path, e))?;
    }
    write_row(&mut writer, &headers, record).map_err(|e| IngestError::write(&path, e))?;
    writer.flush().map_err(|e| IngestError::write(&path, e))?;

    info!(
        path = %path.display(),
        rows = existing.len() + 1,
        columns = headers.len(),
        "response appended"
    );
    Ok(())
}

fn write_row(
    writer: &mut csv::Writer<std::fs::File>,
    headers: &[String],
    record: &ResponseRecord,
) -> std::result::Result<(), csv::Error> {
    let row: Vec<&str> = headers
        .iter()
        .map(|name| record.get(name).unwrap_or(""))
        .collect();
    writer.write_record(row)
}
