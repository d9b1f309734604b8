//! Discovery of activities with recorded data.

use std::path::Path;

use tracing::debug;

use impact_model::ActivityType;

use crate::error::{IngestError, Result};
use crate::layout::{ACTIVITY_DIR_PREFIX, data_dir};

/// Lists the activity types that have at least one response file under the
/// project's `data/` directory, in catalog order.
///
/// A project without a `data/` directory has no submissions yet and yields
/// an empty list. Directories that do not follow the `reponses_<activity>`
/// naming, or that name an unknown activity, are skipped.
pub fn discover_activities(project: &Path) -> Result<Vec<ActivityType>> {
    let data = data_dir(project);
    if !data.is_dir() {
        debug!(path = %data.display(), "no data directory yet");
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(&data).map_err(|source| IngestError::DirectoryRead {
        path: data.clone(),
        source,
    })?;

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| IngestError::DirectoryRead {
            path: data.clone(),
            source,
        })?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        let Some(key) = name.strip_prefix(ACTIVITY_DIR_PREFIX) else {
            continue;
        };
        let Ok(activity) = key.parse::<ActivityType>() else {
            debug!(directory = name, "skipping unknown activity directory");
            continue;
        };
        if has_csv_file(&path)? {
            found.push(activity);
        }
    }

    found.sort();
    found.dedup();
    Ok(found)
}

fn has_csv_file(dir: &Path) -> Result<bool> {
    let entries = std::fs::read_dir(dir).map_err(|source| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let is_csv = path.is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.'));
        if is_csv && !hidden {
            return Ok(true);
        }
    }
    Ok(false)
}
