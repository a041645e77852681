//! Local conference groups: one YAML file per conference title.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SyncError};
use crate::models::LocalConference;
use crate::utils::yaml::to_block_yaml;
use crate::utils::{group_file_name, GROUP_FILE_EXTENSION};

/// Group files in `dir`, sorted by file name.
///
/// A missing directory has no group files.
pub fn group_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| SyncError::io(dir, e))? {
        let path = entry.map_err(|e| SyncError::io(dir, e))?.path();
        let is_group_file = path.is_file()
            && path.extension().and_then(|ext| ext.to_str()) == Some(GROUP_FILE_EXTENSION);
        if is_group_file {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Read one group file. An empty file holds no records.
pub fn read_group(path: &Path) -> Result<Vec<LocalConference>> {
    let content = fs::read_to_string(path).map_err(|e| SyncError::io(path, e))?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let records: Option<Vec<LocalConference>> =
        serde_yaml::from_str(&content).map_err(|e| SyncError::yaml(path, e))?;
    Ok(records.unwrap_or_default())
}

/// Load every local group, keyed by the title of its first record.
pub fn load_groups(dir: &Path) -> Result<BTreeMap<String, Vec<LocalConference>>> {
    let mut groups = BTreeMap::new();
    for path in group_files(dir)? {
        let records = read_group(&path)?;
        let Some(first) = records.first() else {
            debug!("Skipping empty group file {}", path.display());
            continue;
        };
        groups.insert(first.title.clone(), records);
    }
    Ok(groups)
}

/// Merge freshly transformed records into an existing group.
///
/// Records are matched by id. A match keeps its curated fields; everything
/// else comes from the fresh record. Unmatched existing records stay as they
/// are and unmatched fresh records are added. An id repeated in the existing
/// group collapses to its last occurrence, at the position of its first. The
/// result is ordered by year, records without one last.
pub fn merge_group(
    existing: &[LocalConference],
    fresh: Vec<LocalConference>,
) -> Vec<LocalConference> {
    let mut merged: Vec<LocalConference> = Vec::with_capacity(existing.len());
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in existing {
        match index.get(&record.id) {
            Some(&i) => {
                debug!("Collapsing duplicate record {}", record.id);
                merged[i] = record.clone();
            }
            None => {
                index.insert(record.id.clone(), merged.len());
                merged.push(record.clone());
            }
        }
    }

    for mut record in fresh {
        match index.get(&record.id) {
            Some(&i) => {
                record.preserve_curated(&merged[i]);
                merged[i] = record;
            }
            None => {
                index.insert(record.id.clone(), merged.len());
                merged.push(record);
            }
        }
    }

    merged.sort_by_key(LocalConference::sort_year);
    merged
}

/// Render a group as YAML, fields in declaration order and text unescaped.
///
/// Timestamp-shaped strings (`deadline`, `start`, ...) are single-quoted so
/// they load back as text rather than dates.
pub fn render_group(path: &Path, records: &[LocalConference]) -> Result<String> {
    let value = serde_yaml::to_value(records).map_err(|e| SyncError::yaml(path, e))?;
    to_block_yaml(&value).map_err(|e| SyncError::yaml(path, e))
}

/// Write a group to `<dir>/<group key>.yml` and return the path written.
pub fn write_group(dir: &Path, title: &str, records: &[LocalConference]) -> Result<PathBuf> {
    let path = dir.join(group_file_name(title));
    let content = render_group(&path, records)?;
    fs::write(&path, content).map_err(|e| SyncError::io(&path, e))?;
    Ok(path)
}
