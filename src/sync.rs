//! End-to-end synchronization run.

use std::collections::BTreeMap;
use std::fs;

use chrono::{Datelike, Utc};
use tracing::{info, warn};

use crate::config::SyncConfig;
use crate::error::{Result, SyncError};
use crate::fetch::ConferenceSource;
use crate::loader::write_loader;
use crate::models::LocalConference;
use crate::store::{load_groups, merge_group, write_group};
use crate::transform::transform_conferences;
use crate::utils::group_file_name;

/// Records written for one conference title.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupReport {
    pub title: String,
    pub file_name: String,
    pub records: usize,
}

#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub fetched: usize,
    pub transformed: usize,
    pub groups: Vec<GroupReport>,
    /// Group files referenced by the regenerated loader; `None` on dry runs.
    pub loader_files: Option<usize>,
}

/// Stage that came back empty and stopped the run before any write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyStage {
    Fetch,
    Transform,
}

#[derive(Debug, Clone)]
pub enum SyncOutcome {
    Completed(SyncReport),
    Aborted(EmptyStage),
}

/// Runs the fetch, merge and loader steps against one storage directory.
#[derive(Debug, Clone)]
pub struct Synchronizer {
    config: SyncConfig,
    current_year: i32,
}

impl Synchronizer {
    pub fn new(config: SyncConfig) -> Self {
        Self {
            config,
            current_year: Utc::now().year(),
        }
    }

    /// Treat `year` as the current calendar year when picking editions.
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub async fn run<S: ConferenceSource>(&self, source: &S) -> Result<SyncOutcome> {
        let data_dir = &self.config.data_dir;

        let current_groups = load_groups(data_dir)?;
        info!("Loaded {} local conference groups", current_groups.len());

        let upstream = source.fetch_conferences().await?;
        if upstream.is_empty() {
            warn!("No conferences fetched from upstream");
            return Ok(SyncOutcome::Aborted(EmptyStage::Fetch));
        }

        let transformed = transform_conferences(&upstream, self.current_year);
        if transformed.is_empty() {
            warn!("No conferences transformed");
            return Ok(SyncOutcome::Aborted(EmptyStage::Transform));
        }
        info!(
            "Transformed {} of {} upstream conferences",
            transformed.len(),
            upstream.len()
        );

        if !self.config.dry_run {
            fs::create_dir_all(data_dir).map_err(|e| SyncError::io(data_dir, e))?;
        }

        let mut report = SyncReport {
            fetched: upstream.len(),
            transformed: transformed.len(),
            ..Default::default()
        };

        for (title, fresh) in group_by_title(transformed) {
            let existing = current_groups.get(&title).map(Vec::as_slice).unwrap_or_default();
            let merged = merge_group(existing, fresh);
            let file_name = group_file_name(&title);

            if self.config.dry_run {
                info!("Would update {} with {} entries", file_name, merged.len());
            } else {
                write_group(data_dir, &title, &merged)?;
                info!("Updated {} with {} entries", file_name, merged.len());
            }

            report.groups.push(GroupReport {
                title,
                file_name,
                records: merged.len(),
            });
        }

        if !self.config.dry_run {
            let count = write_loader(
                data_dir,
                &self.config.loader_path,
                &self.config.import_prefix,
            )?;
            info!("Updated conference loader with {} conference files", count);
            report.loader_files = Some(count);
        }

        info!("Successfully updated {} conference files", report.groups.len());
        Ok(SyncOutcome::Completed(report))
    }
}

/// Group transformed records by title, keeping upstream order within a title.
fn group_by_title(records: Vec<LocalConference>) -> BTreeMap<String, Vec<LocalConference>> {
    let mut groups: BTreeMap<String, Vec<LocalConference>> = BTreeMap::new();
    for record in records {
        groups.entry(record.title.clone()).or_default().push(record);
    }
    groups
}
