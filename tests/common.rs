#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use confsync::{ConferenceSource, Result, SyncConfig, UpstreamConference};
use tempfile::TempDir;

/// Year the fixtures treat as "now".
pub const TEST_YEAR: i32 = 2025;

pub const ICML_YAML: &str = r#"
- title: ICML
  description: International Conference on Machine Learning
  sub: AI
  rank:
    ccf: A
    core: A*
  confs:
    - year: 2024
      id: icml24
      link: https://icml.cc/2024
      timeline:
        - deadline: '2024-02-01 23:59:59'
      timezone: UTC-12
      date: July 21-27, 2024
      place: Vienna, Austria
    - year: 2025
      id: icml25
      link: https://icml.cc/2025
      timeline:
        - abstract_deadline: '2025-01-23 23:59:59'
          deadline: '2025-01-30 23:59:59'
      timezone: UTC-12
      date: July 13-19, 2025
      place: Vancouver, Canada
"#;

pub const SIGGRAPH_YAML: &str = r#"
- title: ACM SIGGRAPH
  description: ACM Special Interest Group on Computer Graphics
  rank:
    ccf: N
  confs:
    - year: 2025
      id: siggraph25
      link: https://s2025.siggraph.org/
      timeline:
        - deadline: '2025-01-23 22:00:00'
      timezone: UTC
      date: Aug 10 - 14, 2025
      place: Vancouver, Canada
"#;

pub const PAST_ONLY_YAML: &str = r#"
- title: ALT
  description: Algorithmic Learning Theory
  confs:
    - year: 2023
      id: alt23
      link: https://algorithmiclearningtheory.org/alt2023/
      timeline:
        - deadline: '2022-09-22 23:59:59'
      timezone: AoE
      date: February 20-23, 2023
      place: Singapore
"#;

pub fn parse(yaml: &str) -> UpstreamConference {
    confsync::fetch::parse_document(yaml)
        .expect("fixture should parse")
        .expect("fixture should hold a conference")
}

/// In-memory upstream.
pub struct StaticSource(pub Vec<UpstreamConference>);

impl StaticSource {
    pub fn from_yaml(documents: &[&str]) -> Self {
        Self(documents.iter().map(|doc| parse(doc)).collect())
    }
}

impl ConferenceSource for StaticSource {
    async fn fetch_conferences(&self) -> Result<Vec<UpstreamConference>> {
        Ok(self.0.clone())
    }
}

/// A scratch front-end checkout with the default layout.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("src/data/conferences")
    }

    pub fn loader_path(&self) -> PathBuf {
        self.dir.path().join("src/utils/conferenceLoader.ts")
    }

    pub fn config(&self) -> SyncConfig {
        SyncConfig {
            data_dir: self.data_dir(),
            loader_path: self.loader_path(),
            ..Default::default()
        }
    }

    pub fn write_group(&self, file_name: &str, content: &str) {
        fs::create_dir_all(self.data_dir()).unwrap();
        fs::write(self.data_dir().join(file_name), content).unwrap();
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    pub fn read_group(&self, file_name: &str) -> String {
        self.read(&self.data_dir().join(file_name))
    }
}
