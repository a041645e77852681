use serde::Deserialize;

/// A conference as described by one ccfddl YAML document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamConference {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Rank type to value, e.g. `ccf: A`; order is kept as written upstream
    #[serde(default)]
    pub rank: Option<serde_yaml::Mapping>,
    #[serde(default)]
    pub confs: Vec<UpstreamInstance>,
}

/// One yearly edition of an upstream conference.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamInstance {
    pub year: i32,
    pub id: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub place: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimelineEntry {
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub abstract_deadline: Option<String>,
}
