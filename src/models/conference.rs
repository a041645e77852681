use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One dated deadline of a conference (submission, rebuttal, camera-ready...).
///
/// Hand-written entries are often partial; missing keys stay missing on write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deadline {
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(flatten)]
    pub extra: serde_yaml::Mapping,
}

/// A conference record as persisted in the local group files.
///
/// Field order here is the key order written to disk, so keep the
/// upstream-derived fields first and the locally curated ones after them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalConference {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abstract_deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
    /// Formatted ranking string, e.g. `CCF: A, CORE: A*`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rankings: Option<String>,

    // Locally curated, never sourced from upstream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    /// Usually a number, but curators also write `N/A` or `TBD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hindex: Option<serde_yaml::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone_submission: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rebuttal_period_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rebuttal_period_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_decision_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commitment_deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadlines: Option<Vec<Deadline>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paperslink: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pwclink: Option<String>,

    /// Keys this schema does not know about, kept in file order.
    #[serde(flatten)]
    pub extra: serde_yaml::Mapping,
}

/// Declares the optional curated fields once and derives both the public
/// name list and the copy-forward used by the merge.
macro_rules! curated_fields {
    ($($field:ident),* $(,)?) => {
        /// Fields that are maintained by hand and survive every sync.
        ///
        /// `tags` is always carried over; every other entry is carried over
        /// when the existing record has a value for it.
        pub const CURATED_FIELDS: &[&str] = &["tags", $(stringify!($field)),*];

        impl LocalConference {
            /// Copy curated values from the locally stored version of this
            /// record over whatever the upstream transform produced.
            ///
            /// `rankings` and unknown extra keys are carried over as well.
            pub fn preserve_curated(&mut self, existing: &LocalConference) {
                self.tags = existing.tags.clone();
                $(
                    if existing.$field.is_some() {
                        self.$field = existing.$field.clone();
                    }
                )*
                if existing.rankings.is_some() {
                    self.rankings = existing.rankings.clone();
                }
                for (key, value) in &existing.extra {
                    self.extra.insert(key.clone(), value.clone());
                }
            }
        }
    };
}

curated_fields!(
    venue,
    hindex,
    submission_deadline,
    timezone_submission,
    rebuttal_period_start,
    rebuttal_period_end,
    final_decision_date,
    review_release_date,
    commitment_deadline,
    note,
    deadlines,
    place,
    format,
    paperslink,
    pwclink,
);

impl LocalConference {
    /// Sort key for a group file; records without a year go last.
    pub fn sort_year(&self) -> i32 {
        self.year.unwrap_or(9999)
    }
}
