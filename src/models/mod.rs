pub mod conference;
pub mod upstream;

pub use conference::{Deadline, LocalConference, CURATED_FIELDS};
pub use upstream::{TimelineEntry, UpstreamConference, UpstreamInstance};
