pub mod config;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod models;
pub mod store;
pub mod sync;
pub mod transform;
pub mod utils;

// Re-export commonly used items
pub use config::SyncConfig;
pub use error::{Result, SyncError};
pub use fetch::{ConferenceSource, RemoteFetcher};
pub use models::{LocalConference, UpstreamConference, UpstreamInstance, CURATED_FIELDS};
pub use sync::{EmptyStage, GroupReport, SyncOutcome, SyncReport, Synchronizer};
pub use utils::{group_key, module_identifier, parse_date_range};
