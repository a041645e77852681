pub mod conference;
pub mod dates;
pub mod yaml;

pub use conference::{group_file_name, group_key, module_identifier, GROUP_FILE_EXTENSION};
pub use dates::parse_date_range;
