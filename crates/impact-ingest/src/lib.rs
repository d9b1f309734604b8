pub mod discovery;
pub mod error;
pub mod layout;
pub mod store;

pub use discovery::discover_activities;
pub use error::{IngestError, Result};
pub use layout::{activity_dir, data_dir, phase_file};
pub use store::{append_response, load_dataset, read_responses};
