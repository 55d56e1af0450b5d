//! Site backup: catalog fetch, path resolution and artifact writing

pub mod catalog;
pub mod resolver;
pub mod sanitize;
pub mod sidecar;
pub mod writer;

pub use catalog::Catalog;
pub use resolver::ProjectIndex;
pub use sanitize::{safe_segment, sanitize};
pub use sidecar::write_sidecar;
pub use writer::{BackupSummary, BackupWriter, WORKBOOKS_DIR};
