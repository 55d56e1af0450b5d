//! Configuration file handling

pub mod settings;

pub use settings::{Settings, SiteErrorPolicy, CONFIG_FILE_NAME};
