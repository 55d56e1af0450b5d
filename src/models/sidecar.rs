//! Sidecar document written next to every backed-up object

use serde::{Deserialize, Serialize};

use super::Permission;

/// `{name, filename, permissions}`; `filename` is empty for projects
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sidecar {
    pub name: String,
    pub filename: String,
    pub permissions: Vec<Permission>,
}

impl Sidecar {
    pub fn project(name: &str, permissions: Vec<Permission>) -> Self {
        Self {
            name: name.to_string(),
            filename: String::new(),
            permissions,
        }
    }

    pub fn workbook(name: &str, filename: &str, permissions: Vec<Permission>) -> Self {
        Self {
            name: name.to_string(),
            filename: filename.to_string(),
            permissions,
        }
    }
}
