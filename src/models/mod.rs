//! Data models for Tableau REST API responses and backup sidecars

pub mod auth;
pub mod common;
pub mod permission;
pub mod project;
pub mod sidecar;
pub mod workbook;

pub use auth::*;
pub use common::*;
pub use permission::*;
pub use project::*;
pub use sidecar::*;
pub use workbook::*;
