//! Tableau Server Backup Tool - Library
//!
//! Backs up the projects and workbooks of Tableau Server sites, with their
//! permissions, into a folder tree mirroring the project hierarchy.

pub mod api;
pub mod backup;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;

pub use error::{AppError, Result};
