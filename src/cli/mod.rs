//! CLI interface for the Tableau Server Backup Tool

pub mod runner;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tableau Server Backup Tool - Back up workbooks and projects with their permissions
#[derive(Parser, Debug)]
#[command(name = "tableau-backup")]
#[command(author = "FrazierSystems")]
#[command(version)]
#[command(about = "Back up Tableau Server workbooks, projects and permissions", long_about = None)]
pub struct Cli {
    /// Config file (defaults to config.json next to the executable)
    #[arg(short, long, global = true, env = "TABLEAU_BACKUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Debug logging to console and log file
    #[arg(short, long, global = true, default_value = "false")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Back up all projects and workbooks of one or more sites
    Backup(BackupArgs),
}

/// Arguments for the backup command
#[derive(Args, Debug)]
pub struct BackupArgs {
    /// Site ids (content URLs) to back up, in order
    #[arg(required = true, value_name = "SITE_ID")]
    pub sites: Vec<String>,

    /// Keep going with the next site when one fails
    #[arg(long)]
    pub continue_on_error: bool,
}
