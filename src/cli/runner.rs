//! CLI command runner

use anyhow::Context;
use std::path::Path;
use tracing::Instrument;

use crate::api::TableauClient;
use crate::backup::{safe_segment, BackupSummary, BackupWriter};
use crate::config::{Settings, SiteErrorPolicy};
use crate::error::Result;
use crate::logging::init_logging;

use super::{BackupArgs, Cli, Commands};

/// Run the CLI application.
///
/// Configuration problems are reported before any network activity.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(cli.debug, None)?;
            return Err(e.into());
        }
    };

    init_logging(cli.debug, Some(&settings.logfile_path))?;
    tracing::debug!("Log file: {}", settings.logfile_path.display());
    tracing::debug!("Backup dir: {}", settings.backup_dir.display());

    match cli.command {
        Commands::Backup(args) => run_backup(&settings, args).await,
    }
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Settings::default_path()?,
    };
    Settings::load(&path)
}

/// Run the backup command over every requested site, in order
async fn run_backup(settings: &Settings, args: BackupArgs) -> anyhow::Result<()> {
    let policy = if args.continue_on_error {
        SiteErrorPolicy::Continue
    } else {
        settings.on_site_error
    };

    let client = TableauClient::new(&settings.base_url(), &settings.api_version, settings.page_size)?;
    let mut failed = Vec::new();

    for site_id in &args.sites {
        match backup_site(&client, settings, site_id).await {
            Ok(summary) => tracing::info!(
                "Site '{}' done: {} projects, {} workbooks",
                site_id,
                summary.projects,
                summary.workbooks
            ),
            Err(e) if policy == SiteErrorPolicy::Abort => {
                return Err(e).with_context(|| format!("Backup of site '{}' failed", site_id));
            }
            Err(e) => {
                tracing::error!("Backup of site '{}' failed: {}", site_id, e);
                failed.push(site_id.as_str());
            }
        }
    }

    if !failed.is_empty() {
        anyhow::bail!(
            "{} of {} sites failed: {}",
            failed.len(),
            args.sites.len(),
            failed.join(", ")
        );
    }

    tracing::info!("Backup finished");
    Ok(())
}

/// Sign in, write the site's tree, sign out
async fn backup_site(
    client: &TableauClient,
    settings: &Settings,
    site_id: &str,
) -> Result<BackupSummary> {
    let span = tracing::info_span!("site", id = %site_id);
    let site_dir = settings.backup_dir.join(safe_segment(site_id));

    tracing::info!(parent: &span, "Signing in to {} as {}", settings.base_url(), settings.user);
    client
        .sign_in(&settings.user, &settings.password, site_id)
        .instrument(span.clone())
        .await?;

    let result = BackupWriter::new(client, site_dir, span.clone()).run().await;

    if let Err(e) = client.sign_out().instrument(span.clone()).await {
        tracing::warn!(parent: &span, "Sign-out failed: {}", e);
    }

    result
}
