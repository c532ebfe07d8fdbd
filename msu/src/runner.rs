use crate::cli::Args;
use crate::cratesio::{CratesIoClient, SelectionPolicy};
use anyhow::Result;
use ms_updater_core::manifest::{manifest_path, read_lines};
use ms_updater_core::{update_lines, update_manifest};

/// Initialize the `log` backend. Defaults to warnings only; `RUST_LOG`
/// overrides it.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Update the project's Cargo.toml using the given registry policy
pub async fn run(args: &Args, policy: SelectionPolicy) -> Result<()> {
    let project_path = args.project_path();

    // Validate project path exists
    if !project_path.is_dir() {
        anyhow::bail!("Project path is not a directory: {}", project_path.display());
    }

    let manifest = manifest_path(&project_path);
    let client = CratesIoClient::new(policy)?.with_base_url(&args.registry);
    log::debug!("updating {} with {policy:?} policy", manifest.display());

    let report = if args.dry_run {
        let lines = read_lines(&manifest)?;
        update_lines(lines, &client).await.1
    } else {
        update_manifest(&manifest, &client).await?
    };

    log::info!(
        "{} of {} dependencies updated in {}",
        report.updates.len(),
        report.lookups,
        manifest.display()
    );

    Ok(())
}
