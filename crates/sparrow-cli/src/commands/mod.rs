//! CLI command implementations.

use anyhow::{Context, Result};
use sparrow_deployer::SiteProvisioner;
use sparrow_deployer::aws::AwsBackends;
use std::path::Path;
use tracing::info;

/// Provision a public static site for `domain` on AWS.
pub async fn create_static_site(config_path: Option<&Path>, domain: &str) -> Result<()> {
    let settings = sparrow_config::load_settings(config_path).with_context(|| match config_path {
        Some(path) => format!("Failed to load site settings: {}", path.display()),
        None => "Failed to load site settings".to_string(),
    })?;

    let backends = AwsBackends::from_env(&settings).await;
    let provisioner = SiteProvisioner::with_settings(
        backends.storage,
        backends.certificates,
        backends.cdn,
        settings,
    );

    provisioner
        .provision(domain)
        .await
        .with_context(|| format!("Failed to provision static site for {}", domain))?;

    info!(domain, "Static site provisioned");
    println!("✓ Static site created for {}", domain);
    Ok(())
}
