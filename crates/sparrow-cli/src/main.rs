//! Sparrow CLI tool.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "sparrow")]
#[command(about = "Provision static websites on S3 and CloudFront", long_about = None)]
struct Cli {
    /// Site settings file (KDL)
    #[arg(long, global = true, env = "SPARROW_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a bucket, policy and HTTPS distribution for a domain
    CreateStaticSite {
        /// Domain to serve; also used as the bucket name
        domain: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::CreateStaticSite { domain } => {
            commands::create_static_site(cli.config.as_deref(), &domain).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create_static_site() {
        let cli = Cli::try_parse_from(["sparrow", "create-static-site", "example.com"]).unwrap();
        let Commands::CreateStaticSite { domain } = cli.command;
        assert_eq!(domain, "example.com");
    }

    #[test]
    fn test_parse_config_flag() {
        let cli = Cli::try_parse_from([
            "sparrow",
            "create-static-site",
            "example.com",
            "--config",
            "site.kdl",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("site.kdl")));
    }

    #[test]
    fn test_domain_is_required() {
        assert!(Cli::try_parse_from(["sparrow", "create-static-site"]).is_err());
    }
}
