use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use sts_account::sts_client::{get_config, load_sts_client, StsClientConfig};
use tracing::debug;

#[derive(Debug, Args)]
pub struct ClientArgs {
    /// Path to a JSON file with `profile`, `region` and `endpoint_url`. Flags override it.
    #[arg(short, long, global = true)]
    config_path: Option<PathBuf>,
    /// AWS profile to use instead of the default one
    #[arg(long, global = true)]
    profile: Option<String>,
    #[arg(long, global = true)]
    region: Option<String>,
    /// Send requests to this STS endpoint instead of the AWS one
    #[arg(long, global = true)]
    endpoint_url: Option<String>,
}

impl ClientArgs {
    pub async fn sts_client_config(self) -> anyhow::Result<StsClientConfig> {
        let file_config = match &self.config_path {
            Some(config_path) => get_config(config_path)
                .await
                .with_context(|| format!("Failed to read config file {:?}", config_path))?,
            None => Default::default(),
        };
        Ok(file_config.merge(StsClientConfig {
            profile: self.profile,
            region: self.region,
            endpoint_url: self.endpoint_url,
        }))
    }

    pub async fn load_client(self) -> anyhow::Result<aws_sdk_sts::Client> {
        let config = self.sts_client_config().await?;
        debug!(?config, "loading STS client");
        Ok(load_sts_client(&config).await)
    }
}
