use std::path::Path;

use aws_config::{BehaviorVersion, Region};
use serde::{Deserialize, Serialize};
use tokio::fs::read_to_string;

/// Where to send the request and which credentials to use.
/// Anything left as `None` falls back to the AWS SDK defaults (env vars, `~/.aws/config`, etc).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StsClientConfig {
    /// A profile from the shared AWS config files
    pub profile: Option<String>,
    /// Example: `us-west-2`
    pub region: Option<String>,
    /// Use a different STS endpoint, like a local mock server
    pub endpoint_url: Option<String>,
}

impl StsClientConfig {
    /// Values set in `overrides` win.
    pub fn merge(self, overrides: StsClientConfig) -> Self {
        Self {
            profile: overrides.profile.or(self.profile),
            region: overrides.region.or(self.region),
            endpoint_url: overrides.endpoint_url.or(self.endpoint_url),
        }
    }
}

pub async fn get_config(config_path: impl AsRef<Path>) -> anyhow::Result<StsClientConfig> {
    let config = read_to_string(config_path).await?;
    let config = serde_json::from_str::<StsClientConfig>(&config)?;
    Ok(config)
}

pub async fn load_sts_client(
    StsClientConfig {
        profile,
        region,
        endpoint_url,
    }: &StsClientConfig,
) -> aws_sdk_sts::Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(profile) = profile {
        loader = loader.profile_name(profile);
    }
    if let Some(region) = region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(endpoint_url) = endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }
    let sdk_config = loader.load().await;
    aws_sdk_sts::Client::new(&sdk_config)
}
