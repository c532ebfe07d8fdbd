use anyhow::{Context, Result, bail};
use ms_updater_core::{ResolvedVersion, VersionResolver, is_stable_release};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// Public crates.io registry
pub const DEFAULT_REGISTRY: &str = "https://crates.io";

const USER_AGENT: &str = "ms-updater";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Which registry version a dependency is moved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// `crate.max_version` as reported by the registry
    Latest,
    /// Newest non-yanked release without a pre-release suffix
    Stable,
}

/// The `crate` object of a crates.io response; other keys are ignored
#[derive(Debug, Deserialize)]
struct CrateEnvelope {
    #[serde(rename = "crate")]
    crate_info: CrateInfo,
}

#[derive(Debug, Deserialize)]
struct CrateInfo {
    max_version: String,
}

/// The `versions` list, most recent first. Entries are decoded one at a time
/// so only the ones actually inspected have to be well formed.
#[derive(Debug, Deserialize)]
struct VersionList {
    #[serde(default)]
    versions: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct CrateVersion {
    num: String,
    yanked: bool,
}

impl SelectionPolicy {
    /// Pick the version to write from a raw registry response body.
    ///
    /// Only the fields the policy reads are decoded.
    pub fn select(self, body: &Value) -> Result<String> {
        match self {
            SelectionPolicy::Latest => max_version(body),
            SelectionPolicy::Stable => {
                let list = VersionList::deserialize(body).context("invalid `versions` list")?;
                for entry in list.versions.iter().flatten() {
                    let version =
                        CrateVersion::deserialize(entry).context("invalid `versions` entry")?;
                    if !version.yanked && is_stable_release(&version.num) {
                        return Ok(version.num);
                    }
                }
                max_version(body)
            }
        }
    }
}

fn max_version(body: &Value) -> Result<String> {
    let envelope = CrateEnvelope::deserialize(body).context("invalid `crate.max_version`")?;
    Ok(envelope.crate_info.max_version)
}

/// Client for querying the crates.io API, one crate at a time
#[derive(Debug, Clone)]
pub struct CratesIoClient {
    client: reqwest::Client,
    base_url: String,
    policy: SelectionPolicy,
}

impl CratesIoClient {
    pub fn new(policy: SelectionPolicy) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: DEFAULT_REGISTRY.to_string(),
            policy,
        })
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        // Remove trailing slash if present
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Fetch the raw crate metadata. Anything other than a 200 with a JSON
    /// body is an error.
    pub async fn get_crate(&self, name: &str) -> Result<Value> {
        let url = format!("{}/api/v1/crates/{name}", self.base_url);
        log::debug!("GET {url}");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            bail!("registry returned status {status}");
        }

        response
            .json::<Value>()
            .await
            .context("invalid registry response")
    }

    async fn lookup(&self, name: &str) -> Result<String> {
        let body = self.get_crate(name).await?;
        self.policy.select(&body)
    }
}

impl VersionResolver for CratesIoClient {
    async fn resolve(&self, name: &str) -> ResolvedVersion {
        match self.lookup(name).await {
            Ok(version) => Some(version),
            Err(e) => {
                eprintln!("Error fetching {name}: {e:#}");
                None
            }
        }
    }
}
