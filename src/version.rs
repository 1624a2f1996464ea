//! Startup check against the upstream version file.
//!
//! The bot compares its own version with the plain-text version published
//! upstream and logs whether an update is available. The check is best-effort:
//! a network or parse failure is logged and startup continues. Afterwards the
//! local version is always written to `version.txt`.

use std::cmp::Ordering;
use std::path::PathBuf;
use std::time::Duration;

use semver::Version;
use thiserror::Error;

/// Version of this build.
pub const LOCAL_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_UPSTREAM_URL: &str =
    "https://raw.githubusercontent.com/nameless-on-discord/nameless/main/version.txt";

pub const VERSION_FILE: &str = "version.txt";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum VersionError {
    /// The upstream version file could not be downloaded.
    #[error("Failed to fetch upstream version: {0}")]
    Fetch(#[from] reqwest::Error),

    /// A version string is not a valid semantic version.
    #[error("Failed to parse version '{value}': {source}")]
    Parse {
        value: String,
        #[source]
        source: semver::Error,
    },
}

/// How the local version relates to upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionStatus {
    /// Upstream is newer.
    Outdated,
    UpToDate,
    /// Local is newer, e.g. a development build.
    Ahead,
}

/// Parses a version string, tolerating surrounding whitespace and a `v` prefix.
pub fn parse_version(raw: &str) -> Result<Version, VersionError> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);

    Version::parse(trimmed).map_err(|source| VersionError::Parse {
        value: raw.trim().to_string(),
        source,
    })
}

/// Compares two versions by semantic-version precedence.
///
/// Build metadata is ignored, pre-releases sort before their release.
pub fn compare(local: &Version, upstream: &Version) -> VersionStatus {
    match local.cmp_precedence(upstream) {
        Ordering::Less => VersionStatus::Outdated,
        Ordering::Equal => VersionStatus::UpToDate,
        Ordering::Greater => VersionStatus::Ahead,
    }
}

pub struct VersionChecker {
    client: reqwest::Client,
    upstream_url: String,
    version_file: PathBuf,
}

impl VersionChecker {
    pub fn new(client: reqwest::Client, upstream_url: impl Into<String>) -> Self {
        Self {
            client,
            upstream_url: upstream_url.into(),
            version_file: PathBuf::from(VERSION_FILE),
        }
    }

    /// Writes the version file somewhere other than the working directory.
    pub fn with_version_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.version_file = path.into();
        self
    }

    /// Downloads and parses the upstream version.
    pub async fn fetch_upstream(&self) -> Result<Version, VersionError> {
        let body = self
            .client
            .get(&self.upstream_url)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_version(&body)
    }

    /// Compares `local` against upstream and logs the result.
    pub async fn check(&self, local: &str) -> Result<VersionStatus, VersionError> {
        let local_version = parse_version(local)?;
        let upstream_version = self.fetch_upstream().await?;

        tracing::info!(
            "Current version: {} - Upstream version: {}",
            local_version,
            upstream_version
        );

        let status = compare(&local_version, &upstream_version);
        match status {
            VersionStatus::Outdated => tracing::warn!("You need to update your code!"),
            VersionStatus::UpToDate => tracing::info!("You are using latest version!"),
            VersionStatus::Ahead => {
                tracing::warn!("You are using a version NEWER than original code!")
            }
        }

        Ok(status)
    }

    /// Runs the check and records `local` in the version file.
    ///
    /// Never fails: check and write errors are logged as warnings. The file is
    /// written whatever the outcome of the check.
    ///
    /// # Returns
    /// - `Some(VersionStatus)` - The check completed
    /// - `None` - The check failed and was skipped
    pub async fn run(&self, local: &str) -> Option<VersionStatus> {
        let status = match self.check(local).await {
            Ok(status) => Some(status),
            Err(e) => {
                tracing::warn!("Skipping update check: {}", e);
                None
            }
        };

        if let Err(e) = tokio::fs::write(&self.version_file, local).await {
            tracing::warn!(
                "Failed to write {}: {}",
                self.version_file.display(),
                e
            );
        }

        status
    }
}
