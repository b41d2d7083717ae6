//! Refresh orchestration for the Forge version index.

use anyhow::Result;
use log::debug;
use reqwest::Client;

use crate::http::HttpClient;
use crate::version::VersionNumber;

use super::alias::from_lookup_version;
use super::index::{VersionIndex, VersionMap};
use super::raw::MetadataRoot;
use super::transform::{transform_build, BuildOutcome};

/// The fixed remote endpoint serving the Forge metadata document.
pub const FORGE_METADATA_URL: &str = "https://zkitefly.github.io/forge-maven-metadata/list.json";

/// Remote list of Forge installer builds.
///
/// Holds the transport, the metadata endpoint, and the owned [`VersionIndex`]
/// that [`ForgeVersionList::refresh`] republishes. Safe to share across
/// tasks; refresh and index reads may run concurrently.
pub struct ForgeVersionList {
    http: HttpClient,
    metadata_url: String,
    index: VersionIndex,
}

impl ForgeVersionList {
    /// Creates a version list backed by the fixed upstream endpoint.
    pub fn new(client: Client) -> Self {
        Self::with_metadata_url(client, FORGE_METADATA_URL)
    }

    /// Creates a version list backed by a custom metadata endpoint.
    pub fn with_metadata_url(client: Client, metadata_url: &str) -> Self {
        Self {
            http: HttpClient::new(client),
            metadata_url: metadata_url.to_string(),
            index: VersionIndex::new(),
        }
    }

    /// Returns the query surface over the indexed builds.
    pub fn index(&self) -> &VersionIndex {
        &self.index
    }

    /// Returns the transport, for downloading the installers themselves.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Fetches the metadata document and rebuilds the index from it.
    ///
    /// An empty or null document is a successful no-op: the existing index is
    /// kept rather than destroyed on a bad upstream response. Transport
    /// failures propagate and leave the index untouched. The replacement map
    /// is built fully before it is published, so concurrent readers only ever
    /// see the previous snapshot or the next one.
    #[tracing::instrument(skip(self))]
    pub async fn refresh(&self) -> Result<()> {
        let root: Option<MetadataRoot> = self.http.get_json(&self.metadata_url).await?;

        let Some(root) = root.filter(|root| !root.game_versions.is_empty()) else {
            debug!("Metadata document is empty; keeping the existing index");
            return Ok(());
        };

        let mut versions = VersionMap::new();
        let mut dangling_ids = 0usize;
        let mut without_installer = 0usize;

        for (label, build_ids) in &root.game_versions {
            let normalized = VersionNumber::normalize(label);
            let game_version = from_lookup_version(&normalized).to_string();

            for &build_id in build_ids {
                match transform_build(&root, build_id) {
                    BuildOutcome::Included(version) => {
                        versions.entry(game_version.clone()).or_default().push(version);
                    }
                    BuildOutcome::SkippedDanglingId => dangling_ids += 1,
                    BuildOutcome::SkippedNoInstaller => without_installer += 1,
                }
            }
        }

        if dangling_ids > 0 || without_installer > 0 {
            debug!(
                "Skipped {} dangling build IDs and {} builds without an installer",
                dangling_ids, without_installer
            );
        }

        let build_count: usize = versions.values().map(Vec::len).sum();
        debug!(
            "Indexed {} builds across {} game versions",
            build_count,
            versions.len()
        );

        self.index.replace_all(versions);
        Ok(())
    }
}
