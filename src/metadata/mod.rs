//! Forge installer metadata: wire schema, normalization, and the
//! concurrency-safe version index.
//!
//! The refresh path fetches the upstream metadata document, normalizes each
//! build into zero-or-one [`RemoteVersion`] entries, and atomically publishes
//! the result into a [`VersionIndex`] that callers query by canonical game
//! version.

mod alias;
mod index;
mod list;
mod raw;
mod transform;

use chrono::{DateTime, Utc};

pub use alias::{from_lookup_version, to_lookup_version};
pub use index::{VersionIndex, VersionMap};
pub use list::{ForgeVersionList, FORGE_METADATA_URL};
pub use raw::{MetadataRoot, RawBuild};
pub use transform::{transform_build, BuildOutcome, INSTALLER_TAG};

/// One installable loader build for a game version.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RemoteVersion {
    /// Game version in the upstream lookup spelling, ready to round-trip
    /// into a follow-up request.
    pub game_version: String,
    /// Loader version (e.g., "14.23.5.2854").
    pub version: String,
    /// Release instant, when the upstream `modified` field parsed cleanly.
    pub release_date: Option<DateTime<Utc>>,
    /// Download URLs. Currently a single installer URL.
    pub urls: Vec<String>,
}

impl RemoteVersion {
    /// Returns the installer download URL.
    pub fn installer_url(&self) -> Option<&str> {
        self.urls.first().map(String::as_str)
    }
}
