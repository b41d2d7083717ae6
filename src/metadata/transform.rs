//! Pure per-build transform from raw metadata to index entries.
//!
//! The transform itself carries no skip policy: it reports what happened to
//! each build ID through [`BuildOutcome`] and leaves counting and logging of
//! skips to the refresh fold.

use chrono::{DateTime, Utc};
use log::warn;

use super::alias::to_lookup_version;
use super::raw::{MetadataRoot, RawBuild};
use super::RemoteVersion;

/// Classifier tag that marks a file as the installer artifact.
pub const INSTALLER_TAG: &str = "installer";

/// Result of transforming one build ID from the metadata document.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildOutcome {
    /// The build has an installer artifact and produced an index entry.
    Included(RemoteVersion),
    /// The build ID has no record in the build table.
    SkippedDanglingId,
    /// The build publishes no installer artifact.
    SkippedNoInstaller,
}

/// Transforms the build with the given ID into zero-or-one index entries.
pub fn transform_build(root: &MetadataRoot, build_id: u32) -> BuildOutcome {
    let Some(build) = root.builds.get(&build_id) else {
        return BuildOutcome::SkippedDanglingId;
    };

    let Some(url) = installer_url(root, build) else {
        return BuildOutcome::SkippedNoInstaller;
    };

    BuildOutcome::Included(RemoteVersion {
        game_version: to_lookup_version(&build.game_version).to_string(),
        version: build.version.clone(),
        release_date: parse_release_date(build.modified.as_deref()),
        urls: vec![url],
    })
}

/// The `<gameVersion>-<loaderVersion>[-<branch>]` segment used in both the
/// remote path and the installer file name.
fn classifier(build: &RawBuild) -> String {
    match build.branch.as_deref().filter(|branch| !branch.trim().is_empty()) {
        Some(branch) => format!("{}-{}-{}", build.game_version, build.version, branch),
        None => format!("{}-{}", build.game_version, build.version),
    }
}

/// Composes the installer download URL, or None when the build publishes no
/// installer. When several installer entries exist the last one wins.
fn installer_url(root: &MetadataRoot, build: &RawBuild) -> Option<String> {
    let mut url = None;

    for file in &build.files {
        if let [extension, tag, ..] = file.as_slice() {
            if tag == INSTALLER_TAG {
                let classifier = classifier(build);
                let file_name = format!("{}-{}-{}.{}", root.artifact, classifier, tag, extension);
                url = Some(format!("{}{}/{}", root.webpath, classifier, file_name));
            }
        }
    }

    url
}

/// Best-effort parse of the `modified` field as Unix epoch seconds.
/// Unparseable or out-of-range values degrade to None with a warning.
fn parse_release_date(modified: Option<&str>) -> Option<DateTime<Utc>> {
    let modified = modified?;

    let parsed = modified
        .parse::<i64>()
        .ok()
        .and_then(|seconds| DateTime::from_timestamp(seconds, 0));

    if parsed.is_none() {
        warn!("Failed to parse release instant {:?}", modified);
    }

    parsed
}
