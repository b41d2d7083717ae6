//! Wire types for the upstream Forge metadata document.
//!
//! The document is one large JSON object: game versions mapped to numeric
//! build IDs (`mcversion`), a flat table of builds keyed by those IDs
//! (`number`), and the artifact name / base path used to compose download
//! URLs. Every field is decoded leniently; the document only exists for the
//! duration of one refresh.

use serde::Deserialize;
use std::collections::HashMap;

/// The as-fetched metadata document.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct MetadataRoot {
    /// Game-version label -> ordered build IDs.
    #[serde(rename = "mcversion", default)]
    pub game_versions: HashMap<String, Vec<u32>>,
    /// Build ID -> build record. IDs referenced from `game_versions` may be
    /// missing here; callers must tolerate dangling references.
    #[serde(rename = "number", default)]
    pub builds: HashMap<u32, RawBuild>,
    /// Maven artifact name (e.g., "forge").
    #[serde(default)]
    pub artifact: String,
    /// Base URL the classifier path is appended to.
    #[serde(rename = "webpath", default)]
    pub webpath: String,
}

/// One build record from the metadata document.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawBuild {
    /// The game version this build targets. May differ from the outer label
    /// it is listed under.
    #[serde(rename = "mcversion", default)]
    pub game_version: String,
    /// The loader version (e.g., "14.23.5.2854").
    #[serde(default)]
    pub version: String,
    /// Optional branch suffix for the classifier.
    #[serde(default)]
    pub branch: Option<String>,
    /// Last-modified time as decimal Unix epoch seconds. Best-effort; may be
    /// absent or malformed.
    #[serde(default)]
    pub modified: Option<String>,
    /// Published artifacts as loose `[extension, classifier-tag, ...]`
    /// arrays. Entries shorter than two elements are ignored.
    #[serde(default)]
    pub files: Vec<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_document() {
        let json = r#"{
            "artifact": "forge",
            "webpath": "https://example/",
            "mcversion": {"1.12.2": [55, 56]},
            "number": {
                "55": {
                    "mcversion": "1.12.2",
                    "version": "14.23.5.2854",
                    "branch": null,
                    "modified": "1500000000",
                    "files": [["jar", "installer"], ["txt", "changelog"]]
                }
            }
        }"#;

        let root: MetadataRoot = serde_json::from_str(json).unwrap();
        assert_eq!(root.artifact, "forge");
        assert_eq!(root.webpath, "https://example/");
        assert_eq!(root.game_versions["1.12.2"], vec![55, 56]);

        let build = &root.builds[&55];
        assert_eq!(build.game_version, "1.12.2");
        assert_eq!(build.version, "14.23.5.2854");
        assert_eq!(build.branch, None);
        assert_eq!(build.modified.as_deref(), Some("1500000000"));
        assert_eq!(build.files.len(), 2);
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let root: MetadataRoot = serde_json::from_str(r#"{"artifact": "forge"}"#).unwrap();
        assert!(root.game_versions.is_empty());
        assert!(root.builds.is_empty());
        assert_eq!(root.webpath, "");

        let build: RawBuild = serde_json::from_str("{}").unwrap();
        assert_eq!(build.modified, None);
        assert!(build.files.is_empty());
    }

    #[test]
    fn test_deserialize_null_document() {
        // The refresh path fetches Option<MetadataRoot> so a null body is a
        // clean None, not a decode error.
        let root: Option<MetadataRoot> = serde_json::from_str("null").unwrap();
        assert!(root.is_none());
    }

    #[test]
    fn test_deserialize_long_file_entries() {
        let build: RawBuild =
            serde_json::from_str(r#"{"files": [["jar", "installer", "abc123hash"]]}"#).unwrap();
        assert_eq!(build.files[0].len(), 3);
    }
}
