//! Game-version alias table.
//!
//! The upstream document spells a handful of game versions differently from
//! the launcher-facing form. Each entry maps the canonical spelling to the
//! lookup spelling used in upstream paths and requests; both directions are
//! identity for anything not listed.

/// `(canonical, lookup)` alias pairs.
const VERSION_ALIASES: &[(&str, &str)] = &[("1.7.10-pre4", "1.7.10_pre4")];

/// Maps a canonical game version to the upstream lookup spelling.
pub fn to_lookup_version(game_version: &str) -> &str {
    VERSION_ALIASES
        .iter()
        .find(|(canonical, _)| *canonical == game_version)
        .map(|(_, lookup)| *lookup)
        .unwrap_or(game_version)
}

/// Maps an upstream lookup spelling back to the canonical game version.
pub fn from_lookup_version(lookup_version: &str) -> &str {
    VERSION_ALIASES
        .iter()
        .find(|(_, lookup)| *lookup == lookup_version)
        .map(|(canonical, _)| *canonical)
        .unwrap_or(lookup_version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliased_version_forward() {
        assert_eq!(to_lookup_version("1.7.10-pre4"), "1.7.10_pre4");
    }

    #[test]
    fn test_aliased_version_reverse() {
        assert_eq!(from_lookup_version("1.7.10_pre4"), "1.7.10-pre4");
    }

    #[test]
    fn test_round_trip() {
        for version in ["1.7.10-pre4", "1.12.2", "1.7.10"] {
            assert_eq!(from_lookup_version(to_lookup_version(version)), version);
        }
        for version in ["1.7.10_pre4", "1.12.2", "1.7.10"] {
            assert_eq!(to_lookup_version(from_lookup_version(version)), version);
        }
    }

    #[test]
    fn test_identity_for_unknown_versions() {
        assert_eq!(to_lookup_version("1.16.5"), "1.16.5");
        assert_eq!(from_lookup_version("1.16.5"), "1.16.5");
    }
}
