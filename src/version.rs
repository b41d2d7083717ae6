//! Version-string canonicalization and ordering.
//!
//! Game and loader versions arrive as free-form dotted strings. This module
//! parses them into comparable segments and provides the canonical form used
//! for index keys: leading zeros stripped from numeric segments and trailing
//! zero segments dropped, while non-numeric segments pass through verbatim.

use std::cmp::Ordering;
use std::fmt;

/// One dot-separated segment of a version string.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Number(u64),
    Text(String),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Number(n) => write!(f, "{}", n),
            Segment::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A parsed version number with total ordering.
///
/// Numeric segments compare by value, textual segments lexicographically.
/// A textual segment sorts before a numeric one at the same position, so
/// pre-release style labels order ahead of their release counterparts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionNumber {
    segments: Vec<Segment>,
}

impl VersionNumber {
    /// Parses a version string. Never fails; unrecognized input simply
    /// becomes textual segments.
    pub fn parse(version: &str) -> Self {
        let mut segments: Vec<Segment> = version
            .split('.')
            .map(|part| match part.parse::<u64>() {
                Ok(n) => Segment::Number(n),
                Err(_) => Segment::Text(part.to_string()),
            })
            .collect();

        // Trailing zero segments are insignificant ("1.8.0" == "1.8"),
        // but keep at least one segment so "0" survives.
        while segments.len() > 1 && segments.last() == Some(&Segment::Number(0)) {
            segments.pop();
        }

        Self { segments }
    }

    /// Returns the canonical string form of a version.
    pub fn normalize(version: &str) -> String {
        Self::parse(version).to_string()
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl Ord for VersionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut left = self.segments.iter();
        let mut right = other.segments.iter();

        loop {
            match (left.next(), right.next()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(a), Some(b)) => {
                    let ordering = match (a, b) {
                        (Segment::Number(x), Segment::Number(y)) => x.cmp(y),
                        (Segment::Text(x), Segment::Text(y)) => x.cmp(y),
                        // Textual (pre-release style) sorts before numeric.
                        (Segment::Text(_), Segment::Number(_)) => Ordering::Less,
                        (Segment::Number(_), Segment::Text(_)) => Ordering::Greater,
                    };
                    if ordering != Ordering::Equal {
                        return ordering;
                    }
                }
            }
        }
    }
}

impl PartialOrd for VersionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
