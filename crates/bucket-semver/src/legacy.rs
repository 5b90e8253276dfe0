//! Dotted numeric versions with two to four components (`major.minor[.build[.revision]]`)

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SemVersionError};

/// A plain numeric version without prerelease or build labels.
///
/// A revision can only be present together with a build number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegacyVersion {
    major: u64,
    minor: u64,
    build: Option<u64>,
    revision: Option<u64>,
}

impl LegacyVersion {
    pub fn new(major: u64, minor: u64) -> Self {
        LegacyVersion {
            major,
            minor,
            build: None,
            revision: None,
        }
    }

    pub fn with_build(major: u64, minor: u64, build: u64) -> Self {
        LegacyVersion {
            build: Some(build),
            ..Self::new(major, minor)
        }
    }

    pub fn with_revision(major: u64, minor: u64, build: u64, revision: u64) -> Self {
        LegacyVersion {
            revision: Some(revision),
            ..Self::with_build(major, minor, build)
        }
    }

    /// Build from a slice of 2 to 4 components
    pub fn from_components(components: &[u64]) -> Result<Self> {
        match *components {
            [major, minor] => Ok(Self::new(major, minor)),
            [major, minor, build] => Ok(Self::with_build(major, minor, build)),
            [major, minor, build, revision] => Ok(Self::with_revision(major, minor, build, revision)),
            _ => Err(SemVersionError::LegacyComponents(components.len())),
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn build(&self) -> Option<u64> {
        self.build
    }

    pub fn revision(&self) -> Option<u64> {
        self.revision
    }
}

impl FromStr for LegacyVersion {
    type Err = SemVersionError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let components = trimmed
            .split('.')
            .map(|part| {
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(SemVersionError::format(s, format!("\"{}\" is not a number", part)));
                }
                part.parse::<u64>()
                    .map_err(|_| SemVersionError::format(s, format!("component {} is too large", part)))
            })
            .collect::<Result<Vec<u64>>>()?;

        Self::from_components(&components)
    }
}

impl fmt::Display for LegacyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(build) = self.build {
            write!(f, ".{}", build)?;
        }
        if let Some(revision) = self.revision {
            write!(f, ".{}", revision)?;
        }
        Ok(())
    }
}
