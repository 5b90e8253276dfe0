//! The semantic version value type

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::comparator::{self, Comparator};
use crate::error::{Result, SemVersionError};
use crate::legacy::LegacyVersion;
use crate::operator::Operator;
use crate::parser;

/// An immutable semantic version.
///
/// `revision` only exists for four-component legacy versions and takes no part
/// in equality, hashing, ordering or formatting.
#[derive(Debug, Clone, Default)]
pub struct SemVersion {
    major: u64,
    minor: u64,
    patch: u64,
    revision: Option<u64>,
    prerelease: String,
    build: String,
}

/// Field overrides for [`SemVersion::change`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionChange {
    pub major: Option<u64>,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
    pub prerelease: Option<String>,
    pub build: Option<String>,
}

impl VersionChange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn major(mut self, major: u64) -> Self {
        self.major = Some(major);
        self
    }

    pub fn minor(mut self, minor: u64) -> Self {
        self.minor = Some(minor);
        self
    }

    pub fn patch(mut self, patch: u64) -> Self {
        self.patch = Some(patch);
        self
    }

    pub fn prerelease(mut self, prerelease: impl Into<String>) -> Self {
        self.prerelease = Some(prerelease.into());
        self
    }

    pub fn build(mut self, build: impl Into<String>) -> Self {
        self.build = Some(build.into());
        self
    }
}

impl SemVersion {
    /// Create a release version without prerelease or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self::with_labels(major, minor, patch, "", "")
    }

    /// Create a version with prerelease and build labels; empty strings mean "not present"
    pub fn with_labels(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: impl Into<String>,
        build: impl Into<String>,
    ) -> Self {
        SemVersion {
            major,
            minor,
            patch,
            revision: None,
            prerelease: prerelease.into(),
            build: build.into(),
        }
    }

    /// Convert a legacy dotted numeric version, failing when none is given
    pub fn from_legacy(source: Option<&LegacyVersion>) -> Result<Self> {
        source
            .map(|legacy| Self::from(*legacy))
            .ok_or(SemVersionError::NullInput)
    }

    /// Parse a version string loosely, defaulting omitted minor/patch to zero
    pub fn parse(text: &str) -> Result<Self> {
        parser::parse(text, false)
    }

    /// Parse a version string, requiring major, minor and patch when `strict` is set
    pub fn parse_with(text: &str, strict: bool) -> Result<Self> {
        parser::parse(text, strict)
    }

    /// Parse a version string requiring major, minor and patch
    pub fn parse_strict(text: &str) -> Result<Self> {
        parser::parse(text, true)
    }

    /// Parse a version string, returning `None` on any failure
    pub fn try_parse(text: &str, strict: bool) -> Option<Self> {
        parser::try_parse(text, strict)
    }

    /// Like [`SemVersion::try_parse`], for call sites where the input itself may be absent
    pub fn try_parse_opt(text: Option<&str>, strict: bool) -> Option<Self> {
        text.and_then(|text| parser::try_parse(text, strict))
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn revision(&self) -> Option<u64> {
        self.revision
    }

    pub fn prerelease(&self) -> &str {
        &self.prerelease
    }

    pub fn build(&self) -> &str {
        &self.build
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Return a copy with the given fields replaced
    pub fn change(&self, change: VersionChange) -> Self {
        SemVersion {
            major: change.major.unwrap_or(self.major),
            minor: change.minor.unwrap_or(self.minor),
            patch: change.patch.unwrap_or(self.patch),
            revision: self.revision,
            prerelease: change.prerelease.unwrap_or_else(|| self.prerelease.clone()),
            build: change.build.unwrap_or_else(|| self.build.clone()),
        }
    }

    /// Precedence comparison of two versions
    pub fn compare(a: &SemVersion, b: &SemVersion) -> Ordering {
        comparator::compare_versions(a, b)
    }

    /// Precedence comparison where either side may be absent; absent sorts first
    pub fn compare_opt(a: Option<&SemVersion>, b: Option<&SemVersion>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => Self::compare(a, b),
        }
    }

    /// Equality where either side may be absent
    pub fn equals_opt(a: Option<&SemVersion>, b: Option<&SemVersion>) -> bool {
        a == b
    }

    /// Parse both sides loosely and evaluate `left <operator> right`
    pub fn compare_with_operator(left: &str, right: &str, operator: &str) -> Result<bool> {
        Comparator::compare(left, operator, right)
    }

    /// Evaluate `self <operator> other`
    pub fn satisfies(&self, operator: Operator, other: &SemVersion) -> bool {
        operator.matches(Self::compare(self, other))
    }
}

impl From<LegacyVersion> for SemVersion {
    fn from(legacy: LegacyVersion) -> Self {
        SemVersion {
            major: legacy.major(),
            minor: legacy.minor(),
            patch: legacy.build().unwrap_or(0),
            revision: legacy.revision(),
            prerelease: String::new(),
            build: String::new(),
        }
    }
}

impl fmt::Display for SemVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

impl PartialEq for SemVersion {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.prerelease == other.prerelease
            && self.build == other.build
    }
}

impl Eq for SemVersion {}

impl Hash for SemVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.prerelease.hash(state);
        self.build.hash(state);
    }
}

impl PartialOrd for SemVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SemVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        comparator::compare_versions(self, other)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::de::{self, Deserialize, Deserializer, Visitor};
    use serde::ser::{Serialize, Serializer};

    use super::SemVersion;

    impl Serialize for SemVersion {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for SemVersion {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct VersionVisitor;

            impl<'de> Visitor<'de> for VersionVisitor {
                type Value = SemVersion;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("a semantic version as a string")
                }

                fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    SemVersion::parse(v).map_err(de::Error::custom)
                }
            }

            deserializer.deserialize_str(VersionVisitor)
        }
    }
}
