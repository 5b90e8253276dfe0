//! Version string parsing

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::error::{Result, SemVersionError};
use crate::version::SemVersion;

lazy_static! {
    // major(.minor(.patch)?)?(-prerelease)?(+build)?, identifiers are dot-separated [0-9A-Za-z-]+ runs
    static ref VERSION_RE: Regex = Regex::new(
        r"^(?P<major>[0-9]+)(?:\.(?P<minor>[0-9]+)(?:\.(?P<patch>[0-9]+))?)?(?:-(?P<pre>[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+(?P<build>[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$"
    ).unwrap();
}

/// Parse a version string, requiring all three numeric components when `strict` is set
pub(crate) fn parse(text: &str, strict: bool) -> Result<SemVersion> {
    let version = text.trim();

    if version.is_empty() {
        log::debug!("Rejecting empty version string");
        return Err(SemVersionError::format(text, "version string is empty"));
    }

    let caps = match VERSION_RE.captures(version) {
        Some(caps) => caps,
        None => {
            log::debug!("Version string \"{}\" does not match the version grammar", version);
            return Err(SemVersionError::format(text, "does not match major[.minor[.patch]][-prerelease][+build]"));
        }
    };

    if strict && (caps.name("minor").is_none() || caps.name("patch").is_none()) {
        log::debug!("Version string \"{}\" omits minor or patch in strict mode", version);
        return Err(SemVersionError::Strictness {
            input: text.to_string(),
        });
    }

    let major = numeric_component(&caps, "major", text)?;
    let minor = numeric_component(&caps, "minor", text)?;
    let patch = numeric_component(&caps, "patch", text)?;
    let prerelease = caps.name("pre").map_or("", |m| m.as_str());
    let build = caps.name("build").map_or("", |m| m.as_str());

    Ok(SemVersion::with_labels(major, minor, patch, prerelease, build))
}

/// Parse a version string, discarding the reason on failure
pub(crate) fn try_parse(text: &str, strict: bool) -> Option<SemVersion> {
    match parse(text, strict) {
        Ok(version) => Some(version),
        Err(err) => {
            log::trace!("try_parse: {}", err);
            None
        }
    }
}

fn numeric_component(caps: &Captures, name: &str, input: &str) -> Result<u64> {
    match caps.name(name) {
        Some(m) => m
            .as_str()
            .parse::<u64>()
            .map_err(|_| SemVersionError::format(input, format!("{} component {} is too large", name, m.as_str()))),
        None => Ok(0),
    }
}

impl FromStr for SemVersion {
    type Err = SemVersionError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s, false)
    }
}

impl TryFrom<&str> for SemVersion {
    type Error = SemVersionError;

    fn try_from(value: &str) -> Result<Self> {
        parse(value, false)
    }
}

impl TryFrom<String> for SemVersion {
    type Error = SemVersionError;

    fn try_from(value: String) -> Result<Self> {
        parse(&value, false)
    }
}
