//! Semantic version value type
//!
//! This crate parses version strings (strictly or loosely), orders them by
//! Semantic Versioning precedence with a build metadata tiebreak, and compares
//! them through operator symbols such as `>=` or `<>`.

mod comparator;
mod error;
mod legacy;
mod operator;
mod parser;
mod version;

pub use comparator::Comparator;
pub use error::{Result, SemVersionError};
pub use legacy::LegacyVersion;
pub use operator::Operator;
pub use version::{SemVersion, VersionChange};
