//! Version precedence and comparison utilities

use std::cmp::Ordering;

use crate::error::Result;
use crate::operator::Operator;
use crate::version::SemVersion;

/// Precedence of `a` against `b`.
///
/// Numeric components first, then prerelease identifiers (a release ranks above
/// any of its prereleases), then build metadata, then the raw prerelease text.
pub(crate) fn compare_versions(a: &SemVersion, b: &SemVersion) -> Ordering {
    a.major()
        .cmp(&b.major())
        .then_with(|| a.minor().cmp(&b.minor()))
        .then_with(|| a.patch().cmp(&b.patch()))
        .then_with(|| compare_prerelease(a.prerelease(), b.prerelease()))
        .then_with(|| compare_build(a.build(), b.build()))
        // Identifiers equal up to leading zeros ("01" vs "1") must not compare equal
        .then_with(|| a.prerelease().cmp(b.prerelease()))
}

fn compare_prerelease(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let mut left = a.split('.');
            let mut right = b.split('.');

            loop {
                match (left.next(), right.next()) {
                    (Some(l), Some(r)) => match compare_identifier(l, r) {
                        Ordering::Equal => continue,
                        other => return other,
                    },
                    (None, Some(_)) => return Ordering::Less,
                    (Some(_), None) => return Ordering::Greater,
                    (None, None) => return Ordering::Equal,
                }
            }
        }
    }
}

fn compare_identifier(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, true) => compare_numeric(a, b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}

/// Compare two all-digit identifiers by value, without a size limit
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');

    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_build(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

/// Comparator for comparing version strings
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> Result<bool> {
        Self::evaluate(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> Result<bool> {
        Self::evaluate(version1, Operator::GreaterThanOrEqual, version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> Result<bool> {
        Self::evaluate(version1, Operator::LessThan, version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> Result<bool> {
        Self::evaluate(version1, Operator::LessThanOrEqual, version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &str, version2: &str) -> Result<bool> {
        Self::evaluate(version1, Operator::Equal, version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &str, version2: &str) -> Result<bool> {
        Self::evaluate(version1, Operator::NotEqual, version2)
    }

    /// Compare version1 to version2 using the given operator symbol
    pub fn compare(version1: &str, operator: &str, version2: &str) -> Result<bool> {
        let operator: Operator = operator.parse()?;
        Self::evaluate(version1, operator, version2)
    }

    fn evaluate(version1: &str, operator: Operator, version2: &str) -> Result<bool> {
        let version1 = SemVersion::parse(version1)?;
        let version2 = SemVersion::parse(version2)?;

        Ok(version1.satisfies(operator, &version2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmp(a: &str, b: &str) -> Ordering {
        compare_versions(&SemVersion::parse(a).unwrap(), &SemVersion::parse(b).unwrap())
    }

    #[test]
    fn test_numeric_components() {
        assert_eq!(cmp("1.0.0", "2.0.0"), Ordering::Less);
        assert_eq!(cmp("1.10.0", "1.2.0"), Ordering::Greater);
        assert_eq!(cmp("0.1.1+bu", "0.2.1"), Ordering::Less);
        assert_eq!(cmp("1.0.0", "1.0.1-alpha"), Ordering::Less);
    }

    #[test]
    fn test_loose_forms_compare_equal() {
        assert_eq!(cmp("1.0.0-beta+dev.123", "1-beta+dev.123"), Ordering::Equal);
        assert_eq!(cmp("1.0.0-alpha+dev.123", "1-beta+dev.123"), Ordering::Less);
    }

    #[test]
    fn test_prerelease_below_release() {
        assert_eq!(cmp("1.0.0-alpha", "1.0.0"), Ordering::Less);
        assert_eq!(cmp("1.0.0", "1.0.0-alpha"), Ordering::Greater);
    }

    #[test]
    fn test_prerelease_identifiers() {
        assert_eq!(cmp("0.0.1-13", "0.0.1-b"), Ordering::Less);
        assert_eq!(cmp("0.1.1-gamma.12.87", "0.1.1-gamma.12.88"), Ordering::Less);
        assert_eq!(cmp("0.1.1-gamma.12.87", "0.1.1-gamma.12.87.1"), Ordering::Less);
        assert_eq!(cmp("0.1.1-gamma.12.87.99", "0.1.1-gamma.12.87.X"), Ordering::Less);
        assert_eq!(cmp("0.1.1-gamma.12.87", "0.1.1-gamma.12.87.X"), Ordering::Less);
        assert_eq!(cmp("1.0.0-alpha.1", "1.0.0-alpha.beta"), Ordering::Less);
        assert_eq!(cmp("1.0.0-beta.2", "1.0.0-beta.11"), Ordering::Less);
    }

    #[test]
    fn test_prerelease_identifiers_are_case_sensitive() {
        assert_eq!(cmp("1.0.0-RC", "1.0.0-rc"), Ordering::Less);
        assert_eq!(cmp("1.0.0-Beta", "1.0.0-alpha"), Ordering::Less);
    }

    #[test]
    fn test_huge_numeric_identifiers() {
        assert_eq!(
            cmp("1.0.0-99999999999999999999999", "1.0.0-100000000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn test_leading_zero_identifiers_stay_distinct() {
        assert_eq!(cmp("1.0.0-alpha.01", "1.0.0-alpha.2"), Ordering::Less);
        assert_ne!(cmp("1.0.0-alpha.1", "1.0.0-alpha.01"), Ordering::Equal);
        assert_eq!(cmp("1.0.0-alpha.1+b", "1.0.0-alpha.01+b"), Ordering::Greater);
        assert_eq!(
            cmp("1.0.0-alpha.1", "1.0.0-alpha.01"),
            cmp("1.0.0-alpha.01", "1.0.0-alpha.1").reverse()
        );
    }

    #[test]
    fn test_build_decides_before_leading_zeros() {
        assert_eq!(cmp("1.0.0-alpha.01+b", "1.0.0-alpha.1+a"), Ordering::Greater);
        assert_eq!(cmp("1.0.0-alpha.1+a", "1.0.0-alpha.01+b"), Ordering::Less);
        assert_eq!(cmp("1.0.0-alpha.01", "1.0.0-alpha.1+a"), Ordering::Less);
    }

    #[test]
    fn test_build_tiebreak() {
        assert_eq!(cmp("0.0.1", "0.0.1+build.12"), Ordering::Less);
        assert_eq!(cmp("0.0.1+build.13", "0.0.1+build.12.2"), Ordering::Greater);
        assert_eq!(cmp("0.0.1+uiui", "0.0.1+12"), Ordering::Greater);
        assert_eq!(cmp("0.0.1+bu", "0.0.1"), Ordering::Greater);
    }

    #[test]
    fn test_build_only_breaks_ties() {
        assert_eq!(cmp("1.0.0-alpha+zzz", "1.0.0-beta"), Ordering::Less);
        assert_eq!(cmp("1.0.0+zzz", "1.0.1"), Ordering::Less);
    }

    #[test]
    fn test_greater_than() {
        assert!(Comparator::greater_than("1.25.0", "1.24.0").unwrap());
        assert!(!Comparator::greater_than("1.25.0", "1.25.0").unwrap());
        assert!(!Comparator::greater_than("1.25.0", "1.26.0").unwrap());
    }

    #[test]
    fn test_greater_than_or_equal_to() {
        assert!(Comparator::greater_than_or_equal_to("1.25.0", "1.24.0").unwrap());
        assert!(Comparator::greater_than_or_equal_to("1.25.0", "1.25.0").unwrap());
        assert!(!Comparator::greater_than_or_equal_to("1.25.0", "1.26.0").unwrap());
    }

    #[test]
    fn test_less_than() {
        assert!(!Comparator::less_than("1.25.0", "1.24.0").unwrap());
        assert!(!Comparator::less_than("1.25.0", "1.25.0").unwrap());
        assert!(Comparator::less_than("1.25.0", "1.26.0").unwrap());
        assert!(Comparator::less_than("1.0.0", "1.2-dev").unwrap());
    }

    #[test]
    fn test_less_than_or_equal_to() {
        assert!(!Comparator::less_than_or_equal_to("1.25.0", "1.24.0").unwrap());
        assert!(Comparator::less_than_or_equal_to("1.25.0", "1.25.0").unwrap());
        assert!(Comparator::less_than_or_equal_to("1.25.0", "1.26.0").unwrap());
    }

    #[test]
    fn test_equal_to() {
        assert!(!Comparator::equal_to("1.25.0", "1.24.0").unwrap());
        assert!(Comparator::equal_to("1.25.0", "1.25.0").unwrap());
        assert!(Comparator::equal_to("1.25", "1.25.0").unwrap());
        assert!(!Comparator::equal_to("1.25.0", "1.25.0+build").unwrap());
    }

    #[test]
    fn test_not_equal_to() {
        assert!(Comparator::not_equal_to("1.25.0", "1.24.0").unwrap());
        assert!(!Comparator::not_equal_to("1.25.0", "1.25.0").unwrap());
        assert!(Comparator::not_equal_to("1.25.0", "1.26.0").unwrap());
    }

    #[test]
    fn test_compare() {
        // Greater than
        assert!(Comparator::compare("1.25.0", ">", "1.24.0").unwrap());
        assert!(!Comparator::compare("1.25.0", ">", "1.25.0").unwrap());

        // Less than or equal
        assert!(Comparator::compare("1.25.0", "<=", "1.25.0").unwrap());
        assert!(!Comparator::compare("1.25.0", "<=", "1.24.0").unwrap());

        // Equal with = alias
        assert!(Comparator::compare("1.25.0", "=", "1.25.0").unwrap());
        assert!(!Comparator::compare("1.25.0", "=", "1.26.0").unwrap());

        // Not equal with <> alias
        assert!(Comparator::compare("1.25.0", "<>", "1.24.0").unwrap());
        assert!(!Comparator::compare("1.25.0", "<>", "1.25.0").unwrap());
    }

    #[test]
    fn test_helpers_agree_with_operator_symbols() {
        let pairs = [("1.25.0", "1.24.0"), ("1.25", "1.25.0"), ("1.0.0-rc.1", "1.0.0"), ("1.0.0+b", "1.0.0")];

        for (a, b) in pairs {
            assert_eq!(Comparator::greater_than(a, b), Comparator::compare(a, ">", b));
            assert_eq!(Comparator::less_than_or_equal_to(a, b), Comparator::compare(a, "<=", b));
            assert_eq!(Comparator::not_equal_to(a, b), Comparator::compare(a, "<>", b));
            assert_eq!(Comparator::equal_to(a, b), SemVersion::compare_with_operator(a, b, "="));
        }
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!(Comparator::compare("1.25.0", "=>", "1.24.0").is_err());
        assert!(Comparator::greater_than("dev-foo", "1.0.0").is_err());
    }
}
