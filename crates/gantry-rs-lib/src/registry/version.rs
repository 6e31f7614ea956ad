use std::sync::OnceLock;

use regex::Regex;
use semver::{Version, VersionReq};

/// Version identifier that always sorts below every other release.
pub const FALLBACK_VERSION: &str = "master";

/// A published version identifier with its normalized semantic form attached.
///
/// Identifiers come in three flavours: semantic versions (possibly missing
/// their patch component), legacy dotted-numeric strings, and opaque tags.
/// The ordering accounts for all three: the fallback tag ranks below
/// everything, two normalized versions compare by semantic-version
/// precedence, and anything else goes through the dotted-numeric comparison.
#[derive(Debug, Clone)]
pub struct ComponentVersion {
	raw: String,
	semver: Option<Version>,
}

impl ComponentVersion {
	pub fn new(raw: &str) -> Self {
		Self {
			raw: raw.to_string(),
			semver: normalize(raw),
		}
	}

	pub fn raw(&self) -> &str {
		&self.raw
	}

	pub fn semver(&self) -> Option<&Version> {
		self.semver.as_ref()
	}

	pub fn is_fallback(&self) -> bool {
		self.raw == FALLBACK_VERSION
	}

	/// Whether this version qualifies under `constraint`.
	///
	/// Normalized versions match through the semantic requirement and never
	/// match an opaque tag; un-normalized ones match only the literal
	/// constraint string.
	pub fn satisfies(&self, constraint: &VersionConstraint) -> bool {
		match (&self.semver, constraint.req()) {
			(Some(version), Some(req)) => req.matches(version),
			(Some(_), None) => false,
			(None, _) => self.raw == constraint.raw(),
		}
	}
}

/// Missing patch components are tolerated ("1.2" reads as "1.2.0").
fn normalize(raw: &str) -> Option<Version> {
	Version::parse(raw)
		.or_else(|_| Version::parse(&format!("{}.0", raw)))
		.ok()
}

impl Ord for ComponentVersion {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		match (self.is_fallback(), other.is_fallback()) {
			(true, true) => return std::cmp::Ordering::Equal,
			(true, false) => return std::cmp::Ordering::Less,
			(false, true) => return std::cmp::Ordering::Greater,
			(false, false) => {},
		}

		if let (Some(a), Some(b)) = (&self.semver, &other.semver) {
			a.cmp(b)
		} else {
			cmp_numeric(&self.raw, &other.raw)
		}
	}
}

impl PartialOrd for ComponentVersion {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl PartialEq for ComponentVersion {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == std::cmp::Ordering::Equal
	}
}

impl Eq for ComponentVersion {}

impl std::fmt::Display for ComponentVersion {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.raw)
	}
}

/* Legacy dotted-numeric comparison. A trailing run of ".0" segments counts
 * for nothing, as does any non-dotted suffix hanging off that run, so it is
 * stripped from both sides first. Components that fail integer parsing are
 * compared lexically to keep the order total. */
fn cmp_numeric(a: &str, b: &str) -> std::cmp::Ordering {
	static TRAILING_ZERO_RUN: OnceLock<Regex> = OnceLock::new();
	let re = TRAILING_ZERO_RUN.get_or_init(|| Regex::new(r"(\.0)+[^.]*$").expect("invalid trailing zero pattern"));

	let a = re.replace(a, "");
	let b = re.replace(b, "");
	let a: Vec<&str> = a.split('.').collect();
	let b: Vec<&str> = b.split('.').collect();

	for (lhs, rhs) in a.iter().zip(b.iter()) {
		let ord = match (lhs.parse::<i64>(), rhs.parse::<i64>()) {
			(Ok(lhs), Ok(rhs)) => lhs.cmp(&rhs),
			_ => lhs.cmp(rhs),
		};
		if ord != std::cmp::Ordering::Equal {
			return ord;
		}
	}

	a.len().cmp(&b.len())
}

/// A requested version constraint: an exact version, a semantic-version
/// range, or an opaque tag.
///
/// Exact versions become `=x.y.z` requirements; [`VersionReq`] would
/// otherwise read a bare version as a caret range.
#[derive(Debug, Clone)]
pub struct VersionConstraint {
	raw: String,
	req: Option<VersionReq>,
}

impl VersionConstraint {
	/// Never fails; anything that is neither a version nor a range is kept
	/// as an opaque tag.
	pub fn parse(raw: &str) -> Self {
		let req = match Version::parse(raw) {
			Ok(exact) => VersionReq::parse(&format!("={}", exact)).ok(),
			Err(_) => VersionReq::parse(raw).ok(),
		};
		Self {
			raw: raw.to_string(),
			req,
		}
	}

	pub fn raw(&self) -> &str {
		&self.raw
	}

	pub fn req(&self) -> Option<&VersionReq> {
		self.req.as_ref()
	}
}

impl std::fmt::Display for VersionConstraint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.raw)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn cmp(a: &str, b: &str) -> std::cmp::Ordering {
		ComponentVersion::new(a).cmp(&ComponentVersion::new(b))
	}

	#[test] fn master_is_below_releases() { assert!(ComponentVersion::new("master") < ComponentVersion::new("0.0.1")) }
	#[test] fn master_is_below_unparsable_tags() { assert!(ComponentVersion::new("master") < ComponentVersion::new("beta")) }
	#[test] fn master_equals_master() { assert!(ComponentVersion::new("master") == ComponentVersion::new("master")) }
	#[test] fn semver_is_not_compared_lexically() { assert!(ComponentVersion::new("1.2.4") < ComponentVersion::new("1.2.10")) }
	#[test] fn missing_patch_is_normalized() { assert!(ComponentVersion::new("1.2").semver().is_some()) }
	#[test] fn prerelease_is_below_release() { assert!(ComponentVersion::new("1.0.0-beta.1") < ComponentVersion::new("1.0.0")) }
	#[test] fn shorter_version_is_lower() { assert_eq!(cmp("2.1", "2.1.3"), std::cmp::Ordering::Less) }
	#[test] fn numeric_fallback_is_not_lexical() { assert_eq!(cmp("1.2.3.4", "1.2.3.10"), std::cmp::Ordering::Less) }
	#[test] fn trailing_zeros_count_for_nothing() { assert_eq!(cmp("1.2.0.0", "1.2"), std::cmp::Ordering::Equal) }
	#[test] fn shorter_wins_ties_after_stripping() { assert_eq!(cmp("1.2", "1.2.5.1"), std::cmp::Ordering::Less) }
	#[test] fn unparsable_components_compare_lexically() { assert_eq!(cmp("1.2.beta", "1.2.alpha"), std::cmp::Ordering::Greater) }

	#[test]
	fn exact_constraint_is_exact() {
		let constraint = VersionConstraint::parse("1.0.0");
		assert!(ComponentVersion::new("1.0.0").satisfies(&constraint));
		assert!(!ComponentVersion::new("1.5.0").satisfies(&constraint));
	}

	#[test]
	fn caret_range_matches_compatible_releases() {
		let constraint = VersionConstraint::parse("^1.0.0");
		assert!(ComponentVersion::new("1.5.0").satisfies(&constraint));
		assert!(!ComponentVersion::new("0.9.0").satisfies(&constraint));
		assert!(!ComponentVersion::new("2.0.0").satisfies(&constraint));
	}

	#[test]
	fn tag_constraint_only_matches_raw_identifiers() {
		let constraint = VersionConstraint::parse("release-5");
		assert!(ComponentVersion::new("release-5").satisfies(&constraint));
		assert!(!ComponentVersion::new("1.0.0").satisfies(&constraint));
	}

	#[test]
	fn range_never_matches_unparsable_identifiers() {
		let constraint = VersionConstraint::parse("^1.0.0");
		assert!(!ComponentVersion::new("master").satisfies(&constraint));
	}
}
