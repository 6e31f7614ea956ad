use std::collections::VecDeque;

/// Platform every resolution must cover, requested or not.
pub const BASELINE_PLATFORM: &str = "commonjs";

/// The platforms still waiting for a distribution during one resolution.
///
/// Built from the first non-empty source in the precedence chain: the
/// request's explicit comma-separated list (order preserved), the
/// configured default targets, the platforms the component declares.
#[derive(Debug)]
pub struct PlatformWorklist {
	platforms: VecDeque<String>,
	synthetic_baseline: bool,
}

impl PlatformWorklist {
	pub fn resolve(requested: Option<&str>, configured: &[String], declared: &[String]) -> Self {
		let mut platforms: VecDeque<String> = if let Some(requested) = requested {
			requested.split(',').map(str::to_string).collect()
		} else if !configured.is_empty() {
			configured.iter().cloned().collect()
		} else {
			declared.iter().cloned().collect()
		};

		let mut synthetic_baseline = false;
		if !platforms.iter().any(|p| p == BASELINE_PLATFORM) {
			synthetic_baseline = true;
			platforms.push_front(BASELINE_PLATFORM.to_string());
		}

		Self {
			platforms,
			synthetic_baseline,
		}
	}

	pub fn pop(&mut self) -> Option<String> {
		self.platforms.pop_front()
	}

	/// Drops every outstanding platform that `covered` also satisfies.
	pub fn discard_covered(&mut self, covered: &[String]) {
		self.platforms.retain(|p| !covered.contains(p));
	}

	/// True for the baseline platform when it was added by us rather than
	/// asked for. Suppresses the not-found diagnostic for that platform.
	pub fn is_synthetic_baseline(&self, platform: &str) -> bool {
		self.synthetic_baseline && platform == BASELINE_PLATFORM
	}

	pub fn is_empty(&self) -> bool {
		self.platforms.is_empty()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn names(worklist: &PlatformWorklist) -> Vec<&str> {
		worklist.platforms.iter().map(String::as_str).collect()
	}

	#[test]
	fn explicit_list_preserves_order() {
		let worklist = PlatformWorklist::resolve(Some("ios,android,commonjs"), &["windows".to_string()], &[]);
		assert_eq!(names(&worklist), ["ios", "android", "commonjs"]);
	}

	#[test]
	fn configured_targets_beat_declared_platforms() {
		let configured = vec!["commonjs".to_string(), "ios".to_string()];
		let declared = vec!["android".to_string()];
		let worklist = PlatformWorklist::resolve(None, &configured, &declared);
		assert_eq!(names(&worklist), ["commonjs", "ios"]);
	}

	#[test]
	fn declared_platforms_are_the_last_resort() {
		let declared = vec!["commonjs".to_string(), "android".to_string()];
		let worklist = PlatformWorklist::resolve(None, &[], &declared);
		assert_eq!(names(&worklist), ["commonjs", "android"]);
	}

	#[test]
	fn baseline_is_prepended_when_missing() {
		let worklist = PlatformWorklist::resolve(Some("android"), &[], &[]);
		assert_eq!(names(&worklist), ["commonjs", "android"]);
		assert!(worklist.is_synthetic_baseline("commonjs"));
	}

	#[test]
	fn baseline_is_always_present() {
		let worklist = PlatformWorklist::resolve(None, &[], &[]);
		assert_eq!(names(&worklist), ["commonjs"]);
	}

	#[test]
	fn requested_baseline_is_not_synthetic() {
		let worklist = PlatformWorklist::resolve(Some("commonjs,ios"), &[], &[]);
		assert!(!worklist.is_synthetic_baseline("commonjs"));
	}

	#[test]
	fn discard_covered_removes_satisfied_platforms() {
		let mut worklist = PlatformWorklist::resolve(Some("commonjs,ios,android"), &[], &[]);
		worklist.discard_covered(&["commonjs".to_string(), "android".to_string()]);
		assert_eq!(names(&worklist), ["ios"]);
	}
}
