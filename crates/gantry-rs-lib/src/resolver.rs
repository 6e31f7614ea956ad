//! Picks which distributions of a component to install.
//!
//! # Usage
//! 1. [`registry::lookup`](crate::registry::lookup) a [`ComponentDescriptor`].
//! 1. Build a [`ResolutionRequest`] from the caller's platform/version/global choices.
//! 1. [`resolve_distributions`] to get a [`Resolution`].
//! 1. Hand [`Resolution::distributions`] to whatever downloads and unpacks,
//! report [`Resolution::diagnostics`] to the user.
//!
//! Selection never fails outright: a platform nothing can satisfy produces a
//! [`Diagnostic`] and resolution moves on to the remaining platforms.

use std::path::PathBuf;

use crate::GantryRsConfig;
use crate::registry::ComponentDescriptor;
use crate::registry::ComponentKind;
use crate::registry::ComponentVersion;
use crate::registry::VersionConstraint;
use crate::registry::VersionEntry;

mod platforms;
pub use platforms::PlatformWorklist;
pub use platforms::BASELINE_PLATFORM;

/// Source marker for module distributions, resolved by the installer.
pub const MODULES_SOURCE: &str = "modules";

/// What the caller asked for: an explicit comma-separated platform list (or
/// none), a version constraint (or none) and the install scope for modules.
#[derive(Debug, Default, Clone)]
pub struct ResolutionRequest {
	pub platform: Option<String>,
	pub version: Option<String>,
	pub global: bool,
}

/// A selected version bound to one platform, with the paths the installer
/// needs: where the artifact content lives and where it should end up.
#[derive(Debug)]
pub struct ResolvedDistribution<'c> {
	pub entry: &'c VersionEntry,
	pub platform: String,
	pub kind: ComponentKind,
	pub source_path: PathBuf,
	pub target_path: PathBuf,
}

impl ResolvedDistribution<'_> {
	pub fn version(&self) -> &str {
		&self.entry.version
	}
}

/// Non-fatal, per-platform resolution failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
	/// A constraint was requested and nothing satisfied it for this platform.
	NotFound { id: String, requested: Option<String>, platform: String },
	/// No version declares an installable distribution for this platform.
	NoDistributable { id: String, requested: Option<String>, platform: String },
}

impl Diagnostic {
	pub fn platform(&self) -> &str {
		match self {
			Diagnostic::NotFound { platform, .. } => platform,
			Diagnostic::NoDistributable { platform, .. } => platform,
		}
	}
}

fn prefix(id: &str, requested: Option<&str>, platform: &str) -> String {
	match requested {
		Some(version) => format!("{}@{} [{}]", id, version, platform),
		None => format!("{} [{}]", id, platform),
	}
}

impl std::fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Diagnostic::NotFound { id, requested, platform } => {
				write!(f, "{} not found", prefix(id, requested.as_deref(), platform))
			},
			Diagnostic::NoDistributable { id, requested, platform } => {
				write!(f, "{} no distributable available", prefix(id, requested.as_deref(), platform))
			},
		}
	}
}

/// The outcome of one resolution call.
#[derive(Debug, Default)]
pub struct Resolution<'c> {
	pub distributions: Vec<ResolvedDistribution<'c>>,
	pub diagnostics: Vec<Diagnostic>,
}

/* A version entry with its normalized form, kept beside the descriptor
 * instead of written into it. */
struct Candidate<'c> {
	entry: &'c VersionEntry,
	version: ComponentVersion,
}

/// Resolves which distributions of `component` should be installed.
///
/// Walks the platform worklist, picking for each platform the most preferred
/// installable version that supports it and satisfies the requested
/// constraint. A selected version takes every platform it covers off the
/// worklist with it. Widgets yield at most one distribution; modules at most
/// one per requested platform.
pub fn resolve_distributions<'c>(config: &GantryRsConfig, component: &'c ComponentDescriptor, request: &ResolutionRequest) -> Resolution<'c> {
	let constraint = request.version.as_deref().map(VersionConstraint::parse);

	let mut worklist = PlatformWorklist::resolve(
		request.platform.as_deref(),
		config.target_platforms(),
		&component.platforms,
	);

	/* Ascending, so the most preferred candidate is retrievable from the end. */
	let mut candidates: Vec<Candidate> = component.versions.iter()
		.map(|entry| Candidate { entry, version: ComponentVersion::new(&entry.version) })
		.collect();
	candidates.sort_by(|a, b| a.version.cmp(&b.version));

	let mut resolution = Resolution::default();

	while let Some(platform) = worklist.pop() {
		let matches = candidates.iter()
			.filter(|c| c.entry.is_installable() && c.entry.supports_platform(&platform));

		let selected = match &constraint {
			None => matches.last(),
			Some(constraint) => matches.rev().find(|c| c.version.satisfies(constraint)),
		};

		let candidate = match selected {
			Some(candidate) => candidate,
			None if constraint.is_some() => {
				/* Don't complain about the baseline platform we added ourselves. */
				if !worklist.is_synthetic_baseline(&platform) {
					resolution.diagnostics.push(Diagnostic::NotFound {
						id: component.id.clone(),
						requested: request.version.clone(),
						platform,
					});
				}
				continue;
			},
			None => {
				resolution.diagnostics.push(Diagnostic::NoDistributable {
					id: component.id.clone(),
					requested: request.version.clone(),
					platform,
				});
				continue;
			},
		};

		let (source_path, target_path) = install_paths(config, component, candidate.entry, request.global);

		worklist.discard_covered(&candidate.entry.platforms);

		resolution.distributions.push(ResolvedDistribution {
			entry: candidate.entry,
			platform,
			kind: component.kind,
			source_path,
			target_path,
		});

		/* Widgets are single-shot: the first selection ends the walk. */
		if component.kind == ComponentKind::Widget {
			break;
		}
	}

	resolution
}

fn install_paths(config: &GantryRsConfig, component: &ComponentDescriptor, entry: &VersionEntry, global: bool) -> (PathBuf, PathBuf) {
	match component.kind {
		ComponentKind::Widget => {
			let tree = PathBuf::from(format!("{}-{}", component.repo, entry.tree));
			let source = if entry.path.is_empty() {
				tree
			} else {
				tree.join(&entry.path)
			};
			(source, config.widgets_dir().join(&component.id))
		},
		ComponentKind::Module => {
			let target = if global {
				config.global_modules_dir()
			} else {
				config.modules_dir()
			};
			(PathBuf::from(MODULES_SOURCE), target.clone())
		},
	}
}
