//! Descriptor types as published by the registry.

use serde::*;

use super::ComponentKind;

/// One published release of a component.
///
/// `dist` is opaque to us; its presence is what marks the release as
/// installable, its contents are for whatever performs the download.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionEntry {
	pub version: String,
	#[serde(default)]
	pub platforms: Vec<String>,
	#[serde(default)]
	pub dist: Option<serde_json::Value>,
	/// Relative path of a widget inside its source tree.
	#[serde(default)]
	pub path: String,
	/// Source tree reference this release was published from.
	#[serde(default)]
	pub tree: String,
}

impl VersionEntry {
	pub fn is_installable(&self) -> bool {
		self.dist.is_some()
	}

	pub fn supports_platform(&self, platform: &str) -> bool {
		self.platforms.iter().any(|p| p == platform)
	}
}

/// A component as looked up from the registry.
///
/// Constructed once per lookup and read-only from then on; everything the
/// resolver derives from it lives in the resolver's own types.
#[derive(Debug, Clone)]
pub struct ComponentDescriptor {
	pub id: String,
	pub kind: ComponentKind,
	pub platforms: Vec<String>,
	pub versions: Vec<VersionEntry>,
	pub repo: String,
}

/* The wire shape. `type` is decoded as a raw string so an unknown kind
 * surfaces as an UnsupportedKind error instead of a decode failure. */
#[derive(Deserialize)]
struct RawDescriptor {
	#[serde(default)]
	id: Option<String>,
	#[serde(rename = "type", default)]
	kind: String,
	#[serde(default)]
	platforms: Vec<String>,
	#[serde(default)]
	versions: Vec<VersionEntry>,
	#[serde(default)]
	repo: String,
	#[serde(default)]
	error: Option<String>,
}

impl ComponentDescriptor {
	/// Decodes and validates a registry response body.
	///
	/// `id` is the component id the caller asked for; it prefixes error
	/// messages and stands in when the body omits its own id.
	pub fn from_json(id: &str, body: &str) -> crate::Result<Self> {
		let raw: RawDescriptor = serde_json::from_str(body)?;

		if let Some(message) = raw.error {
			return Err(crate::Error::RegistryReported { id: id.to_string(), message })
		}

		let kind = raw.kind.parse::<ComponentKind>().map_err(|_| crate::Error::UnsupportedKind {
			id: id.to_string(),
			kind: raw.kind.clone(),
		})?;

		Ok(ComponentDescriptor {
			id: raw.id.unwrap_or_else(|| id.to_string()),
			kind,
			platforms: raw.platforms,
			versions: raw.versions,
			repo: raw.repo,
		})
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn registry_error_field_is_surfaced() {
		let err = ComponentDescriptor::from_json("gauge", r#"{"error": "not in registry"}"#).unwrap_err();
		match err {
			crate::Error::RegistryReported { id, message } => {
				assert_eq!(id, "gauge");
				assert_eq!(message, "not in registry");
			},
			e => panic!("unexpected error {:?}", e),
		}
	}

	#[test]
	fn unknown_kind_is_rejected() {
		let err = ComponentDescriptor::from_json("gauge", r#"{"id": "gauge", "type": "theme"}"#).unwrap_err();
		match err {
			crate::Error::UnsupportedKind { kind, .. } => assert_eq!(kind, "theme"),
			e => panic!("unexpected error {:?}", e),
		}
	}

	#[test]
	fn optional_fields_default() {
		let cmp = ComponentDescriptor::from_json("gauge", r#"{
			"id": "gauge",
			"type": "module",
			"versions": [{"version": "1.0.0"}]
		}"#).unwrap();
		assert_eq!(cmp.kind, ComponentKind::Module);
		assert!(cmp.platforms.is_empty());
		assert!(!cmp.versions[0].is_installable());
		assert_eq!(cmp.versions[0].tree, "");
	}
}
