//! Various helper functions for testing
//!
//! Fixtures panic on malformed input so broken test data fails loudly at the
//! point of construction rather than inside the code under test.

use gantry_rs::ComponentDescriptor;
use gantry_rs::GantryRsConfig;

/// Decodes a descriptor fixture the same way a registry lookup would.
pub fn descriptor_from_json(id: &str, body: &str) -> ComponentDescriptor {
	ComponentDescriptor::from_json(id, body).expect("fixture descriptor failed boundary validation")
}

/// A config whose install roots live in a real temporary directory.
///
/// Keep the returned [`tempfile::TempDir`] alive for as long as the config
/// is in use; dropping it deletes the directories.
pub fn temp_config() -> (tempfile::TempDir, GantryRsConfig) {
	let root = tempfile::tempdir().expect("failed to create temp dir");

	let widgets = root.path().join("app").join("widgets");
	let modules = root.path().join("modules");
	let global_modules = root.path().join("global-modules");
	std::fs::create_dir_all(&widgets).expect("failed to create widgets dir");
	std::fs::create_dir_all(&modules).expect("failed to create modules dir");
	std::fs::create_dir_all(&global_modules).expect("failed to create global modules dir");

	let mut config = GantryRsConfig::default();
	assert!(config.set_widgets_dir(widgets));
	assert!(config.set_modules_dir(modules));
	assert!(config.set_global_modules_dir(global_modules));

	(root, config)
}
