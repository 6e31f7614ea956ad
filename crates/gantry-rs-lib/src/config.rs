use std::path::PathBuf;

use serde::{Serialize, Deserialize};

/// Where to look components up and where their artifacts should land.
///
/// `target_platforms` is the configured default platform set, usually taken
/// from a project manifest; an empty list means "whatever the component
/// declares".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GantryRsConfig {
	registry_url: String,
	target_platforms: Vec<String>,
	widgets_dir: PathBuf,
	modules_dir: PathBuf,
	global_modules_dir: PathBuf,
}

impl Default for GantryRsConfig {
	fn default() -> Self {
		Self {
			registry_url: "https://registry.gantry.dev/".to_string(),
			target_platforms: Vec::new(),
			widgets_dir: PathBuf::from("app").join("widgets"),
			modules_dir: PathBuf::from("modules"),
			global_modules_dir: {
				#[cfg(target_os = "windows")]
				let path = PathBuf::from(std::env::var("APPDATA").expect("APPDATA missing."));

				#[cfg(not(target_os = "windows"))]
				let path = if let Ok(e) = std::env::var("XDG_DATA_HOME") {
					PathBuf::from(e)
				} else {
					PathBuf::from(std::env::var("HOME").expect("HOME environment variable not set.")).join(".local/share")
				};

				path.join("gantry-rs").join("modules")
			},
		}
	}
}

impl GantryRsConfig {
	fn config_file_path() -> PathBuf {
		#[cfg(target_os = "windows")]
		let path = PathBuf::from(std::env::var("APPDATA").expect("APPDATA missing."));

		#[cfg(not(target_os = "windows"))]
		let path = if let Ok(e) = std::env::var("XDG_CONFIG_HOME") {
			PathBuf::from(e)
		} else {
			PathBuf::from(std::env::var("HOME").expect("HOME environment variable not set.")).join(".config")
		};

		path.join("gantry-rs").join("config.json")
	}

	pub fn load_from_disk() -> crate::Result<Self> {
		let data = std::fs::read_to_string(Self::config_file_path())?;
		Ok(serde_json::from_str(&data)?)
	}

	pub fn save_to_disk(&self) -> crate::Result<()> {
		let path = Self::config_file_path();
		std::fs::create_dir_all(path.with_file_name(""))?;
		std::fs::write(path, serde_json::to_string_pretty(self)?)?;
		Ok(())
	}

	pub fn registry_url(&self) -> &str {
		&self.registry_url
	}
	pub fn set_registry_url(&mut self, registry_url: String) {
		self.registry_url = registry_url;
	}

	pub fn target_platforms(&self) -> &[String] {
		&self.target_platforms
	}
	pub fn set_target_platforms(&mut self, target_platforms: Vec<String>) {
		self.target_platforms = target_platforms;
	}

	pub fn widgets_dir(&self) -> &PathBuf {
		&self.widgets_dir
	}
	/// returns if the directory is valid or not.
	pub fn set_widgets_dir(&mut self, widgets_dir: PathBuf) -> bool {
		if widgets_dir.is_dir() {
			self.widgets_dir = widgets_dir;
			true
		} else {
			false
		}
	}

	pub fn modules_dir(&self) -> &PathBuf {
		&self.modules_dir
	}
	/// returns if the directory is valid or not.
	pub fn set_modules_dir(&mut self, modules_dir: PathBuf) -> bool {
		if modules_dir.is_dir() {
			self.modules_dir = modules_dir;
			true
		} else {
			false
		}
	}

	pub fn global_modules_dir(&self) -> &PathBuf {
		&self.global_modules_dir
	}
	/// returns if the directory is valid or not.
	pub fn set_global_modules_dir(&mut self, global_modules_dir: PathBuf) -> bool {
		if global_modules_dir.is_dir() {
			self.global_modules_dir = global_modules_dir;
			true
		} else {
			false
		}
	}
}
