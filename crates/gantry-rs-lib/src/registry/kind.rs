use serde::*;

/// The type of a component.
///
/// The registry is allowed to grow new types; anything unrecognized is
/// rejected when the descriptor crosses the wire boundary rather than here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
	/// A view component living inside the project source tree.
	Widget,
	/// A native extension installed into a modules directory.
	Module,
}

impl std::str::FromStr for ComponentKind {
	type Err = ();
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"widget" => Ok(ComponentKind::Widget),
			"module" => Ok(ComponentKind::Module),
			_ => Err(()),
		}
	}
}

impl std::fmt::Display for ComponentKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ComponentKind::Widget => write!(f, "widget"),
			ComponentKind::Module => write!(f, "module"),
		}
	}
}
