//! Talking to the component registry.
//!
//! A lookup is one HTTP round trip returning a [`ComponentDescriptor`];
//! everything after the fetch is pure so the boundary validation can be
//! exercised without a registry on the other end.

mod kind;
pub use kind::ComponentKind;

mod component;
pub use component::ComponentDescriptor;
pub use component::VersionEntry;

pub mod version;
pub use version::ComponentVersion;
pub use version::VersionConstraint;

/// Fetches a component descriptor from the registry.
///
/// `action` is forwarded to the registry as a query parameter, a hint about
/// what the caller intends to do with the result.
///
/// Any transport failure, non-200 status, registry-reported error or
/// unsupported component type is terminal for this lookup; retrying is the
/// caller's decision.
pub async fn lookup(config: &crate::GantryRsConfig, client: &reqwest::Client, id: &str, action: Option<&str>) -> crate::Result<ComponentDescriptor> {
	let mut url = format!("{}{}", config.registry_url(), id);
	if let Some(action) = action {
		url.push_str("?action=");
		url.push_str(action);
	}

	log::debug!("Looking up component {} at {}", id, url);
	let response = client.get(&url).send().await?;

	if response.status() != reqwest::StatusCode::OK {
		return Err(crate::Error::RegistryStatus {
			id: id.to_string(),
			url,
			status: response.status().as_u16(),
		})
	}

	let body = response.text().await?;
	ComponentDescriptor::from_json(id, &body)
}
