//! Library error type.

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	#[error("reqwest error: {0}")]
	Reqwest(#[from] reqwest::Error),
	#[error("IO error: {0}")]
	IO(#[from] std::io::Error),
	#[error("JSON error: {0}")]
	SerdeJSON(#[from] serde_json::Error),
	#[error("{id} error contacting registry: {url} (status {status})")]
	RegistryStatus { id: String, url: String, status: u16 },
	#[error("{id} {message}")]
	RegistryReported { id: String, message: String },
	#[error("{id} unsupported type: {kind}")]
	UnsupportedKind { id: String, kind: String },
}
