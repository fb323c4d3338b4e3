use crate::credential::Credential;
use crate::form_factor::FormFactor;
use crate::watch::view::Site;
use serde::Deserialize;
use std::fs::read_to_string;
use std::path::Path;
use thiserror::Error;
use url::Url;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Configuration {
	pub graphql_endpoint: Url,
	pub log_filters: String,
	#[serde(with = "humantime_serde")]
	pub request_timeout: std::time::Duration,
	/// Placeholder gate for edit and delete, see [`crate::credential::CredentialGate`].
	pub edit_credential: Credential,
	#[serde(default)]
	pub form_factor: FormFactor,
	pub site: Site,
}

impl Configuration {
	pub fn from_file(path: impl AsRef<Path>) -> Result<Configuration, ConfigurationError> {
		let text = read_to_string(path)?;

		Ok(Configuration::try_from(text.as_str())?)
	}
}

impl TryFrom<&str> for Configuration {
	type Error = toml::de::Error;

	fn try_from(text: &str) -> Result<Self, Self::Error> {
		toml::from_str(text)
	}
}

#[derive(Error, Debug)]
pub enum ConfigurationError {
	#[error("Failed to deserialize with error: {0}")]
	DeserializationError(#[from] toml::de::Error),
	#[error("IO operation failed: {0}")]
	IoError(#[from] std::io::Error),
}
