use serde::Deserialize;
use thiserror::Error;

/// Text typed into the credential input of the watch page.
#[derive(derive_more::From, derive_more::Into, derive_more::Deref, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl From<&str> for Credential {
	fn from(credential: &str) -> Self {
		Self(credential.to_owned())
	}
}

impl Credential {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Debug for Credential {
	fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		formatter.write_str("Credential(***)")
	}
}

/// Gate in front of the edit and delete actions.
///
/// NOTE: This is a placeholder, a plain comparison against one configured value. It is not access
/// control, the backend decides whether a mutation is allowed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CredentialGate {
	expected: Credential,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Wrong password")]
pub struct CredentialMismatch;

impl CredentialGate {
	pub fn new(expected: Credential) -> Self {
		Self { expected }
	}

	pub fn check(&self, credential: &Credential) -> Result<(), CredentialMismatch> {
		if credential == &self.expected {
			Ok(())
		} else {
			Err(CredentialMismatch)
		}
	}
}

impl Default for CredentialGate {
	fn default() -> Self {
		Self::new(Credential::from(DEFAULT_CREDENTIAL))
	}
}

pub const DEFAULT_CREDENTIAL: &str = "dracarys";
