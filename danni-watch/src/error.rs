use crate::configuration::ConfigurationError;
use crate::credential::CredentialMismatch;
use crate::transport::error::TransportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DanniError {
	#[error("Failed to load configuration: {0}")]
	Configuration(#[from] ConfigurationError),
	#[error("Failed to set up transport: {0}")]
	Transport(#[from] TransportError),
	#[error("{0}")]
	CredentialMismatch(#[from] CredentialMismatch),
	#[error("Failed to delete video: {0}")]
	Delete(String),
	#[error("Failed to initialize logging: {0}")]
	Logging(String),
}
