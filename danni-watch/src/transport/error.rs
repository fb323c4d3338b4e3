use anyhow::Context;

/// Type erased error that works for all kinds of transport implementations
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
	#[error("Connection error: {0}")]
	Connection(anyhow::Error),
	#[error("Timeout: {0}")]
	Timeout(anyhow::Error),
	#[error("Unexpected HTTP status: {0}")]
	Status(reqwest::StatusCode),
	#[error("Decoding response: {0}")]
	Decode(anyhow::Error),
	/// The API answered but reported errors, e.g. a rejected delete.
	#[error("GraphQL error: {}", .0.join(", "))]
	GraphQl(Vec<String>),
	#[error("Response contained no data")]
	MissingData,
}

impl From<reqwest::Error> for TransportError {
	fn from(error: reqwest::Error) -> Self {
		if error.is_timeout() {
			Self::Timeout(error.into())
		} else if let Some(status) = error.status() {
			Self::Status(status)
		} else if error.is_decode() {
			Self::Decode(error.into())
		} else {
			Self::Connection(error.into())
		}
	}
}

pub trait IntoTransportResult<Ok>: Sized {
	fn decode_error(self, context: &'static str) -> Result<Ok, TransportError>;
}

impl<Ok, Error> IntoTransportResult<Ok> for Result<Ok, Error>
where
	Error: std::error::Error + Send + Sync + 'static,
{
	fn decode_error(self, context: &'static str) -> Result<Ok, TransportError> {
		self.context(context).map_err(TransportError::Decode)
	}
}
