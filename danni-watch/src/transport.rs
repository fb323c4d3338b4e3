use crate::credential::Credential;
use crate::transport::error::TransportError;
use crate::video::VideoId;
use crate::video::model::VideoRecord;
use async_trait::async_trait;

pub mod error;
pub mod graphql;

#[cfg(test)]
pub mod fake;

/// Remote data store holding the video records.
#[async_trait]
pub trait VideoTransport: Send + Sync {
	/// `Ok(None)` if no record exists for `id`.
	async fn video(&self, id: &VideoId) -> Result<Option<VideoRecord>, TransportError>;
	/// Returns the id of the deleted record.
	async fn delete_video(&self, id: &VideoId, credential: &Credential) -> Result<VideoId, TransportError>;
}
