use crate::credential::Credential;
use crate::transport::VideoTransport;
use crate::transport::error::TransportError;
use crate::video::VideoId;
use crate::video::model::VideoRecord;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

/// In-memory transport that records the calls it receives.
#[derive(Default)]
pub struct FakeTransport {
	videos: Mutex<HashMap<VideoId, VideoRecord>>,
	failure: Mutex<Option<String>>,
	pub queried: Mutex<Vec<VideoId>>,
	pub deletions: Mutex<Vec<(VideoId, Credential)>>,
}

impl FakeTransport {
	pub fn with_video(video: VideoRecord) -> Self {
		let transport = Self::default();
		transport.videos.lock().insert(video.id.clone(), video);
		transport
	}

	/// Every following call fails with a GraphQL error carrying `message`.
	pub fn fail_with(&self, message: &str) {
		*self.failure.lock() = Some(message.to_string());
	}

	fn failure(&self) -> Result<(), TransportError> {
		match self.failure.lock().as_ref() {
			Some(message) => Err(TransportError::GraphQl(vec![message.clone()])),
			None => Ok(()),
		}
	}
}

#[async_trait]
impl VideoTransport for FakeTransport {
	async fn video(&self, id: &VideoId) -> Result<Option<VideoRecord>, TransportError> {
		self.queried.lock().push(id.clone());
		self.failure()?;
		Ok(self.videos.lock().get(id).cloned())
	}

	async fn delete_video(&self, id: &VideoId, credential: &Credential) -> Result<VideoId, TransportError> {
		self.deletions.lock().push((id.clone(), credential.clone()));
		self.failure()?;
		self.videos
			.lock()
			.remove(id)
			.map(|video| video.id)
			.ok_or_else(|| TransportError::GraphQl(vec![format!("No video found for {id}")]))
	}
}
