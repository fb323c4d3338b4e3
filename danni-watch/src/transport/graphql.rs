use crate::credential::Credential;
use crate::transport::VideoTransport;
use crate::transport::error::{IntoTransportResult, TransportError};
use crate::video::VideoId;
use crate::video::model::VideoRecord;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;


pub const VIDEO_QUERY: &str = r"query VIDEO_QUERY($id: ID!) {
  video(where: { id: $id }) {
    id
    originId
    titleVi
    descriptionVi
    originAuthor
    originThumbnailUrl
    originThumbnailUrlSd
    defaultVolume
    startAt
    audio {
      id
      source
    }
    tags {
      text
    }
  }
}";

pub const VIDEO_DELETE: &str = r"mutation VIDEO_DELETE($id: ID!, $password: String!) {
  deleteVideo(id: $id, password: $password) {
    id
  }
}";

/// [`VideoTransport`] talking JSON over HTTP to a GraphQL endpoint.
pub struct GraphQlTransport {
	client: reqwest::Client,
	endpoint: Url,
}

#[derive(Serialize)]
struct GraphQlRequest<'query, Variables> {
	query: &'query str,
	variables: Variables,
}

#[derive(Deserialize)]
struct GraphQlResponse<Data> {
	data: Option<Data>,
	#[serde(default)]
	errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
	message: String,
}

#[derive(Serialize)]
struct VideoVariables<'a> {
	id: &'a VideoId,
}

#[derive(Serialize)]
struct DeleteVariables<'a> {
	id: &'a VideoId,
	password: &'a str,
}

#[derive(Deserialize)]
struct VideoData {
	video: Option<VideoRecord>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteVideoData {
	delete_video: Option<DeletedVideo>,
}

#[derive(Deserialize)]
struct DeletedVideo {
	id: VideoId,
}

impl GraphQlTransport {
	pub fn new(endpoint: Url, request_timeout: Duration) -> Result<Self, TransportError> {
		let client = reqwest::Client::builder().timeout(request_timeout).build()?;
		Ok(Self { client, endpoint })
	}

	async fn execute<Variables, Data>(&self, query: &str, variables: Variables) -> Result<Data, TransportError>
	where
		Variables: Serialize + Send,
		Data: DeserializeOwned,
	{
		let response = self
			.client
			.post(self.endpoint.clone())
			.json(&GraphQlRequest { query, variables })
			.send()
			.await?;
		let status = response.status();
		let body = response.bytes().await?;

		// Some servers answer GraphQL errors with a non-success status, so look at the body first.
		let parsed = serde_json::from_slice::<GraphQlResponse<Data>>(&body);
		match parsed {
			Ok(GraphQlResponse { errors, .. }) if !errors.is_empty() => Err(TransportError::GraphQl(
				errors.into_iter().map(|error| error.message).collect(),
			)),
			_ if !status.is_success() => Err(TransportError::Status(status)),
			Ok(GraphQlResponse { data, .. }) => data.ok_or(TransportError::MissingData),
			Err(error) => Err(error).decode_error("Failed to decode GraphQL response"),
		}
	}
}

#[async_trait]
impl VideoTransport for GraphQlTransport {
	async fn video(&self, id: &VideoId) -> Result<Option<VideoRecord>, TransportError> {
		debug!("Querying video '{}'.", id);
		let VideoData { video } = self.execute(VIDEO_QUERY, VideoVariables { id }).await?;
		Ok(video)
	}

	async fn delete_video(&self, id: &VideoId, credential: &Credential) -> Result<VideoId, TransportError> {
		let variables = DeleteVariables {
			id,
			password: credential.as_str(),
		};
		let DeleteVideoData { delete_video } = self.execute(VIDEO_DELETE, variables).await?;
		let DeletedVideo { id: deleted_id } = delete_video.ok_or(TransportError::MissingData)?;

		info!("Deleted video '{}'.", deleted_id);
		Ok(deleted_id)
	}
}
