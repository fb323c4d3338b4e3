use serde::{Deserialize, Serialize};

pub mod model;

/// Identifier of a video record as used by the GraphQL API and in page URLs.
#[derive(
	derive_more::From,
	derive_more::Into,
	derive_more::Deref,
	derive_more::Display,
	Debug,
	Clone,
	PartialEq,
	Eq,
	Hash,
	Serialize,
	Deserialize,
)]
#[serde(transparent)]
pub struct VideoId(String);

impl From<&str> for VideoId {
	fn from(id: &str) -> Self {
		Self(id.to_owned())
	}
}

impl VideoId {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
