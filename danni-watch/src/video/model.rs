use crate::video::VideoId;
use js_int::UInt;
use serde::Deserialize;
use typed_builder::TypedBuilder;

/// A video record as returned by the `video` query. Immutable once fetched.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
	#[builder(setter(into))]
	pub id: VideoId,
	/// YouTube video id of the original upload.
	#[builder(setter(into))]
	pub origin_id: String,
	#[serde(rename = "titleVi")]
	#[builder(setter(into))]
	pub title: String,
	#[serde(rename = "descriptionVi", default)]
	#[builder(default, setter(strip_option, into))]
	pub description: Option<String>,
	#[serde(rename = "originAuthor")]
	#[builder(setter(into))]
	pub author: String,
	#[serde(rename = "originThumbnailUrl", default)]
	#[builder(default, setter(into))]
	pub thumbnail_url: String,
	#[serde(rename = "originThumbnailUrlSd", default)]
	#[builder(default, setter(into))]
	pub thumbnail_url_sd: String,
	/// Volume of the primary player in percent.
	#[builder(default = js_int::uint!(100))]
	pub default_volume: UInt,
	/// Start offset in seconds.
	#[serde(default)]
	#[builder(default)]
	pub start_at: UInt,
	#[serde(default)]
	#[builder(default)]
	pub audio: Vec<AudioSource>,
	#[serde(default)]
	#[builder(default)]
	pub tags: Vec<Tag>,
}

impl VideoRecord {
	/// The alternate audio track. When the API returns several, the most recently added one wins.
	pub fn secondary_audio(&self) -> Option<&AudioSource> {
		self.audio.last()
	}

	pub fn has_secondary_audio(&self) -> bool {
		self.secondary_audio().is_some()
	}

	/// Default volume as a fraction in `0.0..=1.0`.
	pub fn volume(&self) -> f64 {
		let percent = u8::try_from(u64::from(self.default_volume).min(100)).unwrap_or(100);
		f64::from(percent) / 100.0
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AudioSource {
	pub id: String,
	pub source: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Tag {
	pub text: String,
}
