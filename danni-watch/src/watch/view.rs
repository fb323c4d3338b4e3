use crate::form_factor::FormFactor;
use crate::playback::state::PlaybackState;
use crate::player::PlayerProps;
use crate::video::VideoId;
use crate::video::model::VideoRecord;
use serde::{Deserialize, Serialize};
use url::Url;

const TITLE_PREFIX: &str = "Danni";
const OPEN_GRAPH_LOCALE: &str = "vi_VN";
const YOUTUBE_EMBED_URL: &str = "https://www.youtube.com/embed/";
const FACEBOOK_SHARER_URL: &str = "https://www.facebook.com/sharer/sharer.php";

/// Where the site is reachable, used for share links and Open Graph metadata.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Site {
	pub url: Url,
	pub facebook_app_id: String,
}

impl Site {
	pub fn watch_url(&self, video_id: &VideoId) -> Url {
		let mut url = self.url.clone();
		url.set_path("/watch");
		url.query_pairs_mut().clear().append_pair("id", video_id.as_str());
		url
	}
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum WatchView {
	Loading,
	Failed { message: String },
	NotFound { video_id: VideoId },
	Ready(Box<VideoView>),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VideoView {
	pub head: HeadMetadata,
	pub primary_player: PlayerProps,
	/// Only present if the record has an alternate audio track.
	pub secondary_player: Option<PlayerProps>,
	pub share_url: Url,
	pub title: String,
	pub author_label: String,
	pub description: Option<String>,
	pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeadMetadata {
	pub document_title: String,
	pub url: Url,
	pub title: String,
	pub image: String,
	pub locale: &'static str,
	pub description: Option<String>,
	pub facebook_app_id: String,
}

impl HeadMetadata {
	/// `(property, content)` pairs of the `<meta>` tags.
	pub fn meta_tags(&self) -> Vec<(&'static str, String)> {
		let mut tags = vec![
			("og:url", self.url.to_string()),
			("og:title", self.title.clone()),
			("og:image", self.image.clone()),
			("og:locale", self.locale.to_string()),
		];
		if let Some(description) = &self.description {
			tags.push(("og:description", description.clone()));
		}
		tags.push(("fb:app_id", self.facebook_app_id.clone()));
		tags
	}
}

impl std::fmt::Display for WatchView {
	fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			WatchView::Loading => writeln!(formatter, "Loading..."),
			WatchView::Failed { message } => writeln!(formatter, "Shoot! {message}"),
			WatchView::NotFound { video_id } => writeln!(formatter, "No Video Found for {video_id}"),
			WatchView::Ready(video) => {
				writeln!(formatter, "{}", video.head.document_title)?;
				writeln!(formatter)?;
				writeln!(formatter, "{}", video.title)?;
				writeln!(formatter, "{}", video.author_label)?;
				if let Some(description) = &video.description {
					writeln!(formatter, "{description}")?;
				}
				if !video.tags.is_empty() {
					writeln!(formatter, "#{}", video.tags.join(" #"))?;
				}
				writeln!(formatter)?;
				write_player(formatter, "Video", &video.primary_player)?;
				if let Some(secondary_player) = &video.secondary_player {
					write_player(formatter, "Audio", secondary_player)?;
				}
				writeln!(formatter, "Share: {}", video.share_url)
			}
		}
	}
}

fn write_player(formatter: &mut std::fmt::Formatter<'_>, label: &str, player: &PlayerProps) -> std::fmt::Result {
	writeln!(
		formatter,
		"{label}: {} (volume {:.0}%{})",
		player.source,
		player.volume * 100.0,
		if player.muted { ", muted" } else { "" }
	)
}

pub fn render_ready(
	record: &VideoRecord,
	playback: &PlaybackState,
	form_factor: FormFactor,
	site: &Site,
) -> VideoView {
	let watch_url = site.watch_url(&record.id);
	let description = record.description.clone().filter(|description| !description.is_empty());

	VideoView {
		head: HeadMetadata {
			document_title: format!("{TITLE_PREFIX} | {}", record.title),
			url: watch_url.clone(),
			title: record.title.clone(),
			image: record.thumbnail_url_sd.clone(),
			locale: OPEN_GRAPH_LOCALE,
			description: description.clone(),
			facebook_app_id: site.facebook_app_id.clone(),
		},
		primary_player: primary_player_props(record, playback, form_factor),
		secondary_player: secondary_player_props(record, playback),
		share_url: facebook_share_url(&watch_url),
		title: record.title.clone(),
		author_label: format!("Tác giả: {}", record.author),
		description,
		tags: record.tags.iter().map(|tag| tag.text.clone()).collect(),
	}
}

/// The primary is muted on touch devices when the secondary track is supposed to be heard instead.
pub fn primary_player_props(record: &VideoRecord, playback: &PlaybackState, form_factor: FormFactor) -> PlayerProps {
	PlayerProps {
		source: format!("{YOUTUBE_EMBED_URL}{}", record.origin_id),
		volume: record.volume(),
		muted: form_factor.is_touch() && record.has_secondary_audio(),
		playing: playback.is_playing,
		start_at: record.start_at.into(),
	}
}

pub fn secondary_player_props(record: &VideoRecord, playback: &PlaybackState) -> Option<PlayerProps> {
	let audio = record.secondary_audio()?;
	Some(PlayerProps {
		source: audio.source.clone(),
		volume: 1.0,
		muted: false,
		playing: playback.is_playing,
		start_at: 0,
	})
}

pub fn facebook_share_url(page_url: &Url) -> Url {
	let mut share_url = Url::parse(FACEBOOK_SHARER_URL).expect("Sharer URL is a valid constant");
	share_url.query_pairs_mut().append_pair("u", page_url.as_str());
	share_url
}
