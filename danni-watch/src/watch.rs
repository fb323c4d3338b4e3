use crate::credential::{Credential, CredentialGate};
use crate::form_factor::FormFactor;
use crate::playback::state::PlaybackState;
use crate::playback::synchronizer::Correction;
use crate::player::{PlayerProps, SecondaryPlayer};
use crate::prompt::Prompt;
use crate::router::{Route, Router};
use crate::transport::VideoTransport;
use crate::video::VideoId;
use crate::video::model::VideoRecord;
use crate::watch::view::{Site, WatchView, render_ready, secondary_player_props};
use tracing::{debug, info, warn};

pub mod view;

#[cfg(test)]
mod tests;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this video?";

#[derive(Clone, Debug, PartialEq)]
pub enum FetchState {
	Loading,
	Failed(String),
	Loaded(Option<VideoRecord>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
	CredentialMismatch,
	Declined,
	Deleted(VideoId),
	Failed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
	CredentialMismatch,
	Redirected,
}

/// State and event handlers of one watch page.
///
/// All state lives here and is only changed through `&mut self` handlers, one event at a time.
pub struct WatchPage {
	video_id: VideoId,
	form_factor: FormFactor,
	credential_gate: CredentialGate,
	fetch: FetchState,
	playback: PlaybackState,
	credential_input: Credential,
	secondary_player: Option<Box<dyn SecondaryPlayer + Send>>,
}

impl WatchPage {
	pub fn new(video_id: VideoId, form_factor: FormFactor, credential_gate: CredentialGate) -> Self {
		Self {
			video_id,
			form_factor,
			credential_gate,
			fetch: FetchState::Loading,
			playback: PlaybackState::default(),
			credential_input: Credential::default(),
			secondary_player: None,
		}
	}

	pub fn video_id(&self) -> &VideoId {
		&self.video_id
	}

	pub fn fetch_state(&self) -> &FetchState {
		&self.fetch
	}

	pub fn playback(&self) -> &PlaybackState {
		&self.playback
	}

	pub fn record(&self) -> Option<&VideoRecord> {
		match &self.fetch {
			FetchState::Loaded(record) => record.as_ref(),
			FetchState::Loading | FetchState::Failed(_) => None,
		}
	}

	/// Fetches the record for the current id. Failures are kept for display, there is no retry.
	pub async fn load(&mut self, transport: &dyn VideoTransport) {
		self.fetch = FetchState::Loading;
		self.fetch = match transport.video(&self.video_id).await {
			Ok(record) => {
				if record.is_none() {
					info!("No video found for '{}'.", self.video_id);
				}
				FetchState::Loaded(record)
			}
			Err(error) => {
				warn!("Failed to fetch video '{}': {}", self.video_id, error);
				FetchState::Failed(error.to_string())
			}
		};
	}

	/// Switch to another record. Touch devices stop playing so autoplay doesn't carry over.
	pub fn navigate(&mut self, video_id: VideoId) {
		if video_id == self.video_id {
			return;
		}

		debug!("Navigating from video '{}' to '{}'.", self.video_id, video_id);
		self.video_id = video_id;
		self.fetch = FetchState::Loading;
		self.secondary_player = None;
		self.playback.reset_positions();
		if self.form_factor.is_touch() {
			self.playback.pause();
		}
	}

	/// Instantiates the secondary player, but only if the record has an alternate audio track.
	///
	/// Returns whether a secondary player is mounted afterwards.
	pub fn mount_secondary_player<Factory>(&mut self, factory: Factory) -> bool
	where
		Factory: FnOnce(&PlayerProps) -> Box<dyn SecondaryPlayer + Send>,
	{
		if self.secondary_player.is_some() {
			return true;
		}

		let Some(props) = self
			.record()
			.and_then(|record| secondary_player_props(record, &self.playback))
		else {
			return false;
		};

		self.secondary_player = Some(factory(&props));
		true
	}

	pub fn has_secondary_player(&self) -> bool {
		self.secondary_player.is_some()
	}

	/// Without a secondary player the synchronizer is inactive.
	pub fn on_primary_progress(&mut self, played_seconds: f64) -> Option<Correction> {
		let secondary_player = self.secondary_player.as_mut()?;
		self.playback
			.synchronizer
			.on_primary_progress(played_seconds, secondary_player)
	}

	pub fn on_secondary_progress(&mut self, played_seconds: f64) {
		if self.secondary_player.is_some() {
			self.playback.synchronizer.on_secondary_progress(played_seconds);
		}
	}

	pub fn on_primary_play(&mut self) {
		self.playback.play();
	}

	pub fn on_primary_pause(&mut self) {
		self.playback.pause();
	}

	pub fn on_secondary_pause(&mut self) {
		self.playback.pause();
	}

	/// Click on the overlay covering the primary player.
	pub fn toggle_playing(&mut self) {
		self.playback.toggle();
	}

	pub fn set_credential_input(&mut self, credential: impl Into<Credential>) {
		self.credential_input = credential.into();
	}

	pub async fn delete(
		&mut self,
		transport: &dyn VideoTransport,
		prompt: &mut dyn Prompt,
		router: &mut dyn Router,
	) -> DeleteOutcome {
		if let Err(mismatch) = self.credential_gate.check(&self.credential_input) {
			prompt.alert(&mismatch.to_string());
			return DeleteOutcome::CredentialMismatch;
		}

		if !prompt.confirm(DELETE_CONFIRMATION) {
			return DeleteOutcome::Declined;
		}

		match transport.delete_video(&self.video_id, &self.credential_input).await {
			Ok(deleted_id) => {
				info!("Video '{}' deleted, returning home.", deleted_id);
				router.push(Route::Home);
				DeleteOutcome::Deleted(deleted_id)
			}
			Err(error) => {
				warn!("Failed to delete video '{}': {}", self.video_id, error);
				let message = error.to_string();
				prompt.alert(&message);
				DeleteOutcome::Failed(message)
			}
		}
	}

	pub fn edit(&self, prompt: &mut dyn Prompt, router: &mut dyn Router) -> EditOutcome {
		if let Err(mismatch) = self.credential_gate.check(&self.credential_input) {
			prompt.alert(&mismatch.to_string());
			return EditOutcome::CredentialMismatch;
		}

		router.push(Route::Edit {
			id: self.video_id.clone(),
			credential: self.credential_input.clone(),
		});
		EditOutcome::Redirected
	}

	pub fn view(&self, site: &Site) -> WatchView {
		match &self.fetch {
			FetchState::Loading => WatchView::Loading,
			FetchState::Failed(message) => WatchView::Failed {
				message: message.clone(),
			},
			FetchState::Loaded(None) => WatchView::NotFound {
				video_id: self.video_id.clone(),
			},
			FetchState::Loaded(Some(record)) => WatchView::Ready(Box::new(render_ready(
				record,
				&self.playback,
				self.form_factor,
				site,
			))),
		}
	}
}
