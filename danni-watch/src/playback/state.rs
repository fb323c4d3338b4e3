use crate::playback::synchronizer::PlaybackSynchronizer;

/// Playback state of one watch page. Play and pause are mirrored to both players through `is_playing`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaybackState {
	pub synchronizer: PlaybackSynchronizer,
	pub is_playing: bool,
}

impl PlaybackState {
	pub fn primary_position(&self) -> f64 {
		self.synchronizer.primary_position()
	}

	pub fn secondary_position(&self) -> f64 {
		self.synchronizer.secondary_position()
	}

	pub fn play(&mut self) {
		self.is_playing = true;
	}

	pub fn pause(&mut self) {
		self.is_playing = false;
	}

	pub fn toggle(&mut self) {
		self.is_playing = !self.is_playing;
	}

	/// Forget both positions, e.g. when another record is shown. The playing flag is left alone.
	pub fn reset_positions(&mut self) {
		self.synchronizer = PlaybackSynchronizer::default();
	}
}
