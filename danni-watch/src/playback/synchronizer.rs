use crate::player::SecondaryPlayer;
use tracing::debug;

/// Drift between the two players that is tolerated before the secondary gets corrected.
pub const DRIFT_TOLERANCE_IN_SECONDS: f64 = 2.0;

/// Keeps the secondary player aligned with the position reported by the primary player.
///
/// Only primary ticks trigger corrections and only the secondary is ever moved, so the primary's
/// own seeking is never fought. A position of `0.0` means the player hasn't reported yet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaybackSynchronizer {
	primary_position: f64,
	secondary_position: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Correction {
	pub seek_to: f64,
	pub drift: f64,
}

impl PlaybackSynchronizer {
	pub fn primary_position(&self) -> f64 {
		self.primary_position
	}

	pub fn secondary_position(&self) -> f64 {
		self.secondary_position
	}

	/// Records the primary position and seeks the secondary once if it drifted too far.
	///
	/// A seek that silently fails is not retried, the next tick re-evaluates with fresh positions.
	pub fn on_primary_progress<Player>(&mut self, played_seconds: f64, secondary: &mut Player) -> Option<Correction>
	where
		Player: SecondaryPlayer + ?Sized,
	{
		self.primary_position = played_seconds;

		let correction = self.correction()?;
		debug!(
			"Secondary player drifted by {:.2}s, seeking it to {:.2}s.",
			correction.drift, correction.seek_to
		);
		secondary.seek_to(correction.seek_to);
		Some(correction)
	}

	/// Only recorded, never used to move the primary.
	pub fn on_secondary_progress(&mut self, played_seconds: f64) {
		self.secondary_position = played_seconds;
	}

	fn correction(&self) -> Option<Correction> {
		let primary = self.primary_position;
		let secondary = self.secondary_position;
		if primary <= 0.0 || secondary <= 0.0 || primary == secondary {
			return None;
		}

		let drift = (secondary - primary).abs();
		(drift > DRIFT_TOLERANCE_IN_SECONDS).then_some(Correction { seek_to: primary, drift })
	}
}
