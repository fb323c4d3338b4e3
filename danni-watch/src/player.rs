use serde::Serialize;

/// Properties handed to an embeddable player widget.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerProps {
	pub source: String,
	/// Fraction in `0.0..=1.0`.
	pub volume: f64,
	pub muted: bool,
	pub playing: bool,
	/// Offset in seconds the widget should start at.
	pub start_at: u64,
}

/// Imperative handle on the secondary (audio only) player.
pub trait SecondaryPlayer {
	fn seek_to(&mut self, position_in_seconds: f64);
}

impl<Player: SecondaryPlayer + ?Sized> SecondaryPlayer for Box<Player> {
	fn seek_to(&mut self, position_in_seconds: f64) {
		(**self).seek_to(position_in_seconds);
	}
}
