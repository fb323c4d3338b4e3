use serde::Deserialize;

/// Device class the page is shown on. Touch devices don't allow uncontrolled autoplay,
/// so playback is stopped when they navigate to another record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FormFactor {
	#[default]
	Desktop,
	Touch,
}

impl FormFactor {
	pub fn is_touch(self) -> bool {
		matches!(self, FormFactor::Touch)
	}
}
