pub mod commandline;
pub mod configuration;
pub mod context;
pub mod credential;
pub mod error;
pub mod form_factor;
pub mod playback;
pub mod player;
pub mod prompt;
pub mod router;
pub mod terminal;
pub mod transport;
pub mod video;
pub mod watch;
