use crate::player::SecondaryPlayer;
use crate::prompt::Prompt;
use crate::router::{Route, Router};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Asks on stdin, answers on stdout.
pub struct TerminalPrompt<Input, Output> {
	input: Input,
	output: Output,
}

impl TerminalPrompt<std::io::StdinLock<'static>, std::io::Stdout> {
	pub fn stdio() -> Self {
		Self::new(std::io::stdin().lock(), std::io::stdout())
	}
}

impl<Input: BufRead, Output: Write> TerminalPrompt<Input, Output> {
	pub fn new(input: Input, output: Output) -> Self {
		Self { input, output }
	}
}

impl<Input: BufRead, Output: Write> Prompt for TerminalPrompt<Input, Output> {
	fn alert(&mut self, message: &str) {
		if let Err(error) = writeln!(self.output, "{message}") {
			warn!("Failed to show alert '{}': {}", message, error);
		}
	}

	/// Anything but an explicit yes counts as no, including a closed stdin.
	fn confirm(&mut self, message: &str) -> bool {
		if let Err(error) = write!(self.output, "{message} [y/N] ").and_then(|()| self.output.flush()) {
			warn!("Failed to show confirmation '{}': {}", message, error);
		}

		let mut answer = String::new();
		if self.input.read_line(&mut answer).is_err() {
			return false;
		}
		matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
	}
}

/// There is no browser to navigate, so the target path is printed.
#[derive(Default)]
pub struct TerminalRouter {
	pub last_route: Option<Route>,
}

impl Router for TerminalRouter {
	fn push(&mut self, route: Route) {
		info!("Navigating to '{}'.", route.path());
		println!("-> {}", route.path());
		self.last_route = Some(route);
	}
}

/// Stand-in for the audio widget when nothing actually plays.
pub struct LoggingPlayer;

impl SecondaryPlayer for LoggingPlayer {
	fn seek_to(&mut self, position_in_seconds: f64) {
		debug!("Secondary player seeks to {position_in_seconds:.2}s.");
	}
}
