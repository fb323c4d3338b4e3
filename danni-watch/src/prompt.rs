/// Blocking user dialogs.
pub trait Prompt {
	fn alert(&mut self, message: &str);
	fn confirm(&mut self, message: &str) -> bool;
}
