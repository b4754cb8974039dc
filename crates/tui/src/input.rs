//! Single-line search box backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use crate::style::Theme;

pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl std::fmt::Debug for QueryInput<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("QueryInput").field("text", &self.text()).finish()
	}
}

impl Default for QueryInput<'_> {
	fn default() -> Self {
		Self::new("")
	}
}

impl<'a> QueryInput<'a> {
	pub fn new(initial: &str) -> Self {
		let mut textarea = TextArea::new(vec![initial.to_string()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(tui_textarea::CursorMove::End);
		Self { textarea }
	}

	pub fn text(&self) -> &str {
		self.textarea.lines().first().map(String::as_str).unwrap_or("")
	}

	/// Feed a key to the text box. Newlines are swallowed so the query stays on
	/// one line. Returns whether the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if matches!(key.code, KeyCode::Enter)
			|| (key.code == KeyCode::Char('m') && key.modifiers.contains(KeyModifiers::CONTROL))
		{
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	/// Clear the text. Returns whether there was anything to clear.
	pub fn clear(&mut self) -> bool {
		if self.text().is_empty() {
			return false;
		}
		*self = Self::new("");
		true
	}

	/// Draw the text box; the cursor is only shown while `focused`.
	pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
		let cursor = if focused {
			theme.prompt.add_modifier(Modifier::REVERSED)
		} else {
			theme.prompt
		};
		self.textarea.set_style(theme.prompt);
		self.textarea.set_cursor_style(cursor);
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyEventKind, KeyEventState};

	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent {
			code,
			modifiers: KeyModifiers::NONE,
			kind: KeyEventKind::Press,
			state: KeyEventState::NONE,
		}
	}

	#[test]
	fn typing_updates_the_text() {
		let mut input = QueryInput::new("li");
		assert!(input.input(key(KeyCode::Char('s'))));
		assert_eq!(input.text(), "lis");
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "li");
	}

	#[test]
	fn enter_never_splits_the_line() {
		let mut input = QueryInput::new("lisbon");
		assert!(!input.input(key(KeyCode::Enter)));
		assert_eq!(input.text(), "lisbon");
	}

	#[test]
	fn clear_reports_whether_text_was_removed() {
		let mut input = QueryInput::new("porto");
		assert!(input.clear());
		assert_eq!(input.text(), "");
		assert!(!input.clear());
	}
}
