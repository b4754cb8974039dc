use serde::Deserialize;

/// Text rendered around the table: titles, placeholders and button captions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiLabels {
	/// Title drawn on the table border.
	pub title: Option<String>,
	/// Placeholder shown while the search box is empty. Derived from the
	/// searched column when unset.
	pub search_placeholder: Option<String>,
	/// Caption of the column visibility menu button.
	pub columns_button: String,
	/// Longer caption used when the toolbar has room for it.
	pub columns_button_wide: String,
	/// Label before the page size in the footer.
	pub rows_per_page: String,
	/// Status text shown next to the spinner while loading.
	pub loading: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: None,
			search_placeholder: None,
			columns_button: "Columns".to_string(),
			columns_button_wide: "Customize Columns".to_string(),
			rows_per_page: "Rows per page".to_string(),
			loading: "Loading".to_string(),
		}
	}
}

impl UiLabels {
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	pub fn columns_caption(&self, narrow: bool) -> &str {
		if narrow {
			&self.columns_button
		} else {
			&self.columns_button_wide
		}
	}

	/// Placeholder for the search box, naming the searched column when there is one.
	pub fn placeholder_for(&self, search_column: Option<&str>) -> String {
		match (&self.search_placeholder, search_column) {
			(Some(placeholder), _) => placeholder.clone(),
			(None, Some(column)) => format!("Filter by {column}..."),
			(None, None) => "Search...".to_string(),
		}
	}
}
