use super::{IdentityMode, ResolvedConfig};

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	match &config.input {
		Some(path) => println!("  Input: {}", path.display()),
		None => println!("  Input: (stdin)"),
	}
	println!("  Preset: {}", config.preset);
	match &config.identity {
		IdentityMode::Field(field) => println!("  Row ids: field `{field}`"),
		IdentityMode::Positional => println!("  Row ids: positional"),
	}
	if config.columns.is_empty() {
		println!("  Columns: (preset)");
	} else {
		println!("  Columns: {}", config.columns.join(", "));
	}
	if let Some(column) = &config.search_column {
		println!("  Search column: {column}");
	}
	let features = &config.features;
	println!("  Selection: {}", bool_to_word(features.selection));
	println!("  Reordering: {}", bool_to_word(features.drag_and_drop));
	println!("  Pagination: {}", bool_to_word(features.pagination));
	println!("  Sorting: {}", bool_to_word(features.sorting));
	println!("  Filtering: {}", bool_to_word(features.filtering));
	println!("  Column menu: {}", bool_to_word(features.column_visibility));
	println!("  Page size: {}", config.page_size);
	println!("  Page size options: {}", format_sizes(&config.page_size_options));
	if let Some(message) = &config.empty_message {
		println!("  Empty message: {message}");
	}
	println!(
		"  UI theme: {}",
		config.theme_name.as_deref().unwrap_or("(use the library default)")
	);
	if let Some(title) = &config.labels.title {
		println!("  Title: {title}");
	}
	println!("  Log level: {}", config.log_level);
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

fn format_sizes(sizes: &[usize]) -> String {
	sizes
		.iter()
		.map(usize::to_string)
		.collect::<Vec<_>>()
		.join(", ")
}

#[cfg(test)]
mod tests {
	use gridline::Preset;
	use gridline::engine::Features;
	use gridline::tui::UiLabels;

	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(bool_to_word(true), "yes");
		assert_eq!(bool_to_word(false), "no");
	}

	#[test]
	fn summary_prints_without_panic() {
		let config = ResolvedConfig {
			input: Some("packages.json".into()),
			preset: Preset::Packages,
			identity: IdentityMode::Positional,
			columns: vec!["title".into()],
			search_column: Some("title".into()),
			features: Features::default(),
			page_size: 10,
			page_size_options: vec![10, 20],
			empty_icon: None,
			empty_message: Some("Nothing here".into()),
			theme_name: Some("light".into()),
			labels: UiLabels::default().with_title("Packages"),
			log_level: "debug".into(),
		};

		print_summary(&config);
		assert_eq!(format_sizes(&config.page_size_options), "10, 20");
	}
}
