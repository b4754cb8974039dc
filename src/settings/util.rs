use std::collections::HashSet;

/// Trim field names, dropping empty entries and repeats.
pub(super) fn sanitize_fields(values: Vec<String>) -> Vec<String> {
	let mut seen = HashSet::new();
	values
		.into_iter()
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty() && seen.insert(value.clone()))
		.collect()
}

/// Sort page size options ascending and drop repeats.
pub(super) fn normalize_page_sizes(mut sizes: Vec<usize>) -> Vec<usize> {
	sizes.sort_unstable();
	sizes.dedup();
	sizes
}

/// Empty strings count as unset.
pub(super) fn non_empty(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fields_are_trimmed_and_deduplicated() {
		let fields = sanitize_fields(vec![
			" name ".into(),
			"".into(),
			"price".into(),
			"name".into(),
		]);
		assert_eq!(fields, vec!["name", "price"]);
	}

	#[test]
	fn page_sizes_are_sorted_and_unique() {
		assert_eq!(normalize_page_sizes(vec![50, 10, 20, 10]), vec![10, 20, 50]);
	}

	#[test]
	fn blank_strings_are_unset() {
		assert_eq!(non_empty(Some("  ".into())), None);
		assert_eq!(non_empty(Some(" id ".into())), Some("id".into()));
	}
}
