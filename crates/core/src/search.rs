//! Fuzzy matching for the table-wide search box.

use frizbee::{Config, match_list};

/// Longer queries tolerate a few missing characters; short ones must match
/// as a subsequence.
fn typo_budget(query: &str) -> u16 {
	match query.chars().count() {
		0..=4 => 0,
		5..=8 => 1,
		_ => 2,
	}
}

/// Matching options for `query`. Prefiltering is always on so rows that do
/// not contain the query are dropped rather than ranked low.
pub fn config_for_query(query: &str) -> Config {
	Config {
		prefilter: true,
		max_typos: Some(typo_budget(query)),
		sort: false,
		..Config::default()
	}
}

/// Indices of the haystacks that fuzzy-match `query`, in ascending order.
/// Matching ignores case. A blank query matches everything.
pub fn matching_indices<S: AsRef<str>>(query: &str, haystacks: &[S]) -> Vec<usize> {
	let needle = query.trim().to_lowercase();
	if needle.is_empty() {
		return (0..haystacks.len()).collect();
	}
	let lowered: Vec<String> = haystacks
		.iter()
		.map(|haystack| haystack.as_ref().to_lowercase())
		.collect();
	let refs: Vec<&str> = lowered.iter().map(String::as_str).collect();
	let config = config_for_query(&needle);

	let mut indices: Vec<usize> = match_list(&needle, &refs, &config)
		.into_iter()
		.filter(|entry| entry.score > 0)
		.map(|entry| entry.index as usize)
		.collect();
	indices.sort_unstable();
	indices
}
