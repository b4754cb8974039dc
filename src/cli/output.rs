use anyhow::Result;
use serde_json::json;

use crate::workflow::ViewerOutcome;

/// Print the selected row ids, one per line.
pub(crate) fn print_plain(outcome: &ViewerOutcome) {
	for line in plain_lines(outcome) {
		println!("{line}");
	}
}

fn plain_lines(outcome: &ViewerOutcome) -> Vec<String> {
	if !outcome.accepted {
		return vec!["Cancelled".to_string()];
	}
	if !outcome.selected.is_empty() {
		return outcome.selected.iter().map(ToString::to_string).collect();
	}
	match &outcome.current {
		Some(id) => vec![id.to_string()],
		None => vec!["No selection".to_string()],
	}
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &ViewerOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"selected": outcome.selected,
		"current": outcome.current,
		"reordered": outcome.reordered,
		"triggered": outcome.triggered,
		"state": outcome.state,
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_json(outcome: &ViewerOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use gridline::{RowId, TableState};
	use serde_json::Value;

	use super::*;

	fn outcome(accepted: bool, selected: &[&str], current: Option<&str>) -> ViewerOutcome {
		ViewerOutcome {
			accepted,
			selected: selected.iter().copied().map(RowId::from).collect(),
			current: current.map(RowId::from),
			reordered: None,
			triggered: Vec::new(),
			state: TableState::default(),
		}
	}

	#[test]
	fn plain_output_prefers_selection_then_cursor() {
		assert_eq!(plain_lines(&outcome(true, &["3", "1"], Some("2"))), vec!["3", "1"]);
		assert_eq!(plain_lines(&outcome(true, &[], Some("2"))), vec!["2"]);
		assert_eq!(plain_lines(&outcome(true, &[], None)), vec!["No selection"]);
		assert_eq!(plain_lines(&outcome(false, &["3"], Some("3"))), vec!["Cancelled"]);
	}

	#[test]
	fn json_output_carries_ids_and_state() {
		let mut outcome = outcome(true, &["7"], Some("7"));
		outcome.reordered = Some(vec![RowId::from("7"), RowId::from("1")]);
		outcome.triggered = vec!["Add Booking".into()];

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["selected"][0], "7");
		assert_eq!(value["current"], "7");
		assert_eq!(value["reordered"][1], "1");
		assert_eq!(value["triggered"][0], "Add Booking");
		assert!(value["state"].is_object());
	}

	#[test]
	fn json_output_uses_null_without_a_reorder() {
		let json = format_outcome_json(&outcome(false, &[], None)).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert!(value["reordered"].is_null());
		assert!(value["current"].is_null());
	}
}
