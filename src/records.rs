//! Schemaless JSON records and how to read them.

use std::io::Read;

use gridline_core::{CellValue, RowId};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
	#[error("failed to parse JSON input: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("expected a JSON array of objects or an object holding one")]
	NotAnArray,
	#[error("record {index} is not a JSON object")]
	NotAnObject { index: usize },
}

/// One row of a JSON document: an object whose fields become cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct JsonRecord(Map<String, Value>);

impl JsonRecord {
	pub fn new(fields: Map<String, Value>) -> Self {
		Self(fields)
	}

	pub fn fields(&self) -> &Map<String, Value> {
		&self.0
	}

	/// Look up a field. Dotted paths (`packages.title`) walk nested objects.
	pub fn field(&self, path: &str) -> Option<&Value> {
		let mut segments = path.split('.');
		let first = segments.next()?;
		let mut value = self.0.get(first)?;
		for segment in segments {
			value = value.as_object()?.get(segment)?;
		}
		Some(value)
	}

	pub fn cell(&self, path: &str) -> CellValue {
		self.field(path).map_or(CellValue::Empty, value_to_cell)
	}

	/// Row id read from `field`. Strings and numbers qualify.
	pub fn id(&self, field: &str) -> Option<RowId> {
		match self.field(field)? {
			Value::String(text) => Some(RowId::new(text.clone())),
			Value::Number(number) => Some(RowId::new(number.to_string())),
			_ => None,
		}
	}
}

fn value_to_cell(value: &Value) -> CellValue {
	match value {
		Value::Null => CellValue::Empty,
		Value::Bool(flag) => CellValue::Bool(*flag),
		Value::Number(number) => number.as_f64().map_or(CellValue::Empty, CellValue::Number),
		Value::String(text) => CellValue::Text(text.clone()),
		Value::Array(items) => CellValue::Text(
			items
				.iter()
				.map(|item| match item {
					Value::String(text) => text.clone(),
					other => other.to_string(),
				})
				.collect::<Vec<_>>()
				.join(", "),
		),
		Value::Object(_) => CellValue::Text(value.to_string()),
	}
}

/// Parse records from a JSON document. The document is either an array of
/// objects or an object with a single array-valued field (`{"data": [...]}`).
pub fn parse_records(value: Value) -> Result<Vec<JsonRecord>, RecordError> {
	let items = match value {
		Value::Array(items) => items,
		Value::Object(mut object) if object.len() == 1 => {
			match object.values_mut().next().map(Value::take) {
				Some(Value::Array(items)) => items,
				_ => return Err(RecordError::NotAnArray),
			}
		}
		_ => return Err(RecordError::NotAnArray),
	};
	items
		.into_iter()
		.enumerate()
		.map(|(index, item)| match item {
			Value::Object(fields) => Ok(JsonRecord(fields)),
			_ => Err(RecordError::NotAnObject { index }),
		})
		.collect()
}

pub fn read_records(reader: impl Read) -> Result<Vec<JsonRecord>, RecordError> {
	let value: Value = serde_json::from_reader(reader)?;
	parse_records(value)
}

/// Field names of the first record, sorted by name.
pub fn field_names(records: &[JsonRecord]) -> Vec<String> {
	records
		.first()
		.map(|record| record.0.keys().cloned().collect())
		.unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn booking() -> JsonRecord {
		let records = parse_records(json!([{
			"id": 7,
			"full_name": "Ana Lima",
			"travelers": 2,
			"paid": true,
			"notes": null,
			"packages": { "title": "Lisbon Getaway" },
			"tags": ["family", 3]
		}]))
		.expect("records");
		records.into_iter().next().expect("one record")
	}

	#[test]
	fn scalar_fields_become_typed_cells() {
		let record = booking();
		assert_eq!(record.cell("full_name"), CellValue::Text("Ana Lima".into()));
		assert_eq!(record.cell("travelers"), CellValue::Number(2.0));
		assert_eq!(record.cell("paid"), CellValue::Bool(true));
		assert_eq!(record.cell("notes"), CellValue::Empty);
		assert_eq!(record.cell("missing"), CellValue::Empty);
	}

	#[test]
	fn dotted_paths_and_arrays_render_as_text() {
		let record = booking();
		assert_eq!(record.cell("packages.title"), CellValue::Text("Lisbon Getaway".into()));
		assert_eq!(record.cell("packages.missing"), CellValue::Empty);
		assert_eq!(record.cell("tags"), CellValue::Text("family, 3".into()));
	}

	#[test]
	fn ids_come_from_numbers_or_strings() {
		let record = booking();
		assert_eq!(record.id("id"), Some(RowId::from("7")));
		assert_eq!(record.id("full_name"), Some(RowId::from("Ana Lima")));
		assert_eq!(record.id("paid"), None);
	}

	#[test]
	fn wrapped_arrays_are_accepted() {
		let records =
			parse_records(json!({ "data": [{ "id": 1 }, { "id": 2 }] })).expect("records");
		assert_eq!(records.len(), 2);
	}

	#[test]
	fn non_object_items_are_rejected() {
		let error = parse_records(json!([{ "id": 1 }, 2])).unwrap_err();
		assert!(matches!(error, RecordError::NotAnObject { index: 1 }));
		assert!(matches!(parse_records(json!("nope")), Err(RecordError::NotAnArray)));
	}

	#[test]
	fn reader_reports_malformed_json() {
		let error = read_records("[{".as_bytes()).unwrap_err();
		assert!(error.to_string().starts_with("failed to parse JSON input"));
	}
}
