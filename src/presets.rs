//! Column layouts for the record kinds of the travel back-office exports.
//!
//! A preset names the id field, the searched column and the columns (with
//! headers and cell formats) for one kind of record. `generic` derives plain
//! columns from whatever fields the first record has.

use std::fmt;
use std::str::FromStr;

use gridline_core::{CellValue, ColumnDef};
use serde::{Deserialize, Serialize};

use crate::records::JsonRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
	Packages,
	Bookings,
	Destinations,
	Categories,
	#[default]
	Generic,
}

impl Preset {
	pub const ALL: [Self; 5] = [
		Self::Packages,
		Self::Bookings,
		Self::Destinations,
		Self::Categories,
		Self::Generic,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Packages => "packages",
			Self::Bookings => "bookings",
			Self::Destinations => "destinations",
			Self::Categories => "categories",
			Self::Generic => "generic",
		}
	}

	/// Columns and table settings for this preset. `fields` are the fields
	/// present in the data, used by [`Preset::Generic`].
	pub fn layout(self, fields: &[String]) -> PresetLayout {
		use CellFormat::{Currency, Plain, Rating, YesNo};

		let (title, search_column, placeholder, action, columns) = match self {
			Self::Packages => (
				"Packages",
				Some("title"),
				Some("Search packages..."),
				Some("Add Package"),
				vec![
					PresetColumn::sortable("title", "Package Name", Plain),
					PresetColumn::plain("destinationName", "Destination"),
					PresetColumn::plain("categoryName", "Category"),
					PresetColumn::plain("duration", "Duration"),
					PresetColumn::sortable("price", "Price", Currency),
					PresetColumn::sortable("rating", "Rating", Rating),
					PresetColumn::plain("featured", "Featured").format(YesNo),
				],
			),
			Self::Bookings => (
				"Bookings",
				Some("full_name"),
				Some("Search bookings..."),
				Some("Add Booking"),
				vec![
					PresetColumn::sortable("full_name", "Customer", Plain),
					PresetColumn::plain("packages.title", "Package"),
					PresetColumn::sortable("departure_date", "Travel Date", Plain),
					PresetColumn::sortable("travelers", "Travelers", Plain),
					PresetColumn::plain("room_type", "Room"),
					PresetColumn::plain("status", "Status"),
					PresetColumn::sortable("created_at", "Created", Plain),
				],
			),
			Self::Destinations => (
				"Destinations",
				Some("name"),
				Some("Search destinations..."),
				Some("Add Destination"),
				vec![
					PresetColumn::sortable("name", "Destination Name", Plain),
					PresetColumn::sortable("country", "Country", Plain),
					PresetColumn::plain("category", "Category"),
					PresetColumn::sortable("packageCount", "Packages", Plain),
					PresetColumn::sortable("startingPrice", "Starting Price", Currency),
					PresetColumn::sortable("rating", "Rating", Rating),
				],
			),
			Self::Categories => (
				"Categories",
				Some("name"),
				Some("Search categories..."),
				Some("Add Category"),
				vec![
					PresetColumn::sortable("name", "Category Name", Plain),
					PresetColumn::plain("description", "Description"),
				],
			),
			Self::Generic => (
				"Records",
				None,
				None,
				None,
				fields
					.iter()
					.map(|field| PresetColumn::sortable(field, field, Plain))
					.collect(),
			),
		};

		PresetLayout {
			title: title.to_string(),
			id_field: "id".to_string(),
			search_column: search_column.map(str::to_string),
			search_placeholder: placeholder.map(str::to_string),
			action: action.map(str::to_string),
			columns,
		}
	}
}

impl fmt::Display for Preset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Preset {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let normalized = value.trim().to_ascii_lowercase();
		Self::ALL
			.into_iter()
			.find(|preset| preset.as_str() == normalized)
			.ok_or_else(|| {
				let names: Vec<&str> = Self::ALL.iter().map(|preset| preset.as_str()).collect();
				format!("unknown preset '{value}' (expected one of: {})", names.join(", "))
			})
	}
}

/// How a cell's value is turned into text. Sorting always uses the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellFormat {
	#[default]
	Plain,
	Currency,
	Rating,
	YesNo,
}

impl CellFormat {
	pub fn render(self, value: &CellValue) -> String {
		match (self, value) {
			(Self::Currency, CellValue::Number(amount)) => format_currency(*amount),
			(Self::Rating, CellValue::Number(rating)) => format!("★ {rating:.1}"),
			(Self::YesNo, CellValue::Bool(flag)) => String::from(if *flag { "Yes" } else { "No" }),
			_ => value.to_string(),
		}
	}
}

fn format_currency(amount: f64) -> String {
	let sign = if amount < 0.0 { "-" } else { "" };
	let amount = amount.abs();
	let whole = amount.trunc() as u64;
	let cents = ((amount - amount.trunc()) * 100.0).round() as u64;
	let digits = whole.to_string();
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	for (index, digit) in digits.chars().enumerate() {
		if index > 0 && (digits.len() - index) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(digit);
	}
	if cents == 0 {
		format!("{sign}${grouped}")
	} else {
		format!("{sign}${grouped}.{cents:02}")
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetColumn {
	/// Field path inside the record; also the column id.
	pub field: String,
	pub header: String,
	pub sortable: bool,
	pub format: CellFormat,
}

impl PresetColumn {
	pub fn plain(field: &str, header: &str) -> Self {
		Self {
			field: field.to_string(),
			header: header.to_string(),
			sortable: false,
			format: CellFormat::Plain,
		}
	}

	pub fn sortable(field: &str, header: &str, format: CellFormat) -> Self {
		Self {
			sortable: true,
			format,
			..Self::plain(field, header)
		}
	}

	#[must_use]
	pub fn format(mut self, format: CellFormat) -> Self {
		self.format = format;
		self
	}

	pub fn to_column_def(&self) -> ColumnDef<JsonRecord> {
		let path = self.field.clone();
		let format = self.format;
		let column =
			ColumnDef::accessor(self.field.as_str(), move |row: &JsonRecord| row.cell(&path))
				.enable_sorting(self.sortable)
			.cell(move |context| format.render(&context.value));
		if self.sortable {
			column.sortable_header(self.header.as_str())
		} else {
			column.header(self.header.as_str())
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetLayout {
	pub title: String,
	pub id_field: String,
	pub search_column: Option<String>,
	pub search_placeholder: Option<String>,
	/// Caption of the toolbar action the preset offers, if any.
	pub action: Option<String>,
	pub columns: Vec<PresetColumn>,
}

impl PresetLayout {
	/// Keep only the `requested` fields, in the requested order. Fields the
	/// preset does not know become plain sortable columns.
	pub fn restrict_columns(&mut self, requested: &[String]) {
		if requested.is_empty() {
			return;
		}
		let known = std::mem::take(&mut self.columns);
		self.columns = requested
			.iter()
			.map(|field| {
				known
					.iter()
					.find(|column| &column.field == field)
					.cloned()
					.unwrap_or_else(|| PresetColumn::sortable(field, field, CellFormat::Plain))
			})
			.collect();
	}

	pub fn column_defs(&self) -> Vec<ColumnDef<JsonRecord>> {
		self.columns.iter().map(PresetColumn::to_column_def).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn names_round_trip_through_from_str() {
		for preset in Preset::ALL {
			assert_eq!(preset.as_str().parse::<Preset>(), Ok(preset));
		}
		assert_eq!(" Bookings ".parse::<Preset>(), Ok(Preset::Bookings));
		let error = "trips".parse::<Preset>().unwrap_err();
		assert!(error.contains("packages, bookings"));
	}

	#[test]
	fn packages_search_by_title() {
		let layout = Preset::Packages.layout(&[]);
		assert_eq!(layout.search_column.as_deref(), Some("title"));
		assert_eq!(layout.action.as_deref(), Some("Add Package"));
		assert_eq!(layout.columns[0].header, "Package Name");
		assert!(layout.columns.iter().any(|column| column.format == CellFormat::Currency));
	}

	#[test]
	fn generic_layout_uses_the_data_fields() {
		let fields = vec!["id".to_string(), "name".to_string()];
		let layout = Preset::Generic.layout(&fields);
		let headers: Vec<&str> = layout
			.columns
			.iter()
			.map(|column| column.header.as_str())
			.collect();
		assert_eq!(headers, vec!["id", "name"]);
		assert!(layout.search_column.is_none());
	}

	#[test]
	fn restricting_keeps_request_order_and_adds_unknown_fields() {
		let mut layout = Preset::Categories.layout(&[]);
		layout.restrict_columns(&["description".into(), "slug".into(), "name".into()]);
		let fields: Vec<&str> = layout.columns.iter().map(|column| column.field.as_str()).collect();
		assert_eq!(fields, vec!["description", "slug", "name"]);
		assert_eq!(layout.columns[0].header, "Description");
		assert!(layout.columns[1].sortable);
	}

	#[test]
	fn formats_render_their_values() {
		assert_eq!(CellFormat::Currency.render(&CellValue::Number(1200.0)), "$1,200");
		assert_eq!(CellFormat::Currency.render(&CellValue::Number(1234567.5)), "$1,234,567.50");
		assert_eq!(CellFormat::Currency.render(&CellValue::Number(-45.0)), "-$45");
		assert_eq!(CellFormat::Rating.render(&CellValue::Number(4.0)), "★ 4.0");
		assert_eq!(CellFormat::YesNo.render(&CellValue::Bool(false)), "No");
		assert_eq!(CellFormat::Currency.render(&CellValue::Empty), "");
	}
}
