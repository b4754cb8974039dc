//! Record-level building blocks: cell values and row identity.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Stable identity of a row, used for selection and reordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(String);

impl RowId {
	#[must_use]
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for RowId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Borrow<str> for RowId {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl From<&str> for RowId {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}

impl From<String> for RowId {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<u64> for RowId {
	fn from(value: u64) -> Self {
		Self(value.to_string())
	}
}

impl From<i64> for RowId {
	fn from(value: i64) -> Self {
		Self(value.to_string())
	}
}

impl From<usize> for RowId {
	fn from(value: usize) -> Self {
		Self(value.to_string())
	}
}

/// A single value read out of a record by a column accessor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
	#[default]
	Empty,
	Bool(bool),
	Number(f64),
	Text(String),
}

impl CellValue {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		match self {
			Self::Empty => true,
			Self::Text(text) => text.is_empty(),
			Self::Bool(_) | Self::Number(_) => false,
		}
	}

	/// Total order used when sorting. Values of different kinds order as
	/// bool < number < text; text compares case-insensitively first.
	#[must_use]
	pub fn compare(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Self::Empty, Self::Empty) => Ordering::Equal,
			(Self::Bool(a), Self::Bool(b)) => a.cmp(b),
			(Self::Number(a), Self::Number(b)) => a.total_cmp(b),
			(Self::Text(a), Self::Text(b)) => a
				.to_lowercase()
				.cmp(&b.to_lowercase())
				.then_with(|| a.cmp(b)),
			_ => self.rank().cmp(&other.rank()),
		}
	}

	fn rank(&self) -> u8 {
		match self {
			Self::Empty => 0,
			Self::Bool(_) => 1,
			Self::Number(_) => 2,
			Self::Text(_) => 3,
		}
	}
}

impl fmt::Display for CellValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Empty => Ok(()),
			Self::Bool(value) => write!(f, "{value}"),
			Self::Number(value) => write!(f, "{value}"),
			Self::Text(value) => f.write_str(value),
		}
	}
}

impl From<&str> for CellValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_owned())
	}
}

impl From<String> for CellValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&String> for CellValue {
	fn from(value: &String) -> Self {
		Self::Text(value.clone())
	}
}

impl From<bool> for CellValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<f64> for CellValue {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<i64> for CellValue {
	fn from(value: i64) -> Self {
		Self::Number(value as f64)
	}
}

impl From<u32> for CellValue {
	fn from(value: u32) -> Self {
		Self::Number(f64::from(value))
	}
}

impl From<u64> for CellValue {
	fn from(value: u64) -> Self {
		Self::Number(value as f64)
	}
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
	fn from(value: Option<V>) -> Self {
		value.map_or(Self::Empty, Into::into)
	}
}

type KeyFn<T> = Arc<dyn Fn(&T) -> RowId + Send + Sync>;

/// How rows are identified across reorders and selection changes.
///
/// There is no implicit fallback: a table is constructed either with a key
/// function or with the explicit [`RowIdentity::Positional`] mode. Positional
/// ids are the row's index in the working copy, which only stays correct for
/// data that is never filtered or reordered behind the table's back.
pub enum RowIdentity<T> {
	Keyed(KeyFn<T>),
	Positional,
}

impl<T> RowIdentity<T> {
	/// Identify rows with a caller-supplied key.
	pub fn keyed<F, K>(key: F) -> Self
	where
		F: Fn(&T) -> K + Send + Sync + 'static,
		K: Into<RowId>,
	{
		Self::Keyed(Arc::new(move |row: &T| -> RowId { key(row).into() }))
	}

	#[must_use]
	pub fn positional() -> Self {
		Self::Positional
	}

	#[must_use]
	pub fn is_positional(&self) -> bool {
		matches!(self, Self::Positional)
	}

	#[must_use]
	pub fn id_for(&self, row: &T, index: usize) -> RowId {
		match self {
			Self::Keyed(key) => key(row),
			Self::Positional => RowId::from(index),
		}
	}

	/// Derive ids for every row of `data`, in order.
	#[must_use]
	pub fn ids_for(&self, data: &[T]) -> Vec<RowId> {
		data.iter()
			.enumerate()
			.map(|(index, row)| self.id_for(row, index))
			.collect()
	}
}

impl<T> Clone for RowIdentity<T> {
	fn clone(&self) -> Self {
		match self {
			Self::Keyed(key) => Self::Keyed(Arc::clone(key)),
			Self::Positional => Self::Positional,
		}
	}
}

impl<T> fmt::Debug for RowIdentity<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Keyed(_) => f.write_str("RowIdentity::Keyed(..)"),
			Self::Positional => f.write_str("RowIdentity::Positional"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_text_counts_as_empty() {
		assert!(CellValue::Text(String::new()).is_empty());
		assert!(CellValue::Empty.is_empty());
		assert!(!CellValue::Number(0.0).is_empty());
	}

	#[test]
	fn text_compares_case_insensitively() {
		let lower = CellValue::from("alpha");
		let upper = CellValue::from("Beta");
		assert_eq!(lower.compare(&upper), Ordering::Less);
	}

	#[test]
	fn numbers_compare_numerically() {
		let small = CellValue::from(9_i64);
		let large = CellValue::from(10_i64);
		assert_eq!(small.compare(&large), Ordering::Less);
	}

	#[test]
	fn mixed_kinds_order_by_rank() {
		assert_eq!(
			CellValue::from(true).compare(&CellValue::from(1_i64)),
			Ordering::Less
		);
		assert_eq!(
			CellValue::from("1").compare(&CellValue::from(2_i64)),
			Ordering::Greater
		);
	}

	#[test]
	fn optional_values_map_to_empty() {
		let value: CellValue = Option::<String>::None.into();
		assert_eq!(value, CellValue::Empty);
		assert_eq!(value.to_string(), "");
	}

	#[test]
	fn positional_identity_uses_index() {
		let identity = RowIdentity::<&str>::positional();
		assert_eq!(identity.ids_for(&["x", "y"]), vec![RowId::from("0"), RowId::from("1")]);
	}

	#[test]
	fn keyed_identity_uses_key_function() {
		let identity = RowIdentity::keyed(|row: &(u64, &str)| row.0);
		assert_eq!(identity.id_for(&(7, "seven"), 0), RowId::from("7"));
	}
}
