use thiserror::Error;

use crate::column::ColumnId;

/// Errors raised while configuring or driving a [`DataTable`](crate::DataTable).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
	/// A page size of zero was requested.
	#[error("page size {size} is invalid: it must be greater than zero")]
	InvalidPageSize { size: usize },

	/// A page size outside the table's page size options was requested.
	#[error("page size {size} is not one of the configured page size options")]
	UnsupportedPageSize { size: usize },

	/// The list of selectable page sizes was empty.
	#[error("page size options must contain at least one entry")]
	EmptyPageSizeOptions,

	/// An operation referenced a column that the table does not know about.
	#[error("column '{id}' is not part of this table")]
	UnknownColumn { id: ColumnId },

	/// An operation referenced a tab value that was never registered.
	#[error("tab '{value}' is not registered")]
	UnknownTab { value: String },

	/// A tab set was built from an empty list.
	#[error("a tab set needs at least one tab")]
	NoTabs,

	/// Two tabs were registered with the same value.
	#[error("tab value '{value}' is registered more than once")]
	DuplicateTab { value: String },
}

impl TableError {
	pub fn unknown_column(id: &ColumnId) -> Self {
		Self::UnknownColumn { id: id.clone() }
	}
}
