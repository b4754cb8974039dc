//! Data tables over JSON records, with a terminal front-end.
//!
//! The engine lives in [`engine`] (`gridline-core`) and the ratatui renderer
//! in [`tui`] (`gridline-tui`). This crate adds what the `gridline` binary
//! needs on top: schemaless [`JsonRecord`]s, column [`presets`] for the travel
//! back-office exports, application directories and file logging.

pub mod app_dirs;
pub mod logging;
pub mod presets;
pub mod records;

pub use gridline_core as engine;
pub use gridline_tui as tui;

pub use gridline_core::{
	ColumnDef, DataTable, Features, RowId, RowIdentity, TableError, TableOptions, TableState,
};
pub use gridline_tui::{App, TableOutcome, run};
pub use presets::{CellFormat, Preset, PresetColumn, PresetLayout};
pub use records::{JsonRecord, RecordError, parse_records, read_records};
