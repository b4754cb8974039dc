//! Terminal renderer for `gridline` data tables.
//!
//! Wraps a [`gridline_core::DataTable`] in a ratatui screen: tab strip and
//! toolbar, search row, the table itself with skeleton and empty states, and
//! a footer with selection summary and pagination. Rows can be reordered with
//! the mouse (drag the `⠿` handle) or from the keyboard (`m`, arrows, Enter).

mod app;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;

#[cfg(test)]
mod test_support;

pub use app::{App, Focus, TableOutcome};
pub use config::UiLabels;
pub use input::QueryInput;
pub use runtime::run;
pub use style::{StyleConfig, Theme, builtin_themes, by_name, default_theme, names};
