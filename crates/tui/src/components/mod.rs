//! Widgets the table screen is assembled from.

/// Column visibility popup.
pub mod column_menu;
/// Selection summary and pagination controls.
pub mod footer;
/// Search row.
pub mod prompt;
/// Header, data, skeleton and empty rows.
pub mod rows;
/// Scrollbar for viewports.
pub mod scrollbar;
/// Table rendering and configuration.
pub mod tables;
pub mod tabs;
pub mod toolbar;

pub use column_menu::render_column_menu;
pub use footer::{FooterButton, FooterContext, render_footer};
pub use prompt::{InputContext, render_input};
pub use rows::DragMarks;
pub use scrollbar::{point_in_rect, render_scrollbar};
pub use tables::{TableAreas, TableSpec, render_table};
pub use tabs::{TabStripAreas, render_tab_strip};
pub use toolbar::{ButtonSpec, ToolbarButton, render_toolbar};
