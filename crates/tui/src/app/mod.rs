//! Interactive table screen.
//!
//! [`App`] wraps a [`gridline_core::DataTable`] with the terminal-only state
//! (cursor, focus, drags in flight, hit regions of the last frame). Input
//! handling lives in `actions`, drawing in `render`.

mod actions;
mod outcome;
mod render;
mod state;

pub(crate) use outcome::Exit;
pub use outcome::TableOutcome;
pub use state::{App, Focus};

#[cfg(test)]
mod tests;
