//! Configuration loading and resolution.
//!
//! `load` layers the default config files, `--config` files, `GRIDLINE__*`
//! environment variables and CLI flags, then validates the result into a
//! [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::{IdentityMode, ResolvedConfig};
