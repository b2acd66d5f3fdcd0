//! Configuration loading and resolution.
//!
//! Values are layered from config files, `COVERS__SECTION__KEY` environment
//! variables and CLI flags, then validated. `load` is the entry point and
//! returns the [`ResolvedConfig`] the workflow is built from.

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;

#[cfg(test)]
pub(crate) use resolved::sample_config;
