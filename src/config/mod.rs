//! Configuration loading, merging, and the resolved run settings.
mod apply;
mod loader;
mod run;
pub mod types;


pub use apply::apply_config;
pub use loader::load_config;
pub use run::RunConfig;

#[cfg(test)]
pub(crate) use run::default_grace;

#[cfg(test)]
pub(crate) use loader::load_config_file;
