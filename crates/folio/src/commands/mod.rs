//! CLI command implementations.

mod build;
pub(crate) mod routes;

pub(crate) use build::BuildArgs;
