//! Observability for shrinkage.
//! `tracing` crate with `EnvFilter`, output on stderr.

pub mod setup;

pub use setup::init_tracing;
