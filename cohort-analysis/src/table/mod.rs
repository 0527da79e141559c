//! Table subsystem — CSV loading and deterministic subsampling.
//!
//! The loader is the entry point to the pipeline: it reads the source file
//! into a fully-materialized `Table` before any classification happens, so
//! no I/O occurs inside the core scan.

pub mod loader;
pub mod sampler;

pub use loader::load_csv;
pub use sampler::sample;
