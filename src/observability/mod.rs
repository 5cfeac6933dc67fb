//! Tracing support for smoke runs

pub mod correlation;

pub use correlation::RunContext;
