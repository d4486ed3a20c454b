//! Tools for seeing what the lexer and the header reader are doing.  Tracing
//! is line ranged so that a single troublesome directive in a large vendor
//! header can be inspected without drowning in output.

pub mod config;
mod tracer;

pub use config::TracingConfig;
