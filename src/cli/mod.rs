//! Command-line harness for building and traversing small graphs.

pub mod commands;

pub use commands::{parse_edge, GraphInput};
