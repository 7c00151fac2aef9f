//! Shared types for the lockgraph library.

pub mod config;
pub mod error;

use std::fmt::Debug;
use std::hash::Hash;

pub use config::{Directedness, GraphConfig};
pub use error::{GraphError, GraphResult};

/// Anything usable as a vertex identifier.
///
/// Identifiers are map keys, so they must be hashable and comparable. `Debug`
/// is needed so errors and the adjacency dump can name them.
pub trait Vertex: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Vertex for T {}
