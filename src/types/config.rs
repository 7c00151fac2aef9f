//! Construction-time graph configuration.

use serde::{Deserialize, Serialize};

/// Whether edges are one-directional or mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Directedness {
    /// Edges go from source to destination only.
    Directed,
    /// Every edge is added and removed in both directions.
    #[default]
    Undirected,
}

impl Directedness {
    /// Convert a `directed` flag into a `Directedness`.
    pub fn from_flag(directed: bool) -> Self {
        if directed {
            Self::Directed
        } else {
            Self::Undirected
        }
    }

    /// True for `Directed`.
    pub fn is_directed(&self) -> bool {
        matches!(self, Self::Directed)
    }

    /// Return a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        }
    }
}

impl std::fmt::Display for Directedness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Graph configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Edges are one-directional when true.
    #[serde(default)]
    pub directed: bool,
}

impl GraphConfig {
    /// The directedness this configuration selects.
    pub fn directedness(&self) -> Directedness {
        Directedness::from_flag(self.directed)
    }
}
