//! Error types for graph mutations and lookups.

use std::{collections::TryReserveError, fmt::Display};

use thiserror::Error;

use crate::{Edge, Node};

/// How a caller referred to a person that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VertexRef {
    /// A position that is not in `0..n`
    Position(Node),
    /// A name that no person carries
    Name(String),
}

impl Display for VertexRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VertexRef::Position(u) => write!(f, "position {u}"),
            VertexRef::Name(name) => write!(f, "name '{name}'"),
        }
    }
}

/// Failures reported by the graph engine.
///
/// Every variant except [`GraphError::OutOfMemory`] is recoverable: the graph is left exactly as
/// it was before the failing call.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The graph already holds the maximum number of people.
    #[error("capacity of {capacity} people reached")]
    CapacityExceeded { capacity: usize },

    /// A person with this exact name already exists.
    #[error("a person named '{0}' already exists")]
    DuplicateName(String),

    /// A position out of range or an unknown name.
    #[error("no person at {0}")]
    InvalidVertex(VertexRef),

    /// A friendship of a person with themselves.
    #[error("person at position {0} cannot befriend themselves")]
    SelfLoop(Node),

    /// The friendship is already present.
    #[error("friendship {0} already exists")]
    EdgeExists(Edge),

    /// The friendship is not present.
    #[error("friendship {0} does not exist")]
    EdgeNotFound(Edge),

    /// Memory for the mutation could not be reserved.
    #[error("out of memory: {0}")]
    OutOfMemory(String),
}

impl From<TryReserveError> for GraphError {
    fn from(value: TryReserveError) -> Self {
        GraphError::OutOfMemory(value.to_string())
    }
}

impl GraphError {
    /// Shorthand for an out-of-range position
    pub fn invalid_position(u: Node) -> Self {
        GraphError::InvalidVertex(VertexRef::Position(u))
    }

    /// Shorthand for an unknown name
    pub fn unknown_name<S: Into<String>>(name: S) -> Self {
        GraphError::InvalidVertex(VertexRef::Name(name.into()))
    }

    /// Returns *false* only for failures after which the caller should not keep going
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GraphError::OutOfMemory(_))
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GraphError::CapacityExceeded { capacity: 20 };
        assert_eq!(err.to_string(), "capacity of 20 people reached");

        let err = GraphError::unknown_name("Mallory");
        assert_eq!(err.to_string(), "no person at name 'Mallory'");

        let err = GraphError::invalid_position(7);
        assert_eq!(err.to_string(), "no person at position 7");

        let err = GraphError::EdgeExists(Edge(0, 1));
        assert_eq!(err.to_string(), "friendship (0,1) already exists");
    }

    #[test]
    fn test_error_from_try_reserve() {
        let reserve_err = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        let err: GraphError = reserve_err.into();
        assert!(matches!(err, GraphError::OutOfMemory(_)));
        assert!(!err.is_recoverable());
        assert!(GraphError::SelfLoop(0).is_recoverable());
    }
}
