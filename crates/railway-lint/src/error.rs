//! Errors at the fallible edges of the engine
//!
//! Classification never fails; only reading external input does.

use thiserror::Error;

use crate::syntax::NodeId;
use crate::types::TypeId;

/// Errors raised while loading a serialized [`Program`](crate::Program)
#[derive(Debug, Error)]
pub enum ProgramError {
    /// Malformed JSON or a document that does not match the interchange shape
    #[error("Invalid program JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A node references a node id outside the arena
    #[error("Node {node} references missing node {child}")]
    MissingNode {
        /// Referencing node
        node: NodeId,
        /// Id that is out of range
        child: NodeId,
    },

    /// A child appears after its parent in the arena
    #[error("Node {node} references {child}, which must precede it")]
    ChildOrder {
        /// Parent node
        node: NodeId,
        /// Child that appears too late
        child: NodeId,
    },

    /// The root id is outside the arena
    #[error("Root node {0} is out of range")]
    MissingRoot(NodeId),

    /// A node or type refers to a type id outside the table
    #[error("{owner} references missing type {ty}")]
    MissingType {
        /// Description of the referencing node or type
        owner: String,
        /// Id that is out of range
        ty: TypeId,
    },

    /// A well-known primitive is not stored at its fixed id
    #[error("Primitive type table mismatch at {0}")]
    PrimitiveMismatch(TypeId),
}

/// Errors raised while parsing lint configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid lint configuration: {0}")]
    Toml(#[from] toml::de::Error),
}
