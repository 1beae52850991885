//! DOM operation errors

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
///
/// Precondition violations are reported before the tree is touched, so an
/// operation that returns one of these leaves the tree as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node not found
    #[error("node not found")]
    NotFound,
    /// Node is not a child of the parent it was used with
    #[error("node is not a child of this parent")]
    NotAChild,
    /// Insertion would produce an invalid tree (cycle, document as child)
    #[error("hierarchy request error")]
    HierarchyRequest,
    /// Node belongs to another tree
    #[error("node belongs to a different document tree")]
    WrongDocument,
    /// Node kind not accepted by the operation
    #[error("invalid node type")]
    InvalidNodeType,
    /// Operation needs a parent node
    #[error("operation called on an unattached node")]
    Detached,
    /// Selector failed to compile
    #[error("invalid selector: {0}")]
    InvalidSelector(String),
    /// Input could not be parsed
    #[error("parse error: {0}")]
    Parse(String),
    /// Node could not be serialized
    #[error("serialization error: {0}")]
    Serialization(String),
}
