//! Emitter errors.

/// Errors raised while compiling nodes into JavaScript source.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// A node asked for a function the table does not contain.
    ///
    /// Node construction is expected to validate names up front, so this
    /// signals a mismatch between the node tree and the function table.
    #[error("function \"{name}\" does not exist")]
    FunctionNotFound { name: String },

    /// The node tree nests deeper than `EmitterOptions::max_depth`.
    #[error("emit recursion limit of {limit} exceeded")]
    RecursionLimitExceeded { limit: u32 },

    /// A node implementation refused to compile.
    #[error("{message}")]
    Node { message: String },

    /// The function table JSON could not be parsed.
    #[error("invalid function table: {0}")]
    FunctionTable(#[from] serde_json::Error),
}

impl EmitError {
    /// Build an error for a node that cannot be compiled.
    pub fn node(message: impl Into<String>) -> Self {
        EmitError::Node {
            message: message.into(),
        }
    }
}

/// Result type for emitter operations.
pub type Result<T, E = EmitError> = std::result::Result<T, E>;
