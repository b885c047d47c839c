//! Error types for the comment AST.
//!
//! Most misuse of the tree is a precondition violation and panics; the panicking entry
//! points format one of these errors so the message is the same whether the caller
//! used the checked (`try_*`) or the asserting API.

use super::commands::CommandId;
use thiserror::Error;

#[derive(Debug, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum CommentError {
    /// A one-shot resolution was attempted a second time.
    #[error("{node} is already bound")]
    AlreadyBound { node: &'static str },

    /// A template parameter position must have at least one level.
    #[error("template parameter position must not be empty")]
    EmptyPosition,

    /// The sentinel index was passed as a real parameter index.
    #[error("invalid parameter index {index}")]
    InvalidParamIndex { index: usize },

    /// A command ID that the registry does not know.
    #[error("unknown command {id}")]
    UnknownCommand { id: CommandId },

    /// Configuration could not be loaded or deserialized.
    #[error("failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to serialize snapshot as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialize snapshot as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type CommentResult<T> = Result<T, CommentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = CommentError::AlreadyBound {
            node: "ParamCommandComment",
        };
        assert_eq!(err.to_string(), "ParamCommandComment is already bound");
        assert_eq!(
            CommentError::UnknownCommand { id: CommandId(3) }.to_string(),
            "unknown command #3"
        );
    }
}
