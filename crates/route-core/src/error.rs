//! Error Types

use thiserror::Error;

/// Result type alias for routing operations
pub type Result<T> = std::result::Result<T, RouteError>;

/// Routing error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Requested path matches no entry
    #[error("No route matches '{0}'")]
    NoMatch(String),

    /// Navigation by a name the table does not declare
    #[error("No route named '{0}'")]
    UnknownName(String),

    /// Lazy view could not be loaded for a route
    #[error("Failed to load route '{route}': {reason}")]
    LoadFailure { route: String, reason: String },

    /// Chunk fetch failed inside a loader
    #[error("Failed to fetch chunk '{chunk}': {reason}")]
    Fetch { chunk: String, reason: String },

    /// Route path does not start with '/'
    #[error("Invalid route path '{0}': must start with '/'")]
    InvalidPath(String),

    /// Two entries share a path
    #[error("Duplicate route path: {0}")]
    DuplicatePath(String),

    /// Two entries share a name
    #[error("Duplicate route name: {0}")]
    DuplicateName(String),
}

impl RouteError {
    /// Whether asking again may succeed (network and chunk failures)
    pub fn is_retryable(&self) -> bool {
        matches!(self, RouteError::LoadFailure { .. } | RouteError::Fetch { .. })
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            RouteError::NoMatch(path) => format!("Nothing lives at '{path}'."),
            RouteError::UnknownName(name) => format!("The page '{name}' does not exist."),
            RouteError::LoadFailure { .. } | RouteError::Fetch { .. } => {
                "This page could not be loaded. Check your connection and try again.".into()
            }
            RouteError::InvalidPath(_)
            | RouteError::DuplicatePath(_)
            | RouteError::DuplicateName(_) => "The app's routes are misconfigured.".into(),
        }
    }
}
