//! Error types for the sitedocs core library.

/// Errors that can occur in sitedocs core operations.
///
/// Rejected user input (empty or duplicate project names, unknown ids) is not
/// an error: registries absorb those as no-ops. These variants cover the
/// infrastructure underneath the registries.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Backing store failure
    #[error("Store error: {message}")]
    Store {
        /// What the store could not do
        message: String,
    },

    /// A category string outside the fixed set
    #[error("Unknown document category: {value}")]
    InvalidCategory {
        /// The rejected value
        value: String,
    },
}

/// Convenience `Result` type alias for sitedocs core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new store error.
    pub fn store<S: Into<String>>(message: S) -> Self {
        Error::Store {
            message: message.into(),
        }
    }

    /// Creates a new invalid-category error.
    pub fn invalid_category<S: Into<String>>(value: S) -> Self {
        Error::InvalidCategory {
            value: value.into(),
        }
    }

    /// Returns whether this error was caused by client input rather than
    /// server-side state.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidCategory { .. })
    }
}
