//! Error types for the server binary.

/// Top-level error for the server binary.
///
/// Wraps every failure that can abort startup so `main` can propagate
/// with `?`.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: orgchart_core::ConfigError,
    },

    /// Connecting to or migrating the database failed.
    #[error("storage error: {source}")]
    Storage {
        /// The underlying database error.
        #[from]
        source: orgchart_db::DbError,
    },

    /// The HTTP server failed to bind or stopped with an error.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: orgchart_api::ServerError,
    },
}
