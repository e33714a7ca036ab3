//! Defines the errors that stop the HTTP server.

use thiserror::Error;

/// Errors raised while starting or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The configured listen address is not a socket address.
    #[error("Invalid server.listen_address '{0}': {1}")]
    InvalidAddress(String, #[source] std::net::AddrParseError),

    /// The listener could not be bound.
    #[error("Failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),

    /// The server loop exited with an I/O error.
    #[error("Server failed: {0}")]
    Serve(#[source] std::io::Error),
}
