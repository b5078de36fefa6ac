//! Error types for frontdesk-core operations.
//!
//! Only the directory boundary produces real errors. Everything inside the
//! wizard is converted to in-state messages before it reaches the host.

/// All errors a `VisitorDirectory` implementation can surface.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("directory returned http status {status}")]
    Status { status: u16 },

    #[error("directory transport error: {details}")]
    Transport { details: String },

    #[error("directory response malformed: {source}")]
    Protocol {
        #[from]
        source: directory_protocol::ProtocolError,
    },
}

/// Convenience type alias for Results using DirectoryError.
pub type Result<T> = std::result::Result<T, DirectoryError>;
