use std::path::PathBuf;

use crate::network::NetworkTag;

/// Everything that can go wrong while resolving the local escrow artifacts.
///
/// Each variant carries the path (or field) of the artifact that failed, so
/// the operator can tell at a glance which of the four input files to fix.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("artifact not found: {}", path.display())]
    ArtifactNotFound { path: PathBuf },

    #[error("malformed artifact {}: {}", path.display(), reason)]
    ArtifactMalformed { path: PathBuf, reason: String },

    #[error("network mismatch in {}: expected {}, address is tagged {}", path.display(), expected, found)]
    NetworkMismatch {
        path: PathBuf,
        expected: NetworkTag,
        found: NetworkTag,
    },

    #[error("chain query service unavailable: {reason}")]
    ServiceUnavailable { reason: String },

    #[error("chain query service rejected the project credential")]
    AuthRejected,
}

impl ResolveError {
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ResolveError::ArtifactMalformed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ResolveError>;
