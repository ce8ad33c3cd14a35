#![forbid(unsafe_code)]

//! Errors raised while acquiring a graph snapshot.
//!
//! Navigation itself never fails with a `Result`: once a snapshot is held,
//! every transition is total, and contract breaches are panics. These errors
//! only surface before a session starts.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for snapshot acquisition.
pub type GraphResult<T> = Result<T, GraphError>;

/// Snapshot acquisition failures.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The snapshot holds no nodes and no topics.
    #[error("no nodes and topics found; launch your stack before running rosgraph-tui")]
    EmptySnapshot,

    /// The snapshot source could not be queried at all.
    #[error("failed to read graph snapshot from {source_name}: {reason}")]
    SnapshotUnavailable {
        /// Human-readable name of the source (a path or `"demo"`).
        source_name: String,
        /// Why the source failed.
        reason: String,
    },

    /// The source was readable but did not contain a valid snapshot document.
    #[error("malformed graph snapshot in {}: {reason}", .path.display())]
    Malformed {
        /// File that failed to decode.
        path: PathBuf,
        /// Decoder diagnostic.
        reason: String,
    },
}

impl GraphError {
    /// Build a [`GraphError::SnapshotUnavailable`] from an I/O failure.
    pub fn unavailable(source_name: impl Into<String>, err: &io::Error) -> Self {
        Self::SnapshotUnavailable {
            source_name: source_name.into(),
            reason: err.to_string(),
        }
    }

    /// True when the snapshot could not be obtained (as opposed to being empty).
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::SnapshotUnavailable { .. } | Self::Malformed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_mentions_stack() {
        let msg = GraphError::EmptySnapshot.to_string();
        assert!(msg.contains("no nodes and topics found"));
    }

    #[test]
    fn unavailable_wraps_io_error() {
        let io = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err = GraphError::unavailable("/tmp/graph.json", &io);
        assert!(err.is_unavailable());
        assert_eq!(
            err.to_string(),
            "failed to read graph snapshot from /tmp/graph.json: gone"
        );
    }

    #[test]
    fn malformed_counts_as_unavailable() {
        let err = GraphError::Malformed {
            path: PathBuf::from("g.json"),
            reason: "expected value".into(),
        };
        assert!(err.is_unavailable());
        assert!(err.to_string().starts_with("malformed graph snapshot in g.json"));
        assert!(!GraphError::EmptySnapshot.is_unavailable());
    }
}
