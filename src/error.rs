//! Error types for the tracker core.
//!
//! Most of the conditions spec.md calls out explicitly are *not* errors (a
//! configuration miss falls back to a default, an uncalibrated tracker
//! simply drops events) — `TrackerError` only covers what is genuinely
//! exceptional, mirroring the host app's single-enum `thiserror` pattern.

use thiserror::Error;

/// Errors surfaced by the tracker core.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// The worker's blocking queue had a timeout configured and it
    /// elapsed with no event available. Fatal: the worker loop exits.
    #[error("worker queue timed out waiting for the next event")]
    QueueTimeout,

    /// A wire-format record failed to decode (magic mismatch, truncated
    /// frame, etc). Non-fatal; `decode` itself never returns a `Result`,
    /// it returns an `UNKNOWN`-kind event per spec.md §4.2. This variant
    /// exists for callers (the streaming decoder, the replay binary) that
    /// want to log or report the reason.
    #[error("failed to decode event record: {reason}")]
    Decode {
        /// Human-readable description of why decoding failed.
        reason: String,
    },
}

/// Convenience alias for fallible tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_timeout_display() {
        let err = TrackerError::QueueTimeout;
        assert_eq!(
            err.to_string(),
            "worker queue timed out waiting for the next event"
        );
    }

    #[test]
    fn decode_error_display_includes_reason() {
        let err = TrackerError::Decode {
            reason: "magic mismatch".to_string(),
        };
        assert!(err.to_string().contains("magic mismatch"));
    }
}
