//! Error type for filter operations.
use thiserror::Error;

/// Error type for TOC filter operations.
///
/// Normal operation raises nothing: headings without content, missing
/// render containers and documents without headings are absorbed by policy.
/// Serializing the processed document is the one edge that can fail, and
/// that failure is passed through unchanged.
#[derive(Debug, Error)]
pub enum TocError {
  /// Writing the processed document back out failed.
  #[error("failed to serialize document: {0}")]
  Serialize(#[from] std::io::Error),
}
