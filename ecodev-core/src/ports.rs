//! Traits describing the classification seam used by the service layer.

use crate::model::Classification;

/// Anything that turns a free-text waste description into a classification.
///
/// Implementations must be total: every input, including the empty string,
/// yields a classification.
pub trait Classifier: Send + Sync {
    /// Classify a free-text description.
    fn classify(&self, description: &str) -> Classification;
}
