//! Intent classifier trait definition.

use super::types::Intent;

/// Intent classifier trait.
///
/// Classification cannot fail: input that matches nothing is
/// [`Intent::General`].
pub trait IntentClassifier: Send + Sync {
    /// Predict the intent for the given input.
    fn predict(&self, input: &str) -> Intent;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
