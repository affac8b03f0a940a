//! Search policy types.

use crate::error::SearchError;

/// Search budget configuration.
///
/// The default policy is unbounded: the search runs until the goal is
/// finalized or the frontier is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    /// Hard cap on finalized nodes. `None` means no cap.
    pub max_finalized: Option<u64>,
}

impl SearchPolicy {
    /// Policy with a finalization budget.
    #[must_use]
    pub fn with_max_finalized(max_finalized: u64) -> Self {
        Self {
            max_finalized: Some(max_finalized),
        }
    }

    /// Validate the policy before a search starts.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for a zero budget, which could
    /// never finalize even the start node.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_finalized == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_finalized must be at least 1".into(),
            });
        }
        Ok(())
    }
}
