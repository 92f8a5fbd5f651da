//! Per-pattern custom hooks.
//!
//! A pattern may carry up to three hooks, all optional:
//! - `constraint`: pure predicate checked before tactical safety
//! - `helper`: second pure predicate, checked after the constraint
//! - `action`: runs once when the match is accepted, before the default effects
//!
//! Hooks live behind `Arc` so patterns stay cheap to clone and a database can
//! be shared between threads.

use std::sync::Arc;

use crate::connections::{AnalysisContext, AnalysisState};

use super::site::MatchSite;

/// Predicate over a match. Returning `false` rejects the match.
pub type MatchPredicate =
    Arc<dyn Fn(&MatchSite<'_>, &AnalysisContext<'_>, &AnalysisState) -> bool + Send + Sync>;

/// Custom effect of an accepted match.
pub type MatchAction =
    Arc<dyn Fn(&MatchSite<'_>, &AnalysisContext<'_>, &mut AnalysisState) + Send + Sync>;

/// Optional hook slots of a pattern.
#[derive(Clone, Default)]
pub struct PatternHooks {
    pub constraint: Option<MatchPredicate>,
    pub helper: Option<MatchPredicate>,
    pub action: Option<MatchAction>,
}

impl PatternHooks {
    /// Check if no hook is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraint.is_none() && self.helper.is_none() && self.action.is_none()
    }
}

impl std::fmt::Debug for PatternHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternHooks")
            .field("constraint", &self.constraint.is_some())
            .field("helper", &self.helper.is_some())
            .field("action", &self.action.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{Pattern, PatternClass};

    #[test]
    fn test_default_hooks_are_empty() {
        let hooks = PatternHooks::default();
        assert!(hooks.is_empty());
        assert_eq!(
            format!("{:?}", hooks),
            "PatternHooks { constraint: false, helper: false, action: false }"
        );
    }

    #[test]
    fn test_builder_fills_slots() {
        let pattern = Pattern::new("hooked", PatternClass::NONE)
            .with_helper(|_, _, _| true)
            .with_action(|_, _, _| {});

        assert!(!pattern.hooks.is_empty());
        assert!(pattern.hooks.constraint.is_none());
        assert!(pattern.hooks.helper.is_some());
        assert!(pattern.hooks.action.is_some());
    }
}
