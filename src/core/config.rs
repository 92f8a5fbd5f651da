//! Analysis configuration.

use serde::{Deserialize, Serialize};

/// Diagnostic settings for one analysis cycle.
///
/// Only controls what is traced; results never depend on it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Announce every dragon join.
    pub verbose: bool,

    /// Trace pattern matches, cutting points and inhibited points.
    /// Implies the join announcements of `verbose`.
    pub debug_dragons: bool,
}

impl AnalysisConfig {
    /// Set verbose join announcements.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set dragon tracing.
    #[must_use]
    pub fn with_debug_dragons(mut self, debug: bool) -> Self {
        self.debug_dragons = debug;
        self
    }

    /// Should dragon joins be announced?
    #[must_use]
    pub fn announces_joins(&self) -> bool {
        self.verbose || self.debug_dragons
    }

    /// Should per-match details be traced?
    #[must_use]
    pub fn traces_dragons(&self) -> bool {
        self.debug_dragons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert!(!config.announces_joins());
        assert!(!config.traces_dragons());
    }

    #[test]
    fn test_debug_implies_join_announcements() {
        let config = AnalysisConfig::default().with_debug_dragons(true);
        assert!(config.announces_joins());
        assert!(config.traces_dragons());

        let verbose = AnalysisConfig::default().with_verbose(true);
        assert!(verbose.announces_joins());
        assert!(!verbose.traces_dragons());
    }

    #[test]
    fn test_serialization() {
        let config = AnalysisConfig::default().with_verbose(true);
        let json = serde_json::to_string(&config).unwrap();
        let back: AnalysisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
