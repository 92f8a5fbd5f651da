//! Cut and connection passes.
//!
//! [`ConnectionResolver`] drives the matcher once per pass and sends each
//! admitted match through validation and, if accepted, effect application.
//! Run [`find_cuts`](ConnectionResolver::find_cuts) before
//! [`find_connections`](ConnectionResolver::find_connections) in each cycle
//! so later stages see cutting points when reading eye space.

use serde::{Deserialize, Serialize};

use crate::matcher::{AnchorMode, PatternMatcher};
use crate::patterns::{MatchSite, PatternClass, PatternDatabase};

use super::apply::{AppliedEffects, EffectApplier};
use super::state::{AnalysisContext, AnalysisState};
use super::validate::{Guard, MatchValidator, Verdict};

/// Which patterns a pass handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pass {
    /// Cut patterns only.
    Cuts,
    /// Everything that is not a cut pattern.
    Connections,
}

impl Pass {
    #[must_use]
    pub fn admits(self, class: PatternClass) -> bool {
        match self {
            Pass::Cuts => class.is_cut(),
            Pass::Connections => !class.is_cut(),
        }
    }
}

/// Result of processing one match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    Rejected(Guard),
    Applied(AppliedEffects),
}

/// Counters for one pass. Informational only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassStats {
    /// Matches admitted to the pass.
    pub matches: usize,
    pub accepted: usize,
    /// Rejections, indexed like [`GUARD_ORDER`](super::GUARD_ORDER).
    pub rejections: [usize; 5],
    pub merges: usize,
    pub cut_points: usize,
    /// Eye-space flags newly set.
    pub flags_changed: usize,
}

impl PassStats {
    /// Rejections by one guard.
    #[must_use]
    pub fn rejected_by(&self, guard: Guard) -> usize {
        self.rejections[guard.index()]
    }

    /// Total rejections.
    #[must_use]
    pub fn rejected(&self) -> usize {
        self.rejections.iter().sum()
    }

    /// Check if the pass changed dragons or eye space.
    #[must_use]
    pub fn changed_state(&self) -> bool {
        self.merges > 0 || self.flags_changed > 0
    }

    fn record(&mut self, outcome: &MatchOutcome) {
        self.matches += 1;
        match outcome {
            MatchOutcome::Rejected(guard) => self.rejections[guard.index()] += 1,
            MatchOutcome::Applied(effects) => {
                self.accepted += 1;
                self.merges += effects.merges.len();
                self.cut_points += usize::from(effects.cut_point.is_some());
                self.flags_changed += effects.flags_changed;
            }
        }
    }
}

/// Stats for a full cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleStats {
    pub cuts: PassStats,
    pub connections: PassStats,
}

/// Finds cutting points and connections over one board.
///
/// ## Example
///
/// ```
/// use go_connections::connections::{AnalysisContext, AnalysisState, ConnectionResolver};
/// use go_connections::core::{AnalysisConfig, Board, Point};
/// use go_connections::matcher::ScanMatcher;
/// use go_connections::patterns::PatternDatabase;
/// use go_connections::tactics::StaticOracle;
///
/// let board = Board::from_diagram("
///     . . . . .
///     . O . O .
///     . . . . .
///     . . . . .
///     . . . . .
/// ").unwrap();
/// let db = PatternDatabase::standard().unwrap();
/// let oracle = StaticOracle::new();
/// let config = AnalysisConfig::default();
/// let matcher = ScanMatcher::new();
///
/// let resolver = ConnectionResolver::new(&db, &matcher, AnalysisContext::new(&board, &oracle, &config));
/// let mut state = AnalysisState::new(&board);
///
/// resolver.find_cuts(&mut state);
/// let stats = resolver.find_connections(&mut state);
///
/// assert_eq!(stats.merges, 1);
/// assert!(state.dragons.same_dragon(Point::new(1, 1), Point::new(1, 3)));
/// ```
pub struct ConnectionResolver<'a> {
    database: &'a PatternDatabase,
    matcher: &'a dyn PatternMatcher,
    context: AnalysisContext<'a>,
}

impl<'a> ConnectionResolver<'a> {
    pub fn new(database: &'a PatternDatabase, matcher: &'a dyn PatternMatcher, context: AnalysisContext<'a>) -> Self {
        Self {
            database,
            matcher,
            context,
        }
    }

    #[must_use]
    pub fn database(&self) -> &'a PatternDatabase {
        self.database
    }

    #[must_use]
    pub fn context(&self) -> &AnalysisContext<'a> {
        &self.context
    }

    /// Mark cutting points and close eye space to connections through them.
    pub fn find_cuts(&self, state: &mut AnalysisState) -> PassStats {
        self.run_pass(Pass::Cuts, state)
    }

    /// Join dragons through connection patterns, and run unclassified
    /// patterns' actions.
    pub fn find_connections(&self, state: &mut AnalysisState) -> PassStats {
        self.run_pass(Pass::Connections, state)
    }

    /// Both passes, cuts first.
    pub fn resolve(&self, state: &mut AnalysisState) -> CycleStats {
        let cuts = self.find_cuts(state);
        let connections = self.find_connections(state);
        CycleStats { cuts, connections }
    }

    /// Validate one match and apply it if accepted.
    pub fn process_match(&self, site: &MatchSite<'_>, state: &mut AnalysisState) -> MatchOutcome {
        match MatchValidator::validate(site, &self.context, state) {
            Verdict::Rejected(guard) => MatchOutcome::Rejected(guard),
            Verdict::Accepted => MatchOutcome::Applied(EffectApplier::apply(site, &self.context, state)),
        }
    }

    fn run_pass(&self, pass: Pass, state: &mut AnalysisState) -> PassStats {
        let board = self.context.board;
        let size = board.size();
        let mut stats = PassStats::default();

        self.matcher
            .match_patterns(board, self.database, AnchorMode::AnchorColor, &mut |raw| {
                if !pass.admits(raw.pattern.class) {
                    return;
                }
                let outcome = self.process_match(&raw.site(size), state);
                stats.record(&outcome);
            });

        stats
    }
}
