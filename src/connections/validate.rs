//! Match validation.
//!
//! A raw match is accepted only if every guard passes. Guards run in
//! [`GUARD_ORDER`] and the first failure rejects; guards that do not apply
//! to a pattern's class pass.
//!
//! | Guard                           | Applies to            | Rejects when                                       |
//! |---------------------------------|-----------------------|----------------------------------------------------|
//! | [`KeyMoveSafety`](Guard::KeyMoveSafety)       | cut           | no key move, or the opponent cannot play it safely |
//! | [`Multiplicity`](Guard::Multiplicity)         | connect       | fewer than two dragons among friendly elements     |
//! | [`Constraint`](Guard::Constraint)             | any with hook | the constraint hook returns false                  |
//! | [`Helper`](Guard::Helper)                     | any with hook | the helper hook returns false                      |
//! | [`CuttingStoneSafety`](Guard::CuttingStoneSafety) | cut, not `s` | a cutting stone is capturable and not defended by the key move |
//!
//! The multiplicity guard makes no oracle queries, so connect patterns with
//! nothing to join cost no reading.

use serde::{Deserialize, Serialize};

use crate::patterns::{ElementAttribute, MatchSite};

use super::state::{AnalysisContext, AnalysisState};

/// One acceptance check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Guard {
    KeyMoveSafety,
    Multiplicity,
    Constraint,
    Helper,
    CuttingStoneSafety,
}

/// Evaluation order of the guards.
pub const GUARD_ORDER: [Guard; 5] = [
    Guard::KeyMoveSafety,
    Guard::Multiplicity,
    Guard::Constraint,
    Guard::Helper,
    Guard::CuttingStoneSafety,
];

impl Guard {
    /// Position in [`GUARD_ORDER`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Guard::KeyMoveSafety => 0,
            Guard::Multiplicity => 1,
            Guard::Constraint => 2,
            Guard::Helper => 3,
            Guard::CuttingStoneSafety => 4,
        }
    }

    /// Run this guard. Returns `true` if the match survives it.
    pub fn check(self, site: &MatchSite<'_>, ctx: &AnalysisContext<'_>, state: &AnalysisState) -> bool {
        match self {
            Guard::KeyMoveSafety => key_move_safety(site, ctx),
            Guard::Multiplicity => multiplicity(site, state),
            Guard::Constraint => constraint(site, ctx, state),
            Guard::Helper => helper(site, ctx, state),
            Guard::CuttingStoneSafety => cutting_stone_safety(site, ctx),
        }
    }
}

impl std::fmt::Display for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Guard::KeyMoveSafety => "key move safety",
            Guard::Multiplicity => "multiplicity",
            Guard::Constraint => "constraint",
            Guard::Helper => "helper",
            Guard::CuttingStoneSafety => "cutting stone safety",
        };
        f.write_str(name)
    }
}

/// The opponent must be able to play the cut without losing the stone.
fn key_move_safety(site: &MatchSite<'_>, ctx: &AnalysisContext<'_>) -> bool {
    if !site.pattern.class.is_cut() {
        return true;
    }
    site.key_move
        .is_some_and(|mv| ctx.oracle.is_move_safe(mv, site.opponent()))
}

/// There must be two dragons to join.
fn multiplicity(site: &MatchSite<'_>, state: &AnalysisState) -> bool {
    if !site.pattern.class.is_connect() {
        return true;
    }

    let mut origins = site
        .elements()
        .filter(|(element, _)| element.attribute == ElementAttribute::Friendly)
        .filter_map(|(_, point)| state.dragons.origin(point));

    match origins.next() {
        Some(first) => origins.any(|origin| origin != first),
        None => false,
    }
}

fn constraint(site: &MatchSite<'_>, ctx: &AnalysisContext<'_>, state: &AnalysisState) -> bool {
    site.pattern
        .hooks
        .constraint
        .as_ref()
        .map_or(true, |hook| hook(site, ctx, state))
}

fn helper(site: &MatchSite<'_>, ctx: &AnalysisContext<'_>, state: &AnalysisState) -> bool {
    site.pattern
        .hooks
        .helper
        .as_ref()
        .map_or(true, |hook| hook(site, ctx, state))
}

/// The cutting stones must survive, or be rescued by the cut itself.
fn cutting_stone_safety(site: &MatchSite<'_>, ctx: &AnalysisContext<'_>) -> bool {
    let class = site.pattern.class;
    if !class.is_cut() || class.suppresses_safety_check() {
        return true;
    }

    site.elements()
        .filter(|(element, _)| element.attribute == ElementAttribute::Enemy)
        .all(|(_, stone)| {
            !ctx.oracle.attack_code(stone).is_capturable()
                || site.key_move.is_some_and(|mv| ctx.oracle.does_defend(mv, stone))
        })
}

/// Outcome of validating one match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Accepted,
    Rejected(Guard),
}

impl Verdict {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        self == Verdict::Accepted
    }

    /// The guard that rejected the match, if any.
    #[must_use]
    pub fn rejected_by(self) -> Option<Guard> {
        match self {
            Verdict::Accepted => None,
            Verdict::Rejected(guard) => Some(guard),
        }
    }
}

/// Runs the guard chain.
pub struct MatchValidator;

impl MatchValidator {
    /// Judge one match against the current state.
    pub fn validate(site: &MatchSite<'_>, ctx: &AnalysisContext<'_>, state: &AnalysisState) -> Verdict {
        GUARD_ORDER
            .iter()
            .find(|guard| !guard.check(site, ctx, state))
            .map_or(Verdict::Accepted, |&guard| Verdict::Rejected(guard))
    }
}
