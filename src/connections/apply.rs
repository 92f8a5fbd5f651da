//! Effects of an accepted match.

use smallvec::SmallVec;
use tracing::{debug, info};

use crate::core::Point;
use crate::patterns::{ElementAttribute, MatchSite};

use super::state::{AnalysisContext, AnalysisState};

/// What applying one match changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppliedEffects {
    /// Cutting point marked, for cut patterns.
    pub cut_point: Option<Point>,
    /// Dragon joins as `(survivor, absorbed)` origins, in order.
    pub merges: SmallVec<[(Point, Point); 2]>,
    /// Eye points closed to connections by inhibitor elements.
    pub inhibited: SmallVec<[Point; 4]>,
    /// Eye-space flags that went from unset to set.
    pub flags_changed: usize,
    /// Whether the pattern's action hook ran.
    pub ran_action: bool,
}

impl AppliedEffects {
    /// Check if the match left the analysis state as it was.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.merges.is_empty() && self.flags_changed == 0
    }
}

/// Applies accepted matches to the analysis state.
pub struct EffectApplier;

impl EffectApplier {
    /// Apply one accepted match.
    ///
    /// Runs the action hook, then marks the cutting point for cut patterns,
    /// then makes one pass over the elements joining dragons (connect) and
    /// closing eye space to connections (cut). Unclassified patterns stop
    /// after the action hook.
    pub fn apply(site: &MatchSite<'_>, ctx: &AnalysisContext<'_>, state: &mut AnalysisState) -> AppliedEffects {
        let pattern = site.pattern;
        let class = pattern.class;
        let color = site.color;
        let size = site.board_size();
        let mut effects = AppliedEffects::default();

        if ctx.config.traces_dragons() {
            let kind = if class.is_cut() {
                "cutting"
            } else if class.is_connect() {
                "connecting"
            } else {
                "plain"
            };
            debug!(
                pattern = %pattern.name,
                transform = %site.transform,
                anchor = %site.anchor.vertex(size),
                kind,
                "pattern found"
            );
        }

        if let Some(action) = &pattern.hooks.action {
            action(site, ctx, state);
            effects.ran_action = true;
        }

        if class.is_cut() {
            if let Some(mv) = site.key_move {
                let eyes = &mut state.eyes[color];
                effects.flags_changed += eyes.mark_cut(mv);
                if eyes.is_owned_by(mv, color) && eyes.mark_marginal(mv) {
                    effects.flags_changed += 1;
                }
                effects.cut_point = Some(mv);

                if ctx.config.traces_dragons() {
                    debug!(pattern = %pattern.name, point = %mv.vertex(size), "cutting point");
                }
            }
        } else if !class.is_connect() {
            return effects;
        }

        let suppress = class.suppresses_safety_check();
        let mut first: Option<Point> = None;

        for (element, point) in site.elements() {
            if class.is_connect()
                && element.attribute == ElementAttribute::Friendly
                && ctx.board.get(point) == color
                && (suppress || ctx.oracle.attack_code(point).is_stable())
            {
                if let Some(origin) = state.dragons.origin(point) {
                    match first {
                        None => first = Some(origin),
                        Some(survivor) if survivor != origin => {
                            if ctx.config.announces_joins() {
                                info!(
                                    pattern = %pattern.name,
                                    color = %color,
                                    first = %survivor.vertex(size),
                                    second = %origin.vertex(size),
                                    "pattern joins dragons"
                                );
                            }
                            state.dragons.join(survivor, origin);
                            effects.merges.push((survivor, origin));
                            first = state.dragons.origin(point);
                        }
                        Some(_) => {}
                    }
                }
            }

            if class.is_cut() {
                // Inhibitors lead the element list; the first other element ends them
                if element.attribute != ElementAttribute::Inhibitor {
                    break;
                }
                let eyes = &mut state.eyes[color];
                if eyes.is_owned_by(point, color) {
                    if eyes.inhibit_connection(point) {
                        effects.flags_changed += 1;
                    }
                    effects.inhibited.push(point);

                    if ctx.config.traces_dragons() {
                        debug!(pattern = %pattern.name, point = %point.vertex(size), "inhibiting connection");
                    }
                }
            }
        }

        effects
    }
}
