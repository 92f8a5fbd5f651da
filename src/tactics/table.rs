//! Table-driven and instrumented oracles.

use std::cell::Cell;
use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::{Color, Point};

use super::oracle::{AttackCode, TacticalOracle};

/// Oracle answering from precomputed tables.
///
/// Anything not listed is "quiet": moves are safe, stones are not
/// capturable, no move defends anything.
///
/// ## Example
///
/// ```
/// use go_connections::core::{Color, Point};
/// use go_connections::tactics::{AttackCode, StaticOracle, TacticalOracle};
///
/// let weak = Point::new(2, 2);
/// let rescue = Point::new(2, 3);
/// let oracle = StaticOracle::new()
///     .with_attack(weak, AttackCode::Win)
///     .with_defense(rescue, weak)
///     .with_unsafe_move(Point::new(0, 0), Color::Black);
///
/// assert!(oracle.attack_code(weak).is_capturable());
/// assert!(oracle.does_defend(rescue, weak));
/// assert!(!oracle.is_move_safe(Point::new(0, 0), Color::Black));
/// assert!(oracle.is_move_safe(Point::new(0, 0), Color::White));
/// ```
///
/// Tables serialize as lists of entries, since their keys are not strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticOracle {
    #[serde(with = "attack_entries")]
    attacks: FxHashMap<Point, AttackCode>,
    #[serde(with = "set_entries")]
    unsafe_moves: FxHashSet<(Point, Color)>,
    #[serde(with = "set_entries")]
    defenses: FxHashSet<(Point, Point)>,
}

fn serialize_entries<'a, S, C>(table: &'a C, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    &'a C: IntoIterator,
    <&'a C as IntoIterator>::Item: Serialize,
{
    serializer.collect_seq(table)
}

mod attack_entries {
    use super::*;

    pub fn serialize<S: Serializer>(table: &FxHashMap<Point, AttackCode>, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_entries(table, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<FxHashMap<Point, AttackCode>, D::Error> {
        let entries = Vec::<(Point, AttackCode)>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

mod set_entries {
    use super::*;

    pub fn serialize<S, T>(table: &FxHashSet<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        serialize_entries(table, serializer)
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<FxHashSet<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Eq + Hash,
    {
        let entries = Vec::<T>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

impl StaticOracle {
    /// Create an oracle with empty tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the attack result for a stone (builder pattern).
    #[must_use]
    pub fn with_attack(mut self, point: Point, code: AttackCode) -> Self {
        self.set_attack(point, code);
        self
    }

    /// Record that `color` cannot safely play at `point` (builder pattern).
    #[must_use]
    pub fn with_unsafe_move(mut self, point: Point, color: Color) -> Self {
        self.unsafe_moves.insert((point, color));
        self
    }

    /// Record that `mv` defends the stone at `target` (builder pattern).
    #[must_use]
    pub fn with_defense(mut self, mv: Point, target: Point) -> Self {
        self.defenses.insert((mv, target));
        self
    }

    /// Record the attack result for every stone of a worm.
    pub fn set_attack_on(&mut self, stones: impl IntoIterator<Item = Point>, code: AttackCode) {
        for stone in stones {
            self.set_attack(stone, code);
        }
    }

    /// Record the attack result for a stone.
    pub fn set_attack(&mut self, point: Point, code: AttackCode) {
        if code.is_stable() {
            self.attacks.remove(&point);
        } else {
            self.attacks.insert(point, code);
        }
    }

    /// Mark a move as safe or unsafe for `color`.
    pub fn set_move_safe(&mut self, point: Point, color: Color, safe: bool) {
        if safe {
            self.unsafe_moves.remove(&(point, color));
        } else {
            self.unsafe_moves.insert((point, color));
        }
    }
}

impl TacticalOracle for StaticOracle {
    fn is_move_safe(&self, point: Point, color: Color) -> bool {
        !self.unsafe_moves.contains(&(point, color))
    }

    fn does_defend(&self, mv: Point, target: Point) -> bool {
        self.defenses.contains(&(mv, target))
    }

    fn attack_code(&self, point: Point) -> AttackCode {
        self.attacks.get(&point).copied().unwrap_or_default()
    }
}

/// Per-method call counts of a [`CountingOracle`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleCalls {
    pub safety: usize,
    pub defense: usize,
    pub attack: usize,
}

impl OracleCalls {
    /// Calls across all methods.
    #[must_use]
    pub fn total(&self) -> usize {
        self.safety + self.defense + self.attack
    }
}

/// Wrapper counting how often each oracle method is consulted.
///
/// Reading is the expensive part of connection analysis; this shows how much
/// a pass asks for.
#[derive(Debug, Default)]
pub struct CountingOracle<O> {
    inner: O,
    safety: Cell<usize>,
    defense: Cell<usize>,
    attack: Cell<usize>,
}

impl<O: TacticalOracle> CountingOracle<O> {
    /// Wrap an oracle.
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            safety: Cell::new(0),
            defense: Cell::new(0),
            attack: Cell::new(0),
        }
    }

    /// Calls so far.
    #[must_use]
    pub fn calls(&self) -> OracleCalls {
        OracleCalls {
            safety: self.safety.get(),
            defense: self.defense.get(),
            attack: self.attack.get(),
        }
    }

    /// Zero the counters.
    pub fn reset(&self) {
        self.safety.set(0);
        self.defense.set(0);
        self.attack.set(0);
    }

    /// The wrapped oracle.
    pub fn inner(&self) -> &O {
        &self.inner
    }
}

impl<O: TacticalOracle> TacticalOracle for CountingOracle<O> {
    fn is_move_safe(&self, point: Point, color: Color) -> bool {
        self.safety.set(self.safety.get() + 1);
        self.inner.is_move_safe(point, color)
    }

    fn does_defend(&self, mv: Point, target: Point) -> bool {
        self.defense.set(self.defense.get() + 1);
        self.inner.does_defend(mv, target)
    }

    fn attack_code(&self, point: Point) -> AttackCode {
        self.attack.set(self.attack.get() + 1);
        self.inner.attack_code(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_defaults() {
        let oracle = StaticOracle::new();
        let p = Point::new(3, 3);

        assert!(oracle.is_move_safe(p, Color::Black));
        assert!(!oracle.does_defend(p, Point::new(3, 4)));
        assert_eq!(oracle.attack_code(p), AttackCode::None);
    }

    #[test]
    fn test_set_attack_on_worm() {
        let mut oracle = StaticOracle::new();
        let worm = [Point::new(0, 0), Point::new(0, 1)];

        oracle.set_attack_on(worm, AttackCode::KoA);
        assert_eq!(oracle.attack_code(Point::new(0, 1)), AttackCode::KoA);

        oracle.set_attack_on(worm, AttackCode::None);
        assert_eq!(oracle.attack_code(Point::new(0, 0)), AttackCode::None);
    }

    #[test]
    fn test_toggle_move_safety() {
        let mut oracle = StaticOracle::new();
        let p = Point::new(1, 1);

        oracle.set_move_safe(p, Color::White, false);
        assert!(!oracle.is_move_safe(p, Color::White));
        oracle.set_move_safe(p, Color::White, true);
        assert!(oracle.is_move_safe(p, Color::White));
    }

    #[test]
    fn test_counting_oracle() {
        let oracle = CountingOracle::new(StaticOracle::new());
        let p = Point::new(0, 0);

        oracle.is_move_safe(p, Color::Black);
        oracle.is_move_safe(p, Color::White);
        oracle.attack_code(p);

        assert_eq!(oracle.calls(), OracleCalls { safety: 2, defense: 0, attack: 1 });
        assert_eq!(oracle.calls().total(), 3);

        oracle.reset();
        assert_eq!(oracle.calls().total(), 0);
    }

    #[test]
    fn test_static_oracle_json() {
        let oracle = StaticOracle::new()
            .with_attack(Point::new(1, 1), AttackCode::Win)
            .with_attack(Point::new(4, 2), AttackCode::KoB)
            .with_unsafe_move(Point::new(0, 3), Color::Black)
            .with_defense(Point::new(1, 2), Point::new(1, 1));

        let json = serde_json::to_string(&oracle).unwrap();
        let restored: StaticOracle = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, oracle);
        assert_eq!(restored.attack_code(Point::new(4, 2)), AttackCode::KoB);
        assert!(!restored.is_move_safe(Point::new(0, 3), Color::Black));
        assert!(restored.does_defend(Point::new(1, 2), Point::new(1, 1)));
    }

    #[test]
    fn test_oracle_through_reference() {
        let oracle = StaticOracle::new().with_attack(Point::new(2, 2), AttackCode::Win);
        let by_ref: &dyn TacticalOracle = &oracle;
        assert!(by_ref.attack_code(Point::new(2, 2)).is_capturable());
    }
}
