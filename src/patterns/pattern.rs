//! Connection pattern definitions.
//!
//! A pattern is a small shape given as elements at offsets from an anchor
//! stone. Attributes are relative to the color the pattern is matched for:
//! `Friendly` stones are that color, `Enemy` stones belong to the opponent,
//! who is the side that would play a cut.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::connections::{AnalysisContext, AnalysisState};
use crate::core::{Color, Offset};

use super::hooks::PatternHooks;
use super::site::MatchSite;

/// Set of pattern classification flags.
///
/// ```
/// use go_connections::patterns::PatternClass;
///
/// let class = PatternClass::CUT | PatternClass::SUPPRESS_SAFETY_CHECK;
/// assert!(class.is_cut());
/// assert!(class.suppresses_safety_check());
/// assert!(!class.is_connect());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternClass(u8);

impl PatternClass {
    /// No classification: the pattern relies on its action hook.
    pub const NONE: PatternClass = PatternClass(0);
    /// `B`: a cutting point.
    pub const CUT: PatternClass = PatternClass(1);
    /// `C`: a connection.
    pub const CONNECT: PatternClass = PatternClass(1 << 1);
    /// `s`: skip tactical safety checks on the pattern's stones.
    pub const SUPPRESS_SAFETY_CHECK: PatternClass = PatternClass(1 << 2);

    /// Check if every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: PatternClass) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn is_cut(self) -> bool {
        self.contains(Self::CUT)
    }

    #[must_use]
    pub const fn is_connect(self) -> bool {
        self.contains(Self::CONNECT)
    }

    #[must_use]
    pub const fn suppresses_safety_check(self) -> bool {
        self.contains(Self::SUPPRESS_SAFETY_CHECK)
    }

    /// Parse database class letters (`B`, `C`, `s`).
    ///
    /// Returns the offending character on failure.
    pub fn from_letters(letters: &str) -> Result<Self, char> {
        letters.chars().try_fold(Self::NONE, |class, ch| {
            let flag = match ch {
                'B' => Self::CUT,
                'C' => Self::CONNECT,
                's' => Self::SUPPRESS_SAFETY_CHECK,
                other => return Err(other),
            };
            Ok(class | flag)
        })
    }
}

impl std::ops::BitOr for PatternClass {
    type Output = PatternClass;

    fn bitor(self, rhs: PatternClass) -> PatternClass {
        PatternClass(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for PatternClass {
    fn bitor_assign(&mut self, rhs: PatternClass) {
        self.0 |= rhs.0;
    }
}

impl std::fmt::Display for PatternClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if *self == Self::NONE {
            return f.write_str("-");
        }
        for (flag, letter) in [(Self::CUT, 'B'), (Self::CONNECT, 'C'), (Self::SUPPRESS_SAFETY_CHECK, 's')] {
            if self.contains(flag) {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

/// What a pattern element requires of its board point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementAttribute {
    /// `.` empty point.
    Empty,
    /// `O` stone of the matched color.
    Friendly,
    /// `X` opponent stone.
    Enemy,
    /// `o` friendly stone or empty.
    FriendlyOrEmpty,
    /// `x` opponent stone or empty.
    EnemyOrEmpty,
    /// `,` empty point to close to connections when the cut is confirmed.
    Inhibitor,
}

impl ElementAttribute {
    /// Parse a diagram character. `*` and `?` are handled by the loader.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Empty),
            'O' => Some(Self::Friendly),
            'X' => Some(Self::Enemy),
            'o' => Some(Self::FriendlyOrEmpty),
            'x' => Some(Self::EnemyOrEmpty),
            ',' => Some(Self::Inhibitor),
            _ => None,
        }
    }

    /// Diagram character.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Friendly => 'O',
            Self::Enemy => 'X',
            Self::FriendlyOrEmpty => 'o',
            Self::EnemyOrEmpty => 'x',
            Self::Inhibitor => ',',
        }
    }

    /// Does a point holding `found` satisfy this attribute when matching for `color`?
    #[must_use]
    pub fn accepts(self, found: Color, color: Color) -> bool {
        let enemy = color.opponent();
        match self {
            Self::Empty | Self::Inhibitor => found == Color::Empty,
            Self::Friendly => found == color,
            Self::Enemy => found == enemy,
            Self::FriendlyOrEmpty => found == color || found == Color::Empty,
            Self::EnemyOrEmpty => found == enemy || found == Color::Empty,
        }
    }
}

/// One point of a pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternElement {
    pub offset: Offset,
    pub attribute: ElementAttribute,
}

impl PatternElement {
    #[must_use]
    pub const fn new(offset: Offset, attribute: ElementAttribute) -> Self {
        Self { offset, attribute }
    }
}

/// Element list; most connection shapes have a dozen points or fewer.
pub type Elements = SmallVec<[PatternElement; 12]>;

/// A connection-database pattern.
///
/// Built from a diagram by the loader, or programmatically:
///
/// ```
/// use go_connections::core::Offset;
/// use go_connections::patterns::{ElementAttribute, Pattern, PatternClass};
///
/// // O.O with the gap as the key point
/// let pattern = Pattern::new("jump", PatternClass::CONNECT)
///     .with_element(Offset::new(0, 0), ElementAttribute::Friendly)
///     .with_element(Offset::new(0, 1), ElementAttribute::Empty)
///     .with_element(Offset::new(0, 2), ElementAttribute::Friendly)
///     .with_move(Offset::new(0, 1));
///
/// assert_eq!(pattern.elements.len(), 3);
/// assert!(pattern.class.is_connect());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pattern {
    /// Database name (for diagnostics).
    pub name: String,

    pub class: PatternClass,

    /// Elements in scan order. For cut patterns the inhibitor elements
    /// come first; the effect applier stops inhibiting at the first
    /// element that is not one.
    pub elements: Elements,

    /// Offset of the key point (the cutting point for cut patterns).
    pub move_offset: Option<Offset>,

    /// Custom predicates and action. Not serialized.
    #[serde(skip)]
    pub hooks: PatternHooks,
}

impl Pattern {
    /// Create a pattern with no elements.
    pub fn new(name: impl Into<String>, class: PatternClass) -> Self {
        Self {
            name: name.into(),
            class,
            elements: Elements::new(),
            move_offset: None,
            hooks: PatternHooks::default(),
        }
    }

    /// Append an element (builder pattern).
    ///
    /// Elements are kept in the order given.
    #[must_use]
    pub fn with_element(mut self, offset: Offset, attribute: ElementAttribute) -> Self {
        self.elements.push(PatternElement::new(offset, attribute));
        self
    }

    /// Set the key point (builder pattern).
    #[must_use]
    pub fn with_move(mut self, offset: Offset) -> Self {
        self.move_offset = Some(offset);
        self
    }

    /// Set the constraint hook (builder pattern).
    #[must_use]
    pub fn with_constraint(
        mut self,
        constraint: impl Fn(&MatchSite<'_>, &AnalysisContext<'_>, &AnalysisState) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.hooks.constraint = Some(Arc::new(constraint));
        self
    }

    /// Set the helper hook (builder pattern).
    #[must_use]
    pub fn with_helper(
        mut self,
        helper: impl Fn(&MatchSite<'_>, &AnalysisContext<'_>, &AnalysisState) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.hooks.helper = Some(Arc::new(helper));
        self
    }

    /// Set the action hook (builder pattern).
    #[must_use]
    pub fn with_action(
        mut self,
        action: impl Fn(&MatchSite<'_>, &AnalysisContext<'_>, &mut AnalysisState) + Send + Sync + 'static,
    ) -> Self {
        self.hooks.action = Some(Arc::new(action));
        self
    }

    /// Elements with a given attribute, in order.
    pub fn elements_with(&self, attribute: ElementAttribute) -> impl Iterator<Item = &PatternElement> {
        self.elements.iter().filter(move |e| e.attribute == attribute)
    }

    /// Number of leading inhibitor elements.
    #[must_use]
    pub fn leading_inhibitors(&self) -> usize {
        self.elements
            .iter()
            .take_while(|e| e.attribute == ElementAttribute::Inhibitor)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_letters() {
        assert_eq!(PatternClass::from_letters("B"), Ok(PatternClass::CUT));
        assert_eq!(
            PatternClass::from_letters("Cs"),
            Ok(PatternClass::CONNECT | PatternClass::SUPPRESS_SAFETY_CHECK)
        );
        assert_eq!(PatternClass::from_letters(""), Ok(PatternClass::NONE));
        assert_eq!(PatternClass::from_letters("Bq"), Err('q'));
    }

    #[test]
    fn test_class_display() {
        assert_eq!(PatternClass::NONE.to_string(), "-");
        assert_eq!((PatternClass::CUT | PatternClass::SUPPRESS_SAFETY_CHECK).to_string(), "Bs");
    }

    #[test]
    fn test_class_bitor_assign() {
        let mut class = PatternClass::CONNECT;
        class |= PatternClass::CUT;
        assert!(class.is_cut() && class.is_connect());
    }

    #[test]
    fn test_attribute_accepts() {
        use ElementAttribute::*;
        let w = Color::White;

        assert!(Friendly.accepts(Color::White, w));
        assert!(!Friendly.accepts(Color::Black, w));
        assert!(Enemy.accepts(Color::Black, w));
        assert!(Empty.accepts(Color::Empty, w));
        assert!(!Empty.accepts(Color::White, w));
        assert!(Inhibitor.accepts(Color::Empty, w));
        assert!(FriendlyOrEmpty.accepts(Color::Empty, w));
        assert!(FriendlyOrEmpty.accepts(Color::White, w));
        assert!(!FriendlyOrEmpty.accepts(Color::Black, w));
        assert!(EnemyOrEmpty.accepts(Color::Black, w));
        assert!(!EnemyOrEmpty.accepts(Color::White, w));
    }

    #[test]
    fn test_attribute_symbols() {
        for ch in ['.', 'O', 'X', 'o', 'x', ','] {
            assert_eq!(ElementAttribute::from_symbol(ch).map(|a| a.symbol()), Some(ch));
        }
        assert_eq!(ElementAttribute::from_symbol('*'), None);
    }

    #[test]
    fn test_leading_inhibitors() {
        let pattern = Pattern::new("p", PatternClass::CUT)
            .with_element(Offset::new(0, 1), ElementAttribute::Inhibitor)
            .with_element(Offset::new(1, 1), ElementAttribute::Inhibitor)
            .with_element(Offset::new(0, 0), ElementAttribute::Friendly)
            .with_element(Offset::new(2, 2), ElementAttribute::Inhibitor);

        assert_eq!(pattern.leading_inhibitors(), 2);
        assert_eq!(pattern.elements_with(ElementAttribute::Inhibitor).count(), 3);
    }

    #[test]
    fn test_pattern_serialization_skips_hooks() {
        let pattern = Pattern::new("p", PatternClass::CONNECT)
            .with_element(Offset::ZERO, ElementAttribute::Friendly)
            .with_constraint(|_, _, _| false);

        let json = serde_json::to_string(&pattern).unwrap();
        let back: Pattern = serde_json::from_str(&json).unwrap();

        assert_eq!(back.name, "p");
        assert_eq!(back.class, PatternClass::CONNECT);
        assert_eq!(back.elements.as_slice(), pattern.elements.as_slice());
        assert!(back.hooks.constraint.is_none());
    }
}
