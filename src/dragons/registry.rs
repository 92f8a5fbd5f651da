//! Dragon registry: which dragon every stone belongs to.
//!
//! A dragon is named by its origin, one of its member stones. Joining two
//! dragons keeps the survivor's origin and relabels every member of the
//! absorbed one, so `origin` is a plain lookup.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{Board, Color, Point};

/// Member stones of one dragon.
pub type Members = SmallVec<[Point; 8]>;

/// Registry of dragons on one board.
///
/// Seeded from the board's worms (orthogonally connected strings of one
/// color); the connection passes then join worms into larger dragons.
///
/// ## Example
///
/// ```
/// use go_connections::core::{Board, Point};
/// use go_connections::dragons::DragonRegistry;
///
/// let board = Board::from_diagram("
///     O . O
///     . . .
///     . . .
/// ").unwrap();
/// let mut dragons = DragonRegistry::from_board(&board);
///
/// let left = Point::new(0, 0);
/// let right = Point::new(0, 2);
/// assert!(!dragons.same_dragon(left, right));
///
/// assert!(dragons.join(left, right));
/// assert!(dragons.same_dragon(left, right));
/// assert_eq!(dragons.origin(right), Some(left));
/// ```
#[derive(Clone, Debug)]
pub struct DragonRegistry {
    size: u8,
    /// Origin per point index; `None` for empty points.
    origins: Vec<Option<Point>>,
    /// Color per point index.
    colors: Vec<Color>,
    /// Members per origin.
    members: FxHashMap<Point, Members>,
}

impl DragonRegistry {
    /// Build the registry from the worms of a board.
    ///
    /// Each worm becomes one dragon whose origin is its first stone in
    /// row-major order.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let size = board.size();
        let area = size as usize * size as usize;
        let mut registry = Self {
            size,
            origins: vec![None; area],
            colors: board.points().map(|p| board.get(p)).collect(),
            members: FxHashMap::default(),
        };

        for start in board.points() {
            let color = board.get(start);
            if !color.is_stone() || registry.origins[start.index(size)].is_some() {
                continue;
            }

            let mut worm = Members::new();
            let mut stack = vec![start];
            registry.origins[start.index(size)] = Some(start);

            while let Some(point) = stack.pop() {
                worm.push(point);
                for next in board.neighbors(point) {
                    let slot = &mut registry.origins[next.index(size)];
                    if board.get(next) == color && slot.is_none() {
                        *slot = Some(start);
                        stack.push(next);
                    }
                }
            }

            worm.sort_unstable();
            registry.members.insert(start, worm);
        }

        registry
    }

    /// Board size this registry was built for.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Origin of the dragon containing `point`, or `None` if it is empty.
    ///
    /// Panics if the point is off the board.
    #[must_use]
    pub fn origin(&self, point: Point) -> Option<Point> {
        assert!(point.is_on_board(self.size), "{} is off the board", point);
        self.origins[point.index(self.size)]
    }

    /// Check if two points hold stones of the same dragon.
    #[must_use]
    pub fn same_dragon(&self, a: Point, b: Point) -> bool {
        match (self.origin(a), self.origin(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Member stones of the dragon containing `point`.
    ///
    /// Empty for empty points.
    #[must_use]
    pub fn members(&self, point: Point) -> &[Point] {
        self.origin(point)
            .and_then(|origin| self.members.get(&origin))
            .map(|m| m.as_slice())
            .unwrap_or(&[])
    }

    /// Color of the dragon at `point`.
    #[must_use]
    pub fn color(&self, point: Point) -> Color {
        assert!(point.is_on_board(self.size), "{} is off the board", point);
        self.colors[point.index(self.size)]
    }

    /// Number of dragons.
    #[must_use]
    pub fn dragon_count(&self) -> usize {
        self.members.len()
    }

    /// Iterate over all dragon origins.
    pub fn origins(&self) -> impl Iterator<Item = Point> + '_ {
        self.members.keys().copied()
    }

    /// Join the dragon containing `absorbed` into the one containing `survivor`.
    ///
    /// The survivor's origin names the merged dragon. Returns `false` if the
    /// points are already in the same dragon.
    ///
    /// Panics if either point is empty or the dragons differ in color; both
    /// mean the caller's view of the board is corrupt.
    pub fn join(&mut self, survivor: Point, absorbed: Point) -> bool {
        let keep = self
            .origin(survivor)
            .unwrap_or_else(|| panic!("cannot join empty point {}", survivor));
        let gone = self
            .origin(absorbed)
            .unwrap_or_else(|| panic!("cannot join empty point {}", absorbed));

        if keep == gone {
            return false;
        }
        assert_eq!(
            self.color(keep),
            self.color(gone),
            "cannot join dragons of different colors"
        );

        let moved = self.members.remove(&gone).unwrap_or_default();
        for &stone in &moved {
            self.origins[stone.index(self.size)] = Some(keep);
        }

        let merged = self.members.entry(keep).or_default();
        merged.extend(moved);
        merged.sort_unstable();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_worms() -> Board {
        Board::from_diagram(
            "
            OO.O.
            .....
            XX.O.
            .X...
            .....
            ",
        )
        .unwrap()
    }

    #[test]
    fn test_worms_seed_dragons() {
        let dragons = DragonRegistry::from_board(&three_worms());

        assert_eq!(dragons.dragon_count(), 4);
        assert_eq!(dragons.origin(Point::new(0, 1)), Some(Point::new(0, 0)));
        assert_eq!(dragons.origin(Point::new(3, 1)), Some(Point::new(2, 0)));
        assert_eq!(dragons.origin(Point::new(1, 1)), None);
        assert_eq!(dragons.members(Point::new(2, 1)).len(), 3);
        assert!(dragons.members(Point::new(4, 4)).is_empty());
    }

    #[test]
    fn test_join_relabels_members() {
        let mut dragons = DragonRegistry::from_board(&three_worms());

        assert!(dragons.join(Point::new(0, 3), Point::new(0, 1)));
        assert_eq!(dragons.origin(Point::new(0, 0)), Some(Point::new(0, 3)));
        assert_eq!(dragons.origin(Point::new(0, 1)), Some(Point::new(0, 3)));
        assert_eq!(dragons.members(Point::new(0, 3)).len(), 3);
        assert_eq!(dragons.dragon_count(), 3);
    }

    #[test]
    fn test_join_same_dragon_is_noop() {
        let mut dragons = DragonRegistry::from_board(&three_worms());
        assert!(!dragons.join(Point::new(0, 0), Point::new(0, 1)));
        assert_eq!(dragons.dragon_count(), 4);
    }

    #[test]
    fn test_join_is_transitive() {
        let mut dragons = DragonRegistry::from_board(&three_worms());
        let a = Point::new(0, 0);
        let b = Point::new(0, 3);
        let c = Point::new(2, 3);

        dragons.join(a, b);
        dragons.join(b, c);

        assert!(dragons.same_dragon(a, c));
        assert_eq!(dragons.members(c).len(), 4);
    }

    #[test]
    #[should_panic(expected = "different colors")]
    fn test_join_different_colors_panics() {
        let mut dragons = DragonRegistry::from_board(&three_worms());
        dragons.join(Point::new(0, 0), Point::new(2, 0));
    }

    #[test]
    #[should_panic(expected = "cannot join empty point")]
    fn test_join_empty_point_panics() {
        let mut dragons = DragonRegistry::from_board(&three_worms());
        dragons.join(Point::new(0, 0), Point::new(1, 1));
    }
}
