//! A key's four directional edges.

use super::key::{Direction, Key};

/// One key's outgoing edges, one per canonical direction.
///
/// An edge is `None` where the physical pad has no key in that direction.
/// Keeping one field per direction (rather than a map) makes the
/// four-canonical-directions invariant structural: a node cannot carry a
/// fifth edge or miss one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Node {
    /// Key above, if any.
    pub up: Option<Key>,
    /// Key to the right, if any.
    pub right: Option<Key>,
    /// Key below, if any.
    pub down: Option<Key>,
    /// Key to the left, if any.
    pub left: Option<Key>,
}

impl Node {
    /// Creates a node from its four edges, in Up/Right/Down/Left order.
    #[must_use]
    pub const fn new(
        up: Option<Key>,
        right: Option<Key>,
        down: Option<Key>,
        left: Option<Key>,
    ) -> Self {
        Self {
            up,
            right,
            down,
            left,
        }
    }

    /// Returns the neighbor in the given direction, if present.
    #[must_use]
    pub const fn neighbor(&self, direction: Direction) -> Option<Key> {
        match direction {
            Direction::Up => self.up,
            Direction::Right => self.right,
            Direction::Down => self.down,
            Direction::Left => self.left,
        }
    }

    /// Iterates the present neighbors in expansion order, absent edges skipped.
    pub fn neighbors(&self) -> impl Iterator<Item = (Direction, Key)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.neighbor(direction).map(|key| (direction, key)))
    }
}
