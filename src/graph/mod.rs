//! The keypad graph: a fixed, immutable map from key to directional
//! neighbors, built once per configuration.
//!
//! Construction is deterministic and side-effect-free, so building twice
//! with the same flag yields identical graphs; [`GraphCache`] memoizes the
//! two possible variants for callers that generate many sequences.

pub mod layout;

pub use layout::{LayoutError, BACKSPACE};

use crate::models::{Direction, Key, Node};
use layout::{Cell, BLANK_KEY, DIGIT_ROW, LOWER_ROW_DOWN, PUNCT_ROW, UPPER_ROW_UP};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Immutable keypad graph for one configuration of the blank key.
///
/// Holds 96 nodes, or 97 when the blank/unprogrammed key participates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadGraph {
    /// All nodes, keyed by their key identity.
    nodes: HashMap<Key, Node>,
    /// Whether the blank key was built as a navigable node.
    blank_enabled: bool,
}

impl KeypadGraph {
    /// Builds the full node table for the keypad layout.
    ///
    /// When `include_blank` is set, the unprogrammed key between `>` and
    /// space participates as a navigable node; otherwise every slot that
    /// would reference it resolves to an absent edge.
    ///
    /// Fails only on a malformed row-table entry or a dangling edge, both
    /// of which are defects in the fixed layout data rather than runtime
    /// conditions.
    pub fn build(include_blank: bool) -> Result<Self, LayoutError> {
        let mut nodes = HashMap::with_capacity(97);

        // Uppercase row: Down is the case pair, Left/Right wrap, Up is the
        // authored special.
        for (value, special) in ('A'..='Z').zip(UPPER_ROW_UP) {
            let node = Node::new(
                layout::parse_cell(special, include_blank)?,
                Some(Key::Char(layout::wrap_right(value, 'A'))),
                Some(Key::Char(value.to_ascii_lowercase())),
                Some(Key::Char(layout::wrap_left(value, 'A'))),
            );
            nodes.insert(Key::Char(value), node);
        }

        // Lowercase row: Up is the case pair, Down is the authored special.
        for (value, special) in ('a'..='z').zip(LOWER_ROW_DOWN) {
            let node = Node::new(
                Some(Key::Char(value.to_ascii_uppercase())),
                Some(Key::Char(layout::wrap_right(value, 'a'))),
                layout::parse_cell(special, include_blank)?,
                Some(Key::Char(layout::wrap_left(value, 'a'))),
            );
            nodes.insert(Key::Char(value), node);
        }

        // Irregular rows are pure table data.
        for (value, cells) in DIGIT_ROW.iter().chain(PUNCT_ROW.iter()) {
            let key = layout::parse_key(value)?;
            nodes.insert(key, node_from_cells(cells, include_blank)?);
        }

        if include_blank {
            nodes.insert(Key::Blank, node_from_cells(&BLANK_KEY, true)?);
        }

        let graph = Self {
            nodes,
            blank_enabled: include_blank,
        };
        graph.check_edges()?;
        Ok(graph)
    }

    /// Looks up a key's node.
    #[must_use]
    pub fn node(&self, key: Key) -> Option<&Node> {
        self.nodes.get(&key)
    }

    /// Returns whether the key has a node in this graph.
    #[must_use]
    pub fn contains(&self, key: Key) -> bool {
        self.nodes.contains_key(&key)
    }

    /// Looks up a key's neighbor in one direction. `None` when the key has
    /// no node or no neighbor that way.
    #[must_use]
    pub fn neighbor(&self, key: Key, direction: Direction) -> Option<Key> {
        self.node(key).and_then(|node| node.neighbor(direction))
    }

    /// Number of nodes: 96, or 97 with the blank key enabled.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no nodes. Never the case for a built
    /// graph; provided for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether this variant was built with the blank key as a node.
    #[must_use]
    pub const fn blank_enabled(&self) -> bool {
        self.blank_enabled
    }

    /// Verifies that every edge target has a node in this graph.
    fn check_edges(&self) -> Result<(), LayoutError> {
        for (key, node) in &self.nodes {
            for (direction, target) in node.neighbors() {
                if !self.nodes.contains_key(&target) {
                    return Err(LayoutError::DanglingEdge {
                        from: key.token(),
                        direction: direction.as_str(),
                        to: target.token(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn node_from_cells(cells: &[Cell; 4], include_blank: bool) -> Result<Node, LayoutError> {
    Ok(Node::new(
        layout::parse_cell(cells[0], include_blank)?,
        layout::parse_cell(cells[1], include_blank)?,
        layout::parse_cell(cells[2], include_blank)?,
        layout::parse_cell(cells[3], include_blank)?,
    ))
}

/// Explicit keyed cache of built graphs, one slot per configuration.
///
/// Owned by the calling context rather than being ambient global state. The
/// slots are independent: requesting one variant never observes the other,
/// and concurrent first requests for the same variant settle on a single
/// shared graph (a losing racer's build is discarded, which is benign
/// because construction is pure).
#[derive(Debug, Default)]
pub struct GraphCache {
    without_blank: OnceLock<Arc<KeypadGraph>>,
    with_blank: OnceLock<Arc<KeypadGraph>>,
}

impl GraphCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            without_blank: OnceLock::new(),
            with_blank: OnceLock::new(),
        }
    }

    /// Returns the cached graph for the configuration, building it on first
    /// request.
    pub fn get(&self, include_blank: bool) -> Result<Arc<KeypadGraph>, LayoutError> {
        let slot = if include_blank {
            &self.with_blank
        } else {
            &self.without_blank
        };
        if let Some(graph) = slot.get() {
            return Ok(Arc::clone(graph));
        }
        let built = Arc::new(KeypadGraph::build(include_blank)?);
        Ok(Arc::clone(slot.get_or_init(|| built)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_counts() {
        let graph = KeypadGraph::build(false).unwrap();
        assert_eq!(graph.len(), 96);
        let graph = KeypadGraph::build(true).unwrap();
        assert_eq!(graph.len(), 97);
    }

    #[test]
    fn test_letter_row_derivation() {
        let graph = KeypadGraph::build(false).unwrap();
        let node = graph.node(Key::Char('r')).unwrap();
        assert_eq!(node.up, Some(Key::Char('R')));
        assert_eq!(node.right, Some(Key::Char('s')));
        assert_eq!(node.down, Some(Key::Char('*')));
        assert_eq!(node.left, Some(Key::Char('q')));
    }

    #[test]
    fn test_letter_row_wraps() {
        let graph = KeypadGraph::build(false).unwrap();
        assert_eq!(
            graph.neighbor(Key::Char('A'), Direction::Left),
            Some(Key::Char('Z'))
        );
        assert_eq!(
            graph.neighbor(Key::Char('z'), Direction::Right),
            Some(Key::Char('a'))
        );
    }

    #[test]
    fn test_space_and_backspace_nodes() {
        let graph = KeypadGraph::build(false).unwrap();
        let space = graph.node(Key::Char(' ')).unwrap();
        assert_eq!(space.up, Some(Key::Char('#')));
        assert_eq!(space.right, Some(Key::Char('.')));
        assert_eq!(space.down, Some(Key::Char('J')));
        assert_eq!(space.left, None);

        let backspace = graph.node(Key::Char(BACKSPACE)).unwrap();
        assert_eq!(backspace.up, Some(Key::Char('-')));
        assert_eq!(backspace.right, Some(Key::Char('`')));
        assert_eq!(backspace.down, Some(Key::Char('Z')));
        assert_eq!(backspace.left, Some(Key::Char('=')));
    }

    #[test]
    fn test_blank_key_absent_by_default() {
        let graph = KeypadGraph::build(false).unwrap();
        assert!(!graph.contains(Key::Blank));
        // Slots that would reference it resolve to absent edges.
        assert_eq!(graph.neighbor(Key::Char('>'), Direction::Right), None);
        assert_eq!(graph.neighbor(Key::Char('8'), Direction::Down), None);
        assert_eq!(graph.neighbor(Key::Char('I'), Direction::Up), None);
    }

    #[test]
    fn test_blank_key_when_enabled() {
        let graph = KeypadGraph::build(true).unwrap();
        let blank = graph.node(Key::Blank).unwrap();
        assert_eq!(blank.up, Some(Key::Char('8')));
        assert_eq!(blank.right, Some(Key::Char(' ')));
        assert_eq!(blank.down, Some(Key::Char('I')));
        assert_eq!(blank.left, Some(Key::Char('>')));
        assert_eq!(
            graph.neighbor(Key::Char('>'), Direction::Right),
            Some(Key::Blank)
        );
        assert_eq!(
            graph.neighbor(Key::Char(' '), Direction::Left),
            Some(Key::Blank)
        );
    }

    #[test]
    fn test_cache_keeps_variants_apart() {
        let cache = GraphCache::new();
        let without = cache.get(false).unwrap();
        let with = cache.get(true).unwrap();
        assert_eq!(without.len(), 96);
        assert_eq!(with.len(), 97);
        assert!(!without.contains(Key::Blank));
        assert!(with.contains(Key::Blank));
        // Repeated requests return the same shared instance.
        assert!(Arc::ptr_eq(&without, &cache.get(false).unwrap()));
        assert!(Arc::ptr_eq(&with, &cache.get(true).unwrap()));
    }
}
