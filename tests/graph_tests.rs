//! Integration tests for keypad graph construction.
//!
//! Spot-checks the layout adjacencies (derived letter rows,
//! explicit symbol rows, the optional blank key) and the keyed graph cache.

use padseq::graph::{GraphCache, KeypadGraph, BACKSPACE};
use padseq::models::{Direction, Key, Node};
use std::sync::Arc;

#[test]
fn test_node_count_without_blank_key() {
    let graph = KeypadGraph::build(false).expect("layout should build");
    assert_eq!(graph.len(), 96);
    assert!(!graph.blank_enabled());
}

#[test]
fn test_node_count_with_blank_key() {
    let graph = KeypadGraph::build(true).expect("layout should build");
    assert_eq!(graph.len(), 97);
    assert!(graph.blank_enabled());
}

#[test]
fn test_lowercase_letter_adjacency() {
    let graph = KeypadGraph::build(false).unwrap();
    assert_eq!(
        graph.node(Key::Char('r')),
        Some(&Node::new(
            Some(Key::Char('R')),
            Some(Key::Char('s')),
            Some(Key::Char('*')),
            Some(Key::Char('q')),
        ))
    );
}

#[test]
fn test_space_adjacency() {
    let graph = KeypadGraph::build(false).unwrap();
    assert_eq!(
        graph.node(Key::Char(' ')),
        Some(&Node::new(
            Some(Key::Char('#')),
            Some(Key::Char('.')),
            Some(Key::Char('J')),
            None,
        ))
    );
}

#[test]
fn test_backspace_adjacency() {
    let graph = KeypadGraph::build(false).unwrap();
    assert_eq!(
        graph.node(Key::Char(BACKSPACE)),
        Some(&Node::new(
            Some(Key::Char('-')),
            Some(Key::Char('`')),
            Some(Key::Char('Z')),
            Some(Key::Char('=')),
        ))
    );
}

#[test]
fn test_blank_key_adjacency_when_enabled() {
    let graph = KeypadGraph::build(true).unwrap();
    assert_eq!(
        graph.node(Key::Blank),
        Some(&Node::new(
            Some(Key::Char('8')),
            Some(Key::Char(' ')),
            Some(Key::Char('I')),
            Some(Key::Char('>')),
        ))
    );
}

#[test]
fn test_blank_key_slots_absent_when_disabled() {
    let graph = KeypadGraph::build(false).unwrap();
    assert_eq!(graph.node(Key::Blank), None);
    assert_eq!(graph.neighbor(Key::Char('>'), Direction::Right), None);
    assert_eq!(graph.neighbor(Key::Char(' '), Direction::Left), None);
    assert_eq!(graph.neighbor(Key::Char('8'), Direction::Down), None);
    assert_eq!(graph.neighbor(Key::Char('I'), Direction::Up), None);
}

// The layout has both `}` and `<` pointing down at G; the table
// is preserved as-is rather than "fixed".
#[test]
fn test_preserved_layout_asymmetry() {
    let graph = KeypadGraph::build(false).unwrap();
    assert_eq!(
        graph.neighbor(Key::Char('}'), Direction::Down),
        Some(Key::Char('G'))
    );
    assert_eq!(
        graph.neighbor(Key::Char('<'), Direction::Down),
        Some(Key::Char('G'))
    );
}

#[test]
fn test_every_edge_lands_on_a_node() {
    for include_blank in [false, true] {
        let graph = KeypadGraph::build(include_blank).unwrap();
        for c in (0u8..128).map(char::from) {
            let Some(node) = graph.node(Key::Char(c)) else {
                continue;
            };
            for (direction, neighbor) in node.neighbors() {
                assert!(
                    graph.contains(neighbor),
                    "edge from {c:?} going {direction} dangles"
                );
            }
        }
    }
}

#[test]
fn test_cache_returns_shared_instances_per_variant() {
    let cache = GraphCache::new();
    let without = cache.get(false).unwrap();
    let with = cache.get(true).unwrap();

    assert_eq!(without.len(), 96);
    assert_eq!(with.len(), 97);
    assert!(Arc::ptr_eq(&without, &cache.get(false).unwrap()));
    assert!(Arc::ptr_eq(&with, &cache.get(true).unwrap()));

    // Variants never leak into each other.
    assert!(!without.contains(Key::Blank));
    assert!(with.contains(Key::Blank));
}

#[test]
fn test_cache_is_shareable_across_threads() {
    let cache = Arc::new(GraphCache::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let cache = Arc::clone(&cache);
            std::thread::spawn(move || cache.get(i % 2 == 0).unwrap().len())
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let expected = if i % 2 == 0 { 97 } else { 96 };
        assert_eq!(handle.join().unwrap(), expected);
    }
}
