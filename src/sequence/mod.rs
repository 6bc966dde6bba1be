//! Shortest press-sequence generation over a keypad graph.
//!
//! For a sentence, the generator produces one path segment per consecutive
//! character pair (plus the initial self-pair for the first character),
//! each found with an unweighted breadth-first search, and serializes the
//! segments into an ordered token stream.

use crate::graph::KeypadGraph;
use crate::models::{Action, Key, PathStep, Segment};
use std::collections::{HashMap, HashSet, VecDeque};
use thiserror::Error;

/// Failure while generating a press sequence.
///
/// `EmptySentence` and `KeyNotFound` are input-validation errors reported to
/// the caller; `Disconnected` is an internal consistency failure, since the
/// shipped layout is fully connected by construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// The input sentence was empty.
    #[error("sentence should not be empty")]
    EmptySentence,

    /// A sentence character has no node on the keypad.
    #[error("'{0}' key not found")]
    KeyNotFound(char),

    /// No path exists between two keys that both have nodes.
    #[error("no path from '{from}' to '{to}': keypad graph is disconnected")]
    Disconnected {
        /// Token of the unreachable pair's source key.
        from: String,
        /// Token of the unreachable pair's target key.
        to: String,
    },
}

/// Computes the minimal press sequence that types one sentence.
///
/// Borrows an already-built [`KeypadGraph`]; the graph variant decides
/// whether the blank key may be traversed. `process` fills the segments,
/// `serialize` flattens them into tokens.
///
/// ```
/// use padseq::graph::KeypadGraph;
/// use padseq::sequence::SequenceGenerator;
///
/// let graph = KeypadGraph::build(false)?;
/// let mut generator = SequenceGenerator::new("ABC", &graph)?;
/// generator.process()?;
/// assert_eq!(
///     generator.serialize(false),
///     vec!["Enter", "Right", "Enter", "Right", "Enter"]
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct SequenceGenerator<'g> {
    sentence: Vec<char>,
    graph: &'g KeypadGraph,
    segments: Vec<Segment>,
}

impl<'g> SequenceGenerator<'g> {
    /// Creates a generator for a non-empty sentence.
    pub fn new(sentence: &str, graph: &'g KeypadGraph) -> Result<Self, SequenceError> {
        if sentence.is_empty() {
            return Err(SequenceError::EmptySentence);
        }
        Ok(Self {
            sentence: sentence.chars().collect(),
            graph,
            segments: Vec::new(),
        })
    }

    /// Computes all path segments for the sentence.
    ///
    /// The first segment is always the self-pair of the first character
    /// (initial cursor placement plus selection), followed by one segment
    /// per consecutive pair in input order. Characters are resolved source
    /// first, then target, so the leftmost unsupported character determines
    /// the failure.
    pub fn process(&mut self) -> Result<(), SequenceError> {
        let mut segments = Vec::with_capacity(self.sentence.len());
        let first = self.sentence[0];
        segments.push(self.shortest_path(first, first)?);
        for pair in self.sentence.windows(2) {
            segments.push(self.shortest_path(pair[0], pair[1])?);
        }
        self.segments = segments;
        Ok(())
    }

    /// The computed segments, in input order. Empty before `process`.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Flattens all segments into an ordered token stream.
    ///
    /// Every step contributes its action token; with `with_keys` set, each
    /// action token is preceded by the token of the key it was taken from
    /// (the blank key's token is the empty string).
    #[must_use]
    pub fn serialize(&self, with_keys: bool) -> Vec<String> {
        let mut tokens = Vec::new();
        for segment in &self.segments {
            for step in segment {
                if with_keys {
                    tokens.push(step.key.token());
                }
                tokens.push(step.action.to_string());
            }
        }
        tokens
    }

    /// BFS shortest path between two sentence characters.
    fn shortest_path(&self, source: char, target: char) -> Result<Segment, SequenceError> {
        let source_key = self.resolve(source)?;
        let target_key = self.resolve(target)?;

        // Selecting the already-highlighted key needs no movement.
        if source_key == target_key {
            return Ok(vec![PathStep::new(source_key, Action::Enter)]);
        }

        // Standard FIFO search; first-reach entries record how each key was
        // discovered so the path can be rebuilt backward.
        let mut queue = VecDeque::new();
        let mut visited = HashSet::new();
        let mut discovered = HashMap::new();
        visited.insert(source_key);
        queue.push_back(source_key);

        let mut found = false;
        while let Some(key) = queue.pop_front() {
            if key == target_key {
                found = true;
                break;
            }
            let Some(node) = self.graph.node(key) else {
                continue;
            };
            for (direction, neighbor) in node.neighbors() {
                if visited.insert(neighbor) {
                    discovered.insert(neighbor, (direction, key));
                    queue.push_back(neighbor);
                }
            }
        }

        if !found {
            return Err(SequenceError::Disconnected {
                from: source_key.token(),
                to: target_key.token(),
            });
        }

        let mut path = vec![PathStep::new(target_key, Action::Enter)];
        let mut key = target_key;
        while let Some(&(direction, predecessor)) = discovered.get(&key) {
            path.push(PathStep::new(predecessor, Action::Move(direction)));
            key = predecessor;
            if key == source_key {
                break;
            }
        }
        path.reverse();
        Ok(path)
    }

    fn resolve(&self, character: char) -> Result<Key, SequenceError> {
        let key = Key::from(character);
        if self.graph.contains(key) {
            Ok(key)
        } else {
            Err(SequenceError::KeyNotFound(character))
        }
    }
}
