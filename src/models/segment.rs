//! Path segments produced by the sequence generator.

use super::key::{Action, Key};

/// One entry of a path segment: the key the cursor is on and the press
/// taken from it. The last step of every segment selects its key with
/// [`Action::Enter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    /// The key the cursor is on when the press happens.
    pub key: Key,
    /// The press taken from that key.
    pub action: Action,
}

impl PathStep {
    /// Creates a step.
    #[must_use]
    pub const fn new(key: Key, action: Action) -> Self {
        Self { key, action }
    }
}

/// The ordered shortest path between two consecutive sentence characters.
pub type Segment = Vec<PathStep>;
