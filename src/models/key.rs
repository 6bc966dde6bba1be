//! Key identities and press actions.

use std::fmt;

/// A directional press on the pad.
///
/// The declaration order (Up, Right, Down, Left) is the order in which
/// search expands neighbors, which makes the chosen path deterministic when
/// several shortest paths exist. It carries no cost meaning; every hop is
/// unit weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Move the cursor up.
    Up,
    /// Move the cursor right.
    Right,
    /// Move the cursor down.
    Down,
    /// Move the cursor left.
    Left,
}

impl Direction {
    /// All four directions, in expansion order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// The literal token emitted for this direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Right => "Right",
            Self::Down => "Down",
            Self::Left => "Left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single press: either a directional move or selecting the highlighted key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor one key in the given direction.
    Move(Direction),
    /// Select the key the cursor is on.
    Enter,
}

impl Action {
    /// The literal token emitted for this action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Move(direction) => direction.as_str(),
            Self::Enter => "Enter",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a navigable key on the pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A key carrying one character of the supported alphabet.
    Char(char),
    /// The reserved unprogrammed key: physically present but not yet mapped
    /// to a character. Participates in navigation only when the layout is
    /// built with it enabled.
    Blank,
}

impl Key {
    /// Character token for this key. The blank key renders as an empty string.
    #[must_use]
    pub fn token(self) -> String {
        match self {
            Self::Char(c) => c.to_string(),
            Self::Blank => String::new(),
        }
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}
