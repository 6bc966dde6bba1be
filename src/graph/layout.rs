//! The keypad layout, as literal row data plus the two regular
//! derivation rules (letter-row wrap and case pairing).
//!
//! The pad models a real keyboard in four logical rows: uppercase letters,
//! lowercase letters, digits/shifted symbols, and punctuation/control. The
//! letter rows are regular enough to derive (left/right wrap within the row,
//! up/down between the case pair), except for one per-key vertical "special"
//! neighbor that encodes how the letter rows line up against the symbol
//! rows; those specials and the two irregular rows are hand-authored tables,
//! not formulas. The tables are the wire format callers depend on, so their
//! quirks are kept as-is (both `}` and `<` name `G` as their Down neighbor).

use crate::models::Key;
use thiserror::Error;

/// Build-time invariant violation in the layout tables.
///
/// These are programming errors in the fixed layout data, not runtime
/// conditions: construction fails immediately and retrying cannot help.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A row entry's key value is not exactly one character.
    #[error("key value must be exactly one character, got {0:?}")]
    InvalidKeyValue(String),

    /// A neighbor cell is neither absent, the blank marker, nor one character.
    #[error("neighbor must be absent, blank, or exactly one character, got {0:?}")]
    InvalidNeighbor(String),

    /// An edge points at a value with no node in the same graph.
    #[error("edge from {from:?} going {direction} points at {to:?}, which has no node")]
    DanglingEdge {
        /// Token of the node the edge leaves from.
        from: String,
        /// Direction of the offending edge.
        direction: &'static str,
        /// Token of the missing target.
        to: String,
    },
}

/// One neighbor cell of a row table: `None` for no key in that direction,
/// `Some("")` for the blank/unprogrammed key slot, `Some(c)` for a key.
pub(crate) type Cell = Option<&'static str>;

/// One entry of an irregular row: the key value and its four neighbor cells
/// in Up/Right/Down/Left order.
pub(crate) type RowEntry = (&'static str, [Cell; 4]);

/// The backspace/delete control key.
pub const BACKSPACE: char = '\u{8}';

const BS: &str = "\u{8}";

/// The blank-slot marker used inside the row tables.
const BLANK: Cell = Some("");

/// Per-key Up specials for the uppercase row A-Z, in row order. Down is the
/// case pair and Left/Right wrap, so only Up needs authoring.
pub(crate) const UPPER_ROW_UP: [Cell; 26] = [
    Some("`"),  // A
    Some("~"),  // B
    Some("["),  // C
    Some("]"),  // D
    Some("{"),  // E
    Some("}"),  // F
    Some("<"),  // G
    Some(">"),  // H
    BLANK,      // I
    Some(" "),  // J
    Some(" "),  // K
    Some(" "),  // L
    Some(" "),  // M
    Some(" "),  // N
    Some(" "),  // O
    Some(" "),  // P
    Some("."),  // Q
    Some(","),  // R
    Some(";"),  // S
    Some(":"),  // T
    Some("'"),  // U
    Some("\""), // V
    Some("_"),  // W
    Some("="),  // X
    Some(BS),   // Y
    Some(BS),   // Z
];

/// Per-key Down specials for the lowercase row a-z, in row order. Up is the
/// case pair and Left/Right wrap.
pub(crate) const LOWER_ROW_DOWN: [Cell; 26] = [
    Some("0"),  // a
    Some("1"),  // b
    Some("2"),  // c
    Some("3"),  // d
    Some("4"),  // e
    Some("5"),  // f
    Some("6"),  // g
    Some("7"),  // h
    Some("8"),  // i
    Some("9"),  // j
    Some("!"),  // k
    Some("@"),  // l
    Some("#"),  // m
    Some("$"),  // n
    Some("%"),  // o
    Some("^"),  // p
    Some("&"),  // q
    Some("*"),  // r
    Some("("),  // s
    Some(")"),  // t
    Some("?"),  // u
    Some("/"),  // v
    Some("|"),  // w
    Some("\\"), // x
    Some("+"),  // y
    Some("-"),  // z
];

/// Digits/shifted-symbols row: fully explicit adjacency, no derivation.
pub(crate) const DIGIT_ROW: [RowEntry; 26] = [
    ("0", [Some("a"), Some("1"), Some("`"), Some("-")]),
    ("1", [Some("b"), Some("2"), Some("~"), Some("0")]),
    ("2", [Some("c"), Some("3"), Some("["), Some("1")]),
    ("3", [Some("d"), Some("4"), Some("]"), Some("2")]),
    ("4", [Some("e"), Some("5"), Some("{"), Some("3")]),
    ("5", [Some("f"), Some("6"), Some("}"), Some("4")]),
    ("6", [Some("g"), Some("7"), Some("<"), Some("5")]),
    ("7", [Some("h"), Some("8"), Some(">"), Some("6")]),
    ("8", [Some("i"), Some("9"), BLANK, Some("7")]),
    ("9", [Some("j"), Some("!"), Some(" "), Some("8")]),
    ("!", [Some("k"), Some("@"), Some(" "), Some("9")]),
    ("@", [Some("l"), Some("#"), Some(" "), Some("!")]),
    ("#", [Some("m"), Some("$"), Some(" "), Some("@")]),
    ("$", [Some("n"), Some("%"), Some(" "), Some("#")]),
    ("%", [Some("o"), Some("^"), Some(" "), Some("$")]),
    ("^", [Some("p"), Some("&"), Some(" "), Some("%")]),
    ("&", [Some("q"), Some("*"), Some("."), Some("^")]),
    ("*", [Some("r"), Some("("), Some(","), Some("&")]),
    ("(", [Some("s"), Some(")"), Some(";"), Some("*")]),
    (")", [Some("t"), Some("?"), Some(":"), Some("(")]),
    ("?", [Some("u"), Some("/"), Some("'"), Some(")")]),
    ("/", [Some("v"), Some("|"), Some("\""), Some("?")]),
    ("|", [Some("w"), Some("\\"), Some("_"), Some("/")]),
    ("\\", [Some("x"), Some("+"), Some("="), Some("|")]),
    ("+", [Some("y"), Some("-"), Some(BS), Some("\\")]),
    ("-", [Some("z"), Some("0"), Some(BS), Some("+")]),
];

/// Punctuation/control row: fully explicit adjacency. The blank slot sits
/// between `>` and space.
pub(crate) const PUNCT_ROW: [RowEntry; 18] = [
    ("`", [Some("0"), Some("~"), Some("A"), Some(BS)]),
    ("~", [Some("1"), Some("["), Some("B"), Some("`")]),
    ("[", [Some("2"), Some("]"), Some("C"), Some("~")]),
    ("]", [Some("3"), Some("{"), Some("D"), Some("[")]),
    ("{", [Some("4"), Some("}"), Some("E"), Some("]")]),
    ("}", [Some("5"), Some("<"), Some("G"), Some("{")]),
    ("<", [Some("6"), Some(">"), Some("G"), Some("}")]),
    (">", [Some("7"), BLANK, Some("H"), Some("<")]),
    (" ", [Some("#"), Some("."), Some("J"), BLANK]),
    (".", [Some("&"), Some(","), Some("Q"), Some(" ")]),
    (",", [Some("*"), Some(";"), Some("R"), Some(".")]),
    (";", [Some("("), Some(":"), Some("S"), Some(",")]),
    (":", [Some(")"), Some("'"), Some("T"), Some(";")]),
    ("'", [Some("?"), Some("\""), Some("U"), Some(":")]),
    ("\"", [Some("/"), Some("_"), Some("V"), Some("'")]),
    ("_", [Some("|"), Some("="), Some("W"), Some("\"")]),
    ("=", [Some("\\"), Some(BS), Some("X"), Some("_")]),
    (BS, [Some("-"), Some("`"), Some("Z"), Some("=")]),
];

/// The blank/unprogrammed key's own edges, used only when it is enabled.
pub(crate) const BLANK_KEY: [Cell; 4] = [Some("8"), Some(" "), Some("I"), Some(">")];

/// Parses a row entry's key value: must be exactly one character.
pub(crate) fn parse_key(value: &str) -> Result<Key, LayoutError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Key::Char(c)),
        _ => Err(LayoutError::InvalidKeyValue(value.to_string())),
    }
}

/// Resolves a neighbor cell into an edge.
///
/// The blank marker becomes an edge to the blank key when it participates,
/// and an absent edge otherwise (the physical key exists but cannot be
/// navigated to).
pub(crate) fn parse_cell(cell: Cell, include_blank: bool) -> Result<Option<Key>, LayoutError> {
    match cell {
        None => Ok(None),
        Some("") => Ok(include_blank.then_some(Key::Blank)),
        Some(value) => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Some(Key::Char(c))),
                _ => Err(LayoutError::InvalidNeighbor(value.to_string())),
            }
        }
    }
}

/// Letter-row wrap: the key left of the row's first letter is its last
/// letter. `row_start` must be 'A' or 'a'.
pub(crate) fn wrap_left(value: char, row_start: char) -> char {
    if value == row_start {
        row_end(row_start)
    } else {
        char::from(value as u8 - 1)
    }
}

/// Letter-row wrap: the key right of the row's last letter is its first
/// letter. `row_start` must be 'A' or 'a'.
pub(crate) fn wrap_right(value: char, row_start: char) -> char {
    if value == row_end(row_start) {
        row_start
    } else {
        char::from(value as u8 + 1)
    }
}

fn row_end(row_start: char) -> char {
    char::from(row_start as u8 + 25)
}
