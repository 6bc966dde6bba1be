//! Data models for the keypad and generated press sequences.
//!
//! These types are plain values shared by the graph builder, the sequence
//! generator, and the CLI; they carry no behavior beyond simple accessors.

pub mod key;
pub mod node;
pub mod segment;

// Re-export all model types
pub use key::{Action, Direction, Key};
pub use node::Node;
pub use segment::{PathStep, Segment};
