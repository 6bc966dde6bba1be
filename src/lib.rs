//! Directional-pad keyboard navigation library.
//!
//! Models a fixed on-screen keyboard as a graph of keys, each with four
//! directional neighbors, and computes the minimal press sequence
//! (movements plus Enter selections) needed to type a sentence by
//! navigating the pad one key at a time.

// Module declarations
pub mod cli;
pub mod constants;
pub mod graph;
pub mod models;
pub mod sequence;
