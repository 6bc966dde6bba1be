//! Key-adjacency inspection command.

use crate::cli::common::{CliError, CliResult};
use crate::graph::{KeypadGraph, BACKSPACE};
use crate::models::{Key, Node};
use clap::Args;
use serde::Serialize;

/// Show a key's four directional neighbors
#[derive(Debug, Clone, Args)]
pub struct NeighborsArgs {
    /// Key to inspect: a single character, or "space", "backspace", "blank"
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Let the blank (unprogrammed) key participate in navigation
    #[arg(long)]
    pub placeholder: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct NeighborsResult {
    key: String,
    up: Option<String>,
    right: Option<String>,
    down: Option<String>,
    left: Option<String>,
}

impl NeighborsArgs {
    /// Execute the neighbors command
    pub fn execute(&self) -> CliResult<()> {
        let graph = KeypadGraph::build(self.placeholder)
            .map_err(|e| CliError::internal(format!("Failed to build keypad graph: {e}")))?;

        let key = parse_key_arg(&self.key)?;
        let node = graph
            .node(key)
            .ok_or_else(|| CliError::validation(format!("'{}' key not found", self.key)))?;

        if self.json {
            let result = NeighborsResult {
                key: key.token(),
                up: node.up.map(Key::token),
                right: node.right.map(Key::token),
                down: node.down.map(Key::token),
                left: node.left.map(Key::token),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Key:   {}", describe(key));
            print_edges(node);
        }

        Ok(())
    }
}

fn print_edges(node: &Node) {
    println!("Up:    {}", render(node.up));
    println!("Right: {}", render(node.right));
    println!("Down:  {}", render(node.down));
    println!("Left:  {}", render(node.left));
}

fn render(edge: Option<Key>) -> String {
    edge.map_or_else(|| "(none)".to_string(), describe)
}

/// Human-readable form for keys whose character does not print well.
fn describe(key: Key) -> String {
    match key {
        Key::Char(' ') => "(space)".to_string(),
        Key::Char(BACKSPACE) => "(backspace)".to_string(),
        Key::Char(c) => c.to_string(),
        Key::Blank => "(blank)".to_string(),
    }
}

fn parse_key_arg(raw: &str) -> CliResult<Key> {
    match raw {
        "space" => Ok(Key::Char(' ')),
        "backspace" => Ok(Key::Char(BACKSPACE)),
        "blank" => Ok(Key::Blank),
        _ => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Key::Char(c)),
                _ => Err(CliError::validation(format!(
                    "'{raw}' is not a single key; use one character or space/backspace/blank"
                ))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_arg_aliases() {
        assert_eq!(parse_key_arg("A").unwrap(), Key::Char('A'));
        assert_eq!(parse_key_arg("space").unwrap(), Key::Char(' '));
        assert_eq!(parse_key_arg("backspace").unwrap(), Key::Char(BACKSPACE));
        assert_eq!(parse_key_arg("blank").unwrap(), Key::Blank);
        assert!(parse_key_arg("not-a-key").is_err());
    }
}
