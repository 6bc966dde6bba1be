//! Sequence generation command.

use crate::cli::common::{CliError, CliResult};
use crate::graph::KeypadGraph;
use crate::sequence::{SequenceError, SequenceGenerator};
use clap::Args;
use serde::Serialize;

/// Generate the press sequence that types a sentence
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Sentence to type by navigating the pad
    #[arg(value_name = "SENTENCE")]
    pub sentence: String,

    /// Precede each press with the key it was taken from
    #[arg(long)]
    pub with_keys: bool,

    /// Let the blank (unprogrammed) key participate in navigation
    #[arg(long)]
    pub placeholder: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct GenerateResult {
    sentence: String,
    placeholder: bool,
    press_count: usize,
    tokens: Vec<String>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let graph = KeypadGraph::build(self.placeholder)
            .map_err(|e| CliError::internal(format!("Failed to build keypad graph: {e}")))?;

        let mut generator = SequenceGenerator::new(&self.sentence, &graph)
            .map_err(|e| CliError::validation(e.to_string()))?;
        generator.process().map_err(|e| match e {
            SequenceError::Disconnected { .. } => CliError::internal(e.to_string()),
            SequenceError::EmptySentence | SequenceError::KeyNotFound(_) => {
                CliError::validation(e.to_string())
            }
        })?;

        let tokens = generator.serialize(self.with_keys);
        let press_count = generator.segments().iter().map(Vec::len).sum();

        if self.json {
            let result = GenerateResult {
                sentence: self.sentence.clone(),
                placeholder: self.placeholder,
                press_count,
                tokens,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            for token in &tokens {
                println!("{token}");
            }
        }

        Ok(())
    }
}
