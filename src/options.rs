use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Report rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `  - domain: count` lines
    #[default]
    Text,
    Json,
    Yaml,
    Csv,
}
