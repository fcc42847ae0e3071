// Input handling: reading a submission and splitting it into records.

pub mod parser;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a whole submission from a file, or from stdin when the path is `-` or absent.
pub fn read_submission(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read input file {}", p.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read input from stdin")?;
            Ok(text)
        }
    }
}
