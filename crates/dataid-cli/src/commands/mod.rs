//! Subcommand implementations.

pub mod canonicalize;
pub mod group;
pub mod id;
pub mod key;

use std::io::{self, Read};

/// Reads input bytes from a file, or stdin if no path is given.
pub fn read_input(input: Option<String>) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    match input {
        Some(path) => {
            let bytes = std::fs::read(&path)
                .map_err(|e| format!("Failed to read file {}: {}", path, e))?;
            Ok(bytes)
        }
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Reads and parses input JSON.
pub fn read_json(input: Option<String>) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let bytes = read_input(input)?;
    let value = serde_json::from_slice(&bytes).map_err(|e| format!("Invalid JSON: {}", e))?;
    Ok(value)
}
