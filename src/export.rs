// ============================================================================
// File: src/export.rs
// Terminal display and file export
// ============================================================================

use anyhow::Result;
use colored::*;
use std::fs;
use std::path::Path;

/// Prints the generated topics to the terminal. The response text itself is
/// printed line by line without any reformatting.
pub fn print_topics(topics: &str) {
    println!("\n{} {}", "●".bright_cyan(), "Suggested Research Topics".bright_white().bold());
    println!("{}", "─".repeat(40).bright_black());

    for line in topics.lines() {
        println!("{}", line);
    }
}

/// Writes the raw response text to the given path, byte for byte.
pub fn save(path: &Path, topics: &str) -> Result<()> {
    fs::write(path, topics)
        .map_err(|e| anyhow::anyhow!("Failed to save topics to {}: {}", path.display(), e))?;
    Ok(())
}
