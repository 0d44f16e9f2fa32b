use anyhow::Result;
use console::style;
use std::io::{self, Write};

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

pub fn display_version_change(old_version: &str, new_version: &str) {
    println!("\n{}", style("Proposed Version Change:").bold());
    println!("  From: {}", style(old_version).red());
    println!("  To:   {}", style(new_version).green());
}

pub fn display_updated_files(paths: &[std::path::PathBuf]) {
    if paths.is_empty() {
        display_status("No marker files found to update");
        return;
    }

    println!("\n{}", style("Updated marker files:").bold());
    for path in paths {
        println!("  - {}", path.display());
    }
}

/// Prompts for optional release notes.
///
/// A single free-text line; empty input means no notes.
pub fn prompt_release_notes() -> Result<String> {
    print!("\nRelease notes (leave empty to skip): ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub fn confirm_action(prompt: &str) -> Result<bool> {
    print!("\n{} (y/N): ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
