//! Terminal styling utilities for the command-line output

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "");
pub static LINK: Emoji<'_, '_> = Emoji("🔗 ", "");
pub static GEAR: Emoji<'_, '_> = Emoji("⚙️  ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    let banner = r#"
    ██╗  ██╗███████╗██╗     ██╗     ██╗    ██╗██╗ ██████╗
    ██║  ██║██╔════╝██║     ██║     ██║    ██║██║██╔════╝
    ███████║█████╗  ██║     ██║     ██║ █╗ ██║██║██║  ███╗
    ██╔══██║██╔══╝  ██║     ██║     ██║███╗██║██║██║   ██║
    ██║  ██║███████╗███████╗███████╗╚███╔███╔╝██║╚██████╔╝
    ╚═╝  ╚═╝╚══════╝╚══════╝╚══════╝ ╚══╝╚══╝ ╚═╝ ╚═════╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {}",
        style("Variable selection by information capacity").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Settings shown in the configuration card
pub struct ConfigCard<'a> {
    pub input: &'a Path,
    pub dependent: &'a str,
    pub pool_size: usize,
    pub min: usize,
    pub max: usize,
    pub formula: &'a str,
    pub parallelism: &'a str,
    pub search_space: u64,
}

/// Print configuration card
pub fn print_config(card: &ConfigCard<'_>) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);

    println!("    ┌{}┐", line);
    println!("    │ {} {:<49}│", GEAR, style("Configuration").cyan().bold());
    println!("    ├{}┤", line);
    println!(
        "    │  {} Input:      {:<35}│",
        FOLDER,
        truncate_path(card.input, 34)
    );
    println!(
        "    │  {} Dependent:  {:<35}│",
        TARGET,
        truncate_string(card.dependent, 34)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Candidates: {:<35}│",
        CHART,
        style(card.pool_size).yellow()
    );
    println!(
        "    │  {} Sizes:      {:<35}│",
        LINK,
        style(format!("{} to {}", card.min, card.max)).yellow()
    );
    println!(
        "    │  {} Formula:    {:<35}│",
        CHART,
        style(card.formula).yellow()
    );
    println!(
        "    │  {} Workers:    {:<35}│",
        GEAR,
        style(card.parallelism).yellow()
    );
    println!(
        "    │  {} Search:     {:<35}│",
        LINK,
        style(format!("{} combinations", card.search_space)).yellow()
    );
    println!("    └{}┘", line);
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print elapsed time for a step
pub fn print_step_time(elapsed: std::time::Duration) {
    println!(
        "      {}",
        style(format!("⏱  {:.2?}", elapsed)).dim()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Hellwig selection complete!").green().bold()
    );
    println!();
}

/// Print a styled count message
pub fn print_count(description: &str, count: u64, detail: Option<&str>) {
    if let Some(info) = detail {
        println!(
            "      Found {} {} {}",
            style(count).yellow().bold(),
            description,
            style(info).dim()
        );
    } else {
        println!("      Found {} {}", style(count).yellow().bold(), description);
    }
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_len {
        s.to_string()
    } else {
        let tail: String = chars[chars.len() - (max_len - 3)..].iter().collect();
        format!("...{}", tail)
    }
}
