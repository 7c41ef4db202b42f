use crate::convention::NamingConvention;
use crate::ConvertResult;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonRename {
    original: String,
    renamed: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    names_converted: usize,
    names_changed: usize,
    renames: Vec<JsonRename>,
}

pub fn print_renames(result: &ConvertResult, colored_output: bool, format: &OutputFormat) {
    match format {
        OutputFormat::Text => print_text_renames(result, colored_output),
        OutputFormat::Json => print_json_renames(result),
    }
}

fn print_text_renames(result: &ConvertResult, colored_output: bool) {
    for rename in &result.renames {
        if colored_output {
            println!(
                "{} {} {}",
                rename.original.dimmed(),
                "→".dimmed(),
                rename.renamed.green().bold()
            );
        } else {
            println!("{} -> {}", rename.original, rename.renamed);
        }
    }
}

fn print_json_renames(result: &ConvertResult) {
    let renames: Vec<JsonRename> = result
        .renames
        .iter()
        .map(|r| JsonRename {
            original: r.original.clone(),
            renamed: r.renamed.clone(),
        })
        .collect();

    let output = JsonOutput {
        names_converted: result.renames.len(),
        names_changed: result.changed_count,
        renames,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_summary(result: &ConvertResult, colored: bool) {
    let total = result.renames.len();
    let name_word = if total == 1 { "name" } else { "names" };

    eprintln!();
    if colored {
        eprintln!(
            "{} {} {} converted, {} changed",
            "✓".green().bold(),
            total.to_string().bold(),
            name_word,
            result.changed_count.to_string().bold()
        );
    } else {
        eprintln!(
            "✓ {} {} converted, {} changed",
            total, name_word, result.changed_count
        );
    }
}

pub fn print_conventions(colored: bool) {
    for convention in NamingConvention::ALL {
        if colored {
            println!(
                "  {:8} {}",
                convention.to_string().cyan().bold(),
                convention.sample().dimmed()
            );
        } else {
            println!("  {:8} {}", convention, convention.sample());
        }
    }
}
