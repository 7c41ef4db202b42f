use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recase::cli::output::{self, OutputFormat};
use recase::{from_camel_case, Config, ConvertResult, NamingConvention};
use std::io::{self, BufRead};

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "A fast identifier naming-convention converter", long_about = None)]
struct Cli {
    /// Names to convert (reads stdin, one name per line, when omitted)
    #[arg(value_name = "NAMES")]
    names: Vec<String>,

    /// Target naming convention (null, camel, pascal, snake, kebab, lower)
    #[arg(short = 't', long)]
    to: Option<NamingConvention>,

    /// Map styled field names back to member names instead
    #[arg(short, long)]
    reverse: bool,

    /// Custom separator inserted at each word boundary (overrides --to)
    #[arg(short, long)]
    separator: Option<String>,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// List supported naming conventions
    Conventions,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    // Handle subcommands
    if let Some(Commands::Conventions) = cli.command {
        output::print_conventions(!cli.no_color);
        return Ok(());
    }

    // Load configuration
    let config = Config::load(
        cli.to,
        cli.separator.clone(),
        cli.format.map(|f| f.to_string()),
    )?;

    let format: OutputFormat = config
        .format
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))
        .context("Invalid output format in configuration")?;

    // Collect input names
    let names = if cli.names.is_empty() {
        read_stdin_names()?
    } else {
        cli.names.clone()
    };

    // Convert
    let mut result = ConvertResult::default();
    for name in names {
        let renamed = convert(&name, &config, cli.reverse);
        result.push(name, renamed);
    }

    output::print_renames(&result, !cli.no_color, &format);

    if matches!(format, OutputFormat::Text) {
        output::print_summary(&result, !cli.no_color);
    }

    Ok(())
}

fn convert(name: &str, config: &Config, reverse: bool) -> String {
    if reverse {
        return config.convention.reverse(name);
    }
    match &config.separator {
        Some(separator) => from_camel_case(name, separator),
        None => config.convention.apply(name),
    }
}

fn read_stdin_names() -> Result<Vec<String>> {
    let mut names = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let name = line.trim();
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}
