//! canonsql: convert MySQL parse trees to the canonical SQL AST
//!
//! Reads dialect trees as JSON (one node or an array of statements) and
//! prints the converted trees.
//!
//! # Usage
//!
//! ```bash
//! # Convert a dump produced by the front end
//! canonsql statements.json
//!
//! # From stdin, Rust debug layout
//! cat statements.json | canonsql - --format pretty
//!
//! # Show what each statement turned into
//! canonsql explain statements.json
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use canonsql::prelude::*;

#[derive(Parser)]
#[command(name = "canonsql")]
#[command(version)]
#[command(about = "Convert MySQL parse trees into the canonical SQL AST", long_about = None)]
#[command(after_help = "EXAMPLES:
    canonsql statements.json
    canonsql - --format pretty < statements.json
    canonsql explain statements.json --verbose")]
struct Cli {
    /// JSON file with dialect trees, or `-` for stdin
    input: Option<PathBuf>,

    /// Output format: json or pretty
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Log unsupported constructs
    #[arg(short, long)]
    verbose: bool,

    /// Config file (defaults to <config dir>/canonsql/config.toml)
    #[arg(short, long, env = "CANONSQL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize each statement: kinds, parameters, skipped constructs
    Explain {
        /// JSON file with dialect trees, or `-` for stdin
        input: PathBuf,
    },
}

/// A dump holds either one statement or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum Input {
    Many(Vec<dialect::Node>),
    One(dialect::Node),
}

impl Input {
    fn into_vec(self) -> Vec<dialect::Node> {
        match self {
            Input::Many(nodes) => nodes,
            Input::One(node) => vec![node],
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = Config::load(path)
                .with_context(|| format!("loading config {}", path.display()))?;
            config.apply_env(std::env::var(canonsql::config::DEBUG_ENV).ok().as_deref());
            config
        }
        None => Config::load_default().context("loading config")?,
    };
    if cli.verbose {
        config.debug = true;
    }
    if let Some(format) = cli.format {
        config.output = format;
    }
    init_tracing(config.debug);

    match &cli.command {
        Some(Commands::Explain { input }) => explain(&read_input(input)?),
        None => match &cli.input {
            Some(input) => convert_all(&read_input(input)?, &config),
            None => {
                println!("{}", "canonsql - MySQL parse tree converter".cyan().bold());
                println!();
                println!("Usage: canonsql <INPUT> [OPTIONS]");
                println!();
                println!("Try: canonsql --help");
                Ok(())
            }
        },
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("canonsql=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: &Path) -> anyhow::Result<Vec<dialect::Node>> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };
    let input: Input = serde_json::from_str(&text).context("decoding dialect trees")?;
    Ok(input.into_vec())
}

fn convert_all(nodes: &[dialect::Node], config: &Config) -> anyhow::Result<()> {
    let mut failed = 0;
    for (i, node) in nodes.iter().enumerate() {
        // One converter per statement keeps parameter numbers per statement.
        match convert_with_config(node, config) {
            Ok(out) => print_node(&out, config.output)?,
            Err(e) => {
                failed += 1;
                eprintln!(
                    "{} statement {} ({}): {}",
                    "Error:".red().bold(),
                    i + 1,
                    node.kind(),
                    e
                );
            }
        }
    }
    if failed > 0 {
        anyhow::bail!("{} of {} statements failed to convert", failed, nodes.len());
    }
    Ok(())
}

fn print_node(node: &ast::Node, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(node)?),
        OutputFormat::Pretty => println!("{:#?}", node),
    }
    Ok(())
}

fn explain(nodes: &[dialect::Node]) -> anyhow::Result<()> {
    println!("{}", "canonsql statement summary".cyan().bold());
    println!();

    for (i, node) in nodes.iter().enumerate() {
        let mut skipped: Vec<Diagnostic> = Vec::new();
        let result = Converter::with_sink(&mut skipped).convert(node);

        println!(
            "{} {}",
            format!("#{}", i + 1).dimmed(),
            node.kind().white().bold()
        );
        match result {
            Ok(out) => {
                println!("  {} {}", "Converted:".dimmed(), out.to_string().green());
                let params = out.param_refs();
                if !params.is_empty() {
                    let numbers: Vec<String> =
                        params.iter().map(|p| format!("${}", p.number)).collect();
                    println!("  {} {}", "Params:".dimmed(), numbers.join(", ").cyan());
                }
                for diagnostic in &skipped {
                    println!("  {} {}", "Skipped:".dimmed(), diagnostic.to_string().yellow());
                }
            }
            Err(e) => println!("  {} {}", "Failed:".dimmed(), e.to_string().red()),
        }
    }
    Ok(())
}
