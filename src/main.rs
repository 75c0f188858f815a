//! silkstat 命令行工具
//! 读取已解密的存档JSON，输出投影快照（JSON）或纯文本摘要

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use silkstat::{ConfigManager, SaveAnalyzer, SaveDocument, SchemaRegistry, render_summary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// 快照JSON
    Json,
    /// 纯文本摘要
    Summary,
}

#[derive(Parser)]
#[command(name = "silkstat", version, about = "Project a decoded Silksong save into display-ready stats", long_about = None)]
struct Cli {
    /// Decoded save JSON file
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Omit the raw player record from JSON output
    #[arg(long)]
    no_raw: bool,

    /// Treat the input as the player record itself instead of a full save document
    #[arg(long)]
    player_only: bool,

    /// Digit group separator for numbers in the summary
    #[arg(long, default_value_t = ',')]
    separator: char,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Validate the built-in schema before projecting
    #[arg(long)]
    check_schema: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigManager::custom()
        .group_separator(cli.separator)
        .include_raw(!cli.no_raw)
        .verbose(cli.verbose)
        .build();

    let default_level = if config.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let registry = SchemaRegistry::global();
    if cli.check_schema {
        registry.validate().context("built-in schema failed validation")?;
    }

    let document = SaveDocument::from_path(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;

    let analyzer = SaveAnalyzer::new(registry);
    let snapshot = if cli.player_only {
        analyzer
            .analyze(Some(document.root()))
            .context("input does not contain a player record")?
    } else {
        analyzer.analyze_document(&document)?
    };

    let output = match cli.format {
        OutputFormat::Json => snapshot.to_json_string(&config, cli.pretty)?,
        OutputFormat::Summary => render_summary(&snapshot, &config),
    };
    println!("{}", output);

    Ok(())
}
