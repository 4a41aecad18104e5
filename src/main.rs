//! stride-tools: rule-based STRIDE threat classification
//!
//! Maps detected cloud architecture components to STRIDE threats and scores
//! the resulting architecture.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::path::PathBuf;
use stride_tools::{
    classify::{is_blank, CategoryClassifier},
    cli,
    config::{self, AnalyzeConfig, AppConfig, ConfigPreset, InputSource},
    engine::StrideEngine,
    model::{Category, RiskLevel, Severity},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInputs:",
        "\n  component names, detections JSON ([{class, confidence, box}] or [names])",
        "\n\nOutput Formats:",
        "\n  summary, table, json, export, markdown",
        "\n\nCategories:",
        "\n  15 component categories, 166 seeded component names"
    )
}

#[derive(Parser)]
#[command(name = "stride-tools")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version, long_version = build_long_version())]
#[command(about = "Rule-based STRIDE threat classification for cloud architectures", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success (risk level below --fail-on, or no threshold)
    1  Risk level at or above --fail-on
    3  Error occurred

EXAMPLES:
    # Analyze components by name
    stride-tools analyze EC2 RDS S3 IAM

    # Analyze detector output, failing the build at HIGH risk
    stride-tools analyze --detections detections.json --fail-on high

    # Export JSON for storage or a UI
    stride-tools analyze --detections detections.json -o export -O stride.json

    # See why a name lands in a category
    stride-tools classify \"API Gateway Endpoint\"")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "STRIDE_TOOLS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `analyze` subcommand
#[derive(Parser)]
struct AnalyzeArgs {
    /// Component names to analyze, in order
    #[arg(required_unless_present = "detections", conflicts_with = "detections")]
    names: Vec<String>,

    /// Detections JSON file (`-` for stdin)
    #[arg(short, long, value_name = "FILE")]
    detections: Option<PathBuf>,

    /// Output format (default: summary, or the config file's format)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Start from a named preset instead of the config file (default, strict, permissive, ci)
    #[arg(long)]
    preset: Option<String>,

    /// Drop detections below this confidence (0.0-1.0)
    #[arg(long)]
    min_confidence: Option<f64>,

    /// Analyze repeated detections once per occurrence
    #[arg(long)]
    no_dedup: bool,

    /// Map a component name onto a category (NAME=CATEGORY, repeatable)
    #[arg(long = "map", value_name = "NAME=CATEGORY", value_parser = parse_mapping)]
    mappings: Vec<(String, Category)>,

    /// Exit with code 1 when the risk level reaches this level
    #[arg(long)]
    fail_on: Option<RiskLevel>,

    /// Hide risks below this severity in text reports (critical, high, medium, low)
    #[arg(long, value_parser = parse_severity)]
    min_severity: Option<Severity>,

    /// Maximum components listed in text reports
    #[arg(long)]
    max_items: Option<usize>,

    /// Report title for text formats
    #[arg(long)]
    title: Option<String>,

    /// Compact JSON output
    #[arg(long)]
    compact: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze components and report their STRIDE threats
    Analyze(AnalyzeArgs),

    /// Show the category each name resolves to
    Classify {
        /// Component names
        #[arg(required = true)]
        names: Vec<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List categories with their STRIDE profiles
    Categories {
        /// Also list the seeded component names per category
        #[arg(long)]
        components: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .stride-tools.yaml in the current directory
    Init,
}

fn parse_severity(s: &str) -> Result<Severity, String> {
    Severity::parse(s).ok_or_else(|| format!("invalid severity '{s}'"))
}

fn parse_mapping(s: &str) -> Result<(String, Category), String> {
    let (name, category) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=CATEGORY, got '{s}'"))?;
    if is_blank(name) {
        return Err("component name must not be blank".to_string());
    }
    let category = category.parse::<Category>().map_err(|e| e.to_string())?;
    Ok((name.to_string(), category))
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match run(cli) {
        Ok(exit_codes::SUCCESS) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Analyze(args) => {
            let mut overrides = AppConfig::builder()
                .output_format(args.output.unwrap_or_default())
                .output_file(args.output_file)
                .no_color(cli.no_color)
                .min_severity(args.min_severity)
                .fail_on(args.fail_on)
                .quiet(cli.quiet)
                .deduplicate(!args.no_dedup);
            if let Some(confidence) = args.min_confidence {
                overrides = overrides.min_confidence(confidence);
            }
            for (name, category) in args.mappings {
                overrides = overrides.custom_mapping(name, category);
            }
            let mut overrides = overrides.build();
            overrides.output.pretty = !args.compact;
            overrides.output.max_items = args.max_items;

            let mut app = match args.preset.as_deref() {
                Some(name) => {
                    let preset = ConfigPreset::from_name(name)
                        .with_context(|| format!("unknown preset '{name}'"))?;
                    let mut app = AppConfig::from_preset(preset);
                    app.merge(&overrides);
                    app
                }
                None => AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides).0,
            };
            // An explicit `-o summary` equals the default, so merge cannot see it
            if let Some(format) = args.output {
                app.output.format = format;
            }

            let input = match args.detections {
                Some(path) => InputSource::DetectionsFile(path),
                None => InputSource::Names(args.names),
            };
            let mut config = AnalyzeConfig::from_app(input, app);
            config.title = args.title;

            cli::run_analyze(config)
        }

        Commands::Classify { names, json } => {
            let (app, _) = config::load_or_default(cli.config.as_deref());
            let classifier = CategoryClassifier::with_custom_mappings(app.analysis.custom_mappings);
            cli::run_classify(&classifier, &names, json)?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Categories { components } => {
            let (app, _) = config::load_or_default(cli.config.as_deref());
            let engine = StrideEngine::with_classifier(CategoryClassifier::with_custom_mappings(
                app.analysis.custom_mappings,
            ));
            cli::run_categories(&engine, components);
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "stride-tools", &mut std::io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => {
            match action {
                ConfigAction::Show => {
                    let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                    if let Some(path) = &loaded_from {
                        eprintln!("# Loaded from: {}", path.display());
                    } else {
                        eprintln!("# No config file found; showing defaults");
                    }
                    let yaml =
                        serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
                    print!("{yaml}");
                }
                ConfigAction::Path => {
                    let search_paths: [Option<String>; 3] = [
                        std::env::current_dir()
                            .ok()
                            .map(|p| p.display().to_string()),
                        dirs::config_dir().map(|p| p.join("stride-tools").display().to_string()),
                        dirs::home_dir().map(|p| p.display().to_string()),
                    ];
                    eprintln!("Config file search paths (in order):");
                    for path in search_paths.into_iter().flatten() {
                        eprintln!("  {path}");
                    }
                    eprintln!();
                    eprintln!("Recognized file names:");
                    for name in &[
                        ".stride-tools.yaml",
                        ".stride-tools.yml",
                        "stride-tools.yaml",
                        "stride-tools.yml",
                    ] {
                        eprintln!("  {name}");
                    }
                    eprintln!();
                    match config::discover_config_file(cli.config.as_deref()) {
                        Some(path) => eprintln!("Active config file: {}", path.display()),
                        None => eprintln!("No config file found."),
                    }
                }
                ConfigAction::Init => {
                    let target = std::env::current_dir()
                        .context("cannot determine current directory")?
                        .join(".stride-tools.yaml");
                    if target.exists() {
                        anyhow::bail!(
                            "{} already exists. Remove it first to re-initialize.",
                            target.display()
                        );
                    }
                    let content = config::generate_full_example_config();
                    std::fs::write(&target, content)
                        .with_context(|| format!("failed to write {}", target.display()))?;
                    eprintln!("Created {}", target.display());
                }
            }
            Ok(exit_codes::SUCCESS)
        }
    }
}
