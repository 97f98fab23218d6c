//! Command-line interface for the typegraph utility
//!
//! Provides a CLI to render PlantUML class diagrams from a JSON type catalog.

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use typegraph::core::logging::init_logging;
use typegraph::plugins::{DepthLimit, FieldFilter, GraphOptions, Orchestrator, TypeCatalog};
use typegraph::TypeRef;

/// Typegraph - Render PlantUML class diagrams from type metadata
#[derive(Parser)]
#[command(name = "typegraph")]
#[command(about = "A Rust utility to render PlantUML class diagrams from a type catalog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Options shared by every diagram command
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// JSON type catalog
    #[arg(short, long)]
    pub catalog: PathBuf,

    /// Fully-qualified root type (repeatable)
    #[arg(short, long = "root", required = true)]
    pub roots: Vec<String>,

    /// Maximum expansion depth (-1 for unbounded)
    #[arg(short, long, default_value_t = 2, allow_negative_numbers = true)]
    pub depth: i64,

    /// Package substring accepted in single-root mode (repeatable);
    /// defaults to the packages of the roots
    #[arg(short, long = "package")]
    pub packages: Vec<String>,

    /// Additional field name to leave out (repeatable)
    #[arg(long = "exclude-field")]
    pub excluded_fields: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one diagram for the given roots
    Render {
        #[command(flatten)]
        graph: GraphArgs,

        /// Output file for the diagram (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render one diagram per class reachable from the roots
    Split {
        #[command(flatten)]
        graph: GraphArgs,

        /// Directory receiving one <type>.puml file per class
        #[arg(long)]
        out_dir: PathBuf,
    },

    /// List the nodes of the graph in registration order
    Nodes {
        #[command(flatten)]
        graph: GraphArgs,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Serialize)]
struct NodeEntry<'a> {
    name: &'a str,
    display_name: &'a str,
    kind: &'static str,
}

#[derive(Debug, Serialize)]
struct NodeListing<'a> {
    nodes: Vec<NodeEntry<'a>>,
    total: usize,
}

/// Main CLI application
pub struct TypegraphApp {
    field_filter: FieldFilter,
}

impl TypegraphApp {
    /// Create a new application instance with the default field filter
    pub fn new() -> Self {
        Self::with_field_filter(FieldFilter::default())
    }

    pub fn with_field_filter(field_filter: FieldFilter) -> Self {
        Self { field_filter }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over the flags
        let log_level_str = std::env::var("TYPEGRAPH_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("TYPEGRAPH_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Typegraph v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Render { graph, output } => self.render_command(&graph, output, cli.verbose),
            Commands::Split { graph, out_dir } => self.split_command(&graph, &out_dir, cli.verbose),
            Commands::Nodes { graph, json } => self.nodes_command(&graph, json, cli.verbose),
        }
    }

    /// Handle the render command
    fn render_command(&self, args: &GraphArgs, output: Option<PathBuf>, verbose: bool) -> Result<()> {
        let catalog = self.load_catalog(&args.catalog, verbose)?;
        let orchestrator = self.orchestrator(&catalog, args);

        let diagram = orchestrator.generate(&args.roots)?;
        if verbose {
            eprintln!("Rendered diagram for {} root(s)", args.roots.len());
        }
        self.write_output(output, &diagram)
    }

    /// Handle the split command
    fn split_command(&self, args: &GraphArgs, out_dir: &Path, verbose: bool) -> Result<()> {
        let catalog = self.load_catalog(&args.catalog, verbose)?;
        let orchestrator = self.orchestrator(&catalog, args);

        let diagrams = orchestrator.generate_per_type(&args.roots)?;
        fs::create_dir_all(out_dir).map_err(|e| {
            anyhow!("Failed to create output directory '{}': {}", out_dir.display(), e)
        })?;

        for diagram in &diagrams {
            let path = out_dir.join(diagram.file_name());
            fs::write(&path, &diagram.text)
                .map_err(|e| anyhow!("Failed to write output file '{}': {}", path.display(), e))?;
            debug!(path = %path.display(), "Diagram written");
            println!("{}", path.display());
        }

        info!(count = diagrams.len(), out_dir = %out_dir.display(), "Split finished");
        if verbose {
            eprintln!("Wrote {} diagram(s) to {}", diagrams.len(), out_dir.display());
        }
        Ok(())
    }

    /// Handle the nodes command
    fn nodes_command(&self, args: &GraphArgs, json: bool, verbose: bool) -> Result<()> {
        let catalog = self.load_catalog(&args.catalog, verbose)?;
        let orchestrator = self.orchestrator(&catalog, args);
        let graph = orchestrator.build_graph(&args.roots)?;

        if json {
            let listing = NodeListing {
                nodes: graph
                    .nodes()
                    .map(|n| NodeEntry {
                        name: n.type_ref().full_name(),
                        display_name: n.display_name(),
                        kind: n.kind().keyword(),
                    })
                    .collect(),
                total: graph.node_count(),
            };
            println!("{}", serde_json::to_string_pretty(&listing)?);
        } else {
            for node in graph.nodes() {
                println!(
                    "{}\t{}\t{}",
                    node.type_ref().full_name(),
                    node.display_name(),
                    node.kind()
                );
            }
        }
        Ok(())
    }

    fn load_catalog(&self, path: &Path, verbose: bool) -> Result<TypeCatalog> {
        let catalog = TypeCatalog::from_path(path)
            .map_err(|e| anyhow!("Failed to load catalog '{}': {}", path.display(), e))?;
        if verbose {
            eprintln!("Loaded {} type(s) from {}", catalog.len(), path.display());
        }
        Ok(catalog)
    }

    fn orchestrator<'a>(&self, catalog: &'a TypeCatalog, args: &GraphArgs) -> Orchestrator<'a> {
        let field_filter = args
            .excluded_fields
            .iter()
            .fold(self.field_filter.clone(), |filter, name| filter.with_excluded_name(name.as_str()));
        Orchestrator::new(catalog)
            .with_options(Self::graph_options(args))
            .with_field_filter(field_filter)
    }

    /// Build graph options; without `--package` the roots' own packages
    /// are used as filters
    pub fn graph_options(args: &GraphArgs) -> GraphOptions {
        let options = GraphOptions::new().with_max_depth(DepthLimit::from_signed(args.depth));
        if !args.packages.is_empty() {
            return options.with_package_filters(args.packages.iter().cloned());
        }

        let mut packages: Vec<String> = Vec::new();
        for root in &args.roots {
            if let Some(package) = TypeRef::new(root.as_str()).package() {
                if !packages.iter().any(|p| p == package) {
                    packages.push(package.to_string());
                }
            }
        }
        options.with_package_filters(packages)
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content)
                    .map_err(|e| anyhow!("Failed to write output file '{}': {}", path.display(), e))?;
            }
            _ => {
                print!("{}", content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }
}

impl Default for TypegraphApp {
    fn default() -> Self {
        Self::new()
    }
}
