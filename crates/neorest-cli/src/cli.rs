//! CLI command definitions and argument parsing.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// neorest - Inspect a graph database through its REST API.
#[derive(Debug, Parser)]
#[command(name = "neorest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Database base URL (overrides the configuration file)
    #[arg(short, long, global = true, env = "NEOREST_URL")]
    pub url: Option<String>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (ids and names only)
    Quiet,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show a relationship
    Relationship(RelationshipArgs),

    /// List relationship types
    Types,

    /// Show a node
    Node(NodeArgs),

    /// Show the properties of a node or relationship
    Properties(PropertiesArgs),

    /// Show the endpoints advertised by the server
    Info,
}

/// Arguments for the relationship command.
#[derive(Debug, Parser)]
pub struct RelationshipArgs {
    /// Relationship id
    pub id: u64,

    /// Also fetch the start and end nodes
    #[arg(short, long)]
    pub resolve: bool,
}

/// Arguments for the node command.
#[derive(Debug, Parser)]
pub struct NodeArgs {
    /// Node id
    pub id: u64,
}

/// Kind of entity whose properties are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EntityKind {
    /// A node
    Node,
    /// A relationship
    Relationship,
}

/// Arguments for the properties command.
#[derive(Debug, Parser)]
pub struct PropertiesArgs {
    /// Entity kind
    #[arg(value_enum)]
    pub kind: EntityKind,

    /// Entity id
    pub id: u64,
}
