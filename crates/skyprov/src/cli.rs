//! Clap derive structures for the `skyprov` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// skyprov -- service registration and core network policy tooling
#[derive(Debug, Parser)]
#[command(
    name = "skyprov",
    version,
    about = "Inspect provider service packages and core network policy documents",
    long_about = "Prints the Kafka Connect service registration table, renders and\n\
        validates core network policy documents, and queries the MSK Connect\n\
        API through the endpoint a profile resolves to.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration profile to use
    #[arg(long, short = 'p', env = "SKYPROV_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Region (overrides profile)
    #[arg(long, env = "SKYPROV_REGION", global = true)]
    pub region: Option<String>,

    /// Service endpoint URL (overrides profile)
    #[arg(long, env = "SKYPROV_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Output format [default: `defaults.output` from the config file, else table]
    #[arg(long, short = 'o', env = "SKYPROV_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "SKYPROV_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the service registration table
    #[command(alias = "svc")]
    Services,

    /// Render and validate core network policy documents
    Policy(PolicyArgs),

    /// Show the service endpoint the active profile resolves to
    Endpoint,

    /// Query the Kafka Connect (MSK Connect) API
    #[command(alias = "kc")]
    Kafkaconnect(KafkaConnectArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Policy ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PolicyArgs {
    #[command(subcommand)]
    pub command: PolicyCommand,
}

#[derive(Debug, Subcommand)]
pub enum PolicyCommand {
    /// Decode a JSON or YAML document and print its canonical JSON encoding
    Render {
        /// Policy document (.json, .yaml or .yml)
        file: PathBuf,

        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Check a document for duplicate names, bad rule numbers and dangling references
    Validate {
        /// Policy document (.json, .yaml or .yml)
        file: PathBuf,
    },
}

// ── Kafka Connect ────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct KafkaConnectArgs {
    #[command(subcommand)]
    pub command: KafkaConnectCommand,
}

#[derive(Debug, Subcommand)]
pub enum KafkaConnectCommand {
    /// List connectors
    Connectors(ListFilter),

    /// List custom plugins
    CustomPlugins(ListFilter),

    /// List worker configurations
    WorkerConfigurations(ListFilter),

    /// List tags on a resource
    Tags {
        /// Resource ARN
        arn: String,
    },
}

#[derive(Debug, Args)]
pub struct ListFilter {
    /// Only names starting with this prefix
    #[arg(long)]
    pub prefix: Option<String>,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
