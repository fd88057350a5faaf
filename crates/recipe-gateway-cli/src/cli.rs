use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// GraphQL gateway over the recipe and review REST services.
///
/// Exposes recipes and reviews through a single read-only GraphQL schema,
/// fetching each field from the upstream service that owns it.
#[derive(Parser)]
#[command(
    name = "recipe-gateway",
    version,
    about = "GraphQL gateway over the recipe and review REST services",
    after_help = "Use 'recipe-gateway <command> --help' for more information about a command.",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Global options available to all subcommands.
#[derive(Args, Debug)]
pub struct GlobalOpts {
    /// Configuration file path [env: RECIPE_GATEWAY_CONFIG]
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        env = "RECIPE_GATEWAY_CONFIG"
    )]
    pub config: Option<PathBuf>,

    /// Output format: human (default), json, plain
    #[arg(
        long,
        global = true,
        default_value = "human",
        value_parser = ["human", "json", "plain"]
    )]
    pub format: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output [env: NO_COLOR]
    #[arg(long = "no-color", global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL gateway
    Serve(ServeArgs),

    /// Print the GraphQL schema in SDL form
    Schema(SchemaArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Arguments for `recipe-gateway serve`.
///
/// Every flag left unset falls back to the config file.
#[derive(Args)]
pub struct ServeArgs {
    /// Host address to bind
    #[arg(short = 'H', long = "host")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Base URL of the recipe service [env: RECIPE_GATEWAY_RECIPE_URL]
    #[arg(long = "recipe-url", env = "RECIPE_GATEWAY_RECIPE_URL")]
    pub recipe_url: Option<String>,

    /// Base URL of the review service [env: RECIPE_GATEWAY_REVIEW_URL]
    #[arg(long = "review-url", env = "RECIPE_GATEWAY_REVIEW_URL")]
    pub review_url: Option<String>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long = "log-level")]
    pub log_level: Option<String>,
}

/// Arguments for `recipe-gateway schema`.
#[derive(Args)]
pub struct SchemaArgs {
    /// Output file (default: stdout)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

/// Arguments for `recipe-gateway completions`.
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
