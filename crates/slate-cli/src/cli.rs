//! Command-line interface argument parsing and definitions
//!
//! Without a subcommand the binary behaves as a protoc plugin: protoc starts
//! it with no arguments and speaks the plugin protocol over stdin/stdout.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// protoc-gen-slate - Slate API documentation from protobuf schemas
///
/// Run by protoc as `--slate_out=DIR --slate_opt=languages=protobuf;ruby`, or
/// directly against a compiled descriptor set with `render`.
#[derive(Parser, Debug)]
#[command(
    name = "protoc-gen-slate",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    /// Enable verbose logging (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SLATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for command results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run; protoc plugin mode when absent
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render documentation from an encoded FileDescriptorSet
    Render(RenderArgs),

    /// Manage configuration files and settings
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Encoded FileDescriptorSet, e.g. from `buf build -o set.binpb`
    #[arg(value_name = "DESCRIPTOR_SET")]
    pub descriptor_set: PathBuf,

    /// Directory receiving the generated documents
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out: PathBuf,

    /// `;` separated language tabs, e.g. `protobuf;ruby`
    #[arg(short, long)]
    pub languages: Option<String>,

    /// Aggregated index path, relative to the output directory
    #[arg(long)]
    pub index_path: Option<String>,

    /// Root directory holding the schema sources
    #[arg(long)]
    pub source_dir: Option<PathBuf>,

    /// Document granularity
    #[arg(long, value_enum)]
    pub unit: Option<UnitArg>,

    /// Only document the packages owning these files (repeatable)
    #[arg(long = "file", value_name = "PROTO")]
    pub files: Vec<String>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show(ConfigShowArgs),

    /// Write a configuration file with default values
    Init(ConfigInitArgs),
}

/// Arguments for config show
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Show configuration in specified format
    #[arg(short, long, value_enum, default_value = "yaml")]
    pub format: ConfigFormat,
}

/// Arguments for config init
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the file; the extension selects the format
    #[arg(long, default_value = ".slate.yaml")]
    pub path: PathBuf,

    /// Force overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Configuration file formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// YAML format
    Yaml,
    /// JSON format
    Json,
    /// TOML format
    Toml,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Document granularity
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    /// One document per package
    Package,
    /// One document per schema file
    File,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl From<UnitArg> for slate_core::UnitKind {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Package => slate_core::UnitKind::Package,
            UnitArg::File => slate_core::UnitKind::File,
        }
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
