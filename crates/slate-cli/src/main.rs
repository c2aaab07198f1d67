//! protoc-gen-slate - Slate documentation generator for protobuf schemas
//!
//! Started by protoc without arguments this binary runs as a code generator
//! plugin. The subcommands cover offline rendering from a descriptor set,
//! configuration management and shell completions.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;
mod plugin;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    let result = Config::load_with_file(cli.config.as_deref()).and_then(|config| {
        if let Err(e) = init_logging(&cli, &config) {
            eprintln!("Failed to initialize logging: {}", e);
        }
        run(cli, config)
    });

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("{}", error::format_error(&e, control::SHOULD_COLORIZE.should_colorize()));
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli, config), fields(command = ?cli.command))]
fn run(cli: Cli, config: Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let mut output = OutputWriter::new(cli.output, cli.use_color(), cli.quiet);
    let Some(command) = cli.command else {
        return plugin::run(&config);
    };

    tracing::info!(verbosity = cli.verbose, "Executing command");

    match command {
        Commands::Render(args) => handlers::handle_render(args, &config, &mut output),
        Commands::Config(args) => handlers::handle_config(args, &config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());
    if cli.verbosity_level() < 3 {
        logging_config.format = config.logging.format;
    }
    if cli.verbosity_level() == 0 {
        if let Some(level) = &config.logging.level {
            logging_config.level = level.clone();
        }
    }

    // Environment wins over flags and the config file
    logging_config.merge_with_env();

    if cli.quiet {
        logging_config.level = "error".to_string();
    }

    logging::init_logging(logging_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["protoc-gen-slate"]);
        assert_eq!(cli.verbosity_level(), 0);
        assert!(cli.command.is_none());

        let cli = Cli::parse_from(["protoc-gen-slate", "-vv", "render", "set.binpb"]);
        assert_eq!(cli.verbosity_level(), 2);

        let cli = Cli::parse_from(["protoc-gen-slate", "--quiet", "completions", "bash"]);
        assert_eq!(cli.verbosity_level(), 0);
    }
}
