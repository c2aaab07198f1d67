//! Configuration command handlers

use crate::cli::{ConfigAction, ConfigArgs, ConfigFormat, ConfigInitArgs, ConfigShowArgs};
use crate::config::{Config, FileFormat};
use crate::error::Result;
use crate::output::OutputWriter;

/// Handle the config command
pub fn handle_config(args: ConfigArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        ConfigAction::Show(show_args) => handle_config_show(show_args, config, output),
        ConfigAction::Init(init_args) => handle_config_init(init_args, output),
    }
}

/// Print the effective configuration
fn handle_config_show(
    args: ConfigShowArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let format = match args.format {
        ConfigFormat::Yaml => FileFormat::Yaml,
        ConfigFormat::Json => FileFormat::Json,
        ConfigFormat::Toml => FileFormat::Toml,
    };
    let content = config.to_string_as(format)?;
    if content.ends_with('\n') {
        output.write(&content)
    } else {
        output.writeln(&content)
    }
}

/// Write a default configuration file
fn handle_config_init(args: ConfigInitArgs, output: &mut OutputWriter) -> Result<()> {
    if args.path.exists() && !args.force {
        return output.warning(&format!(
            "Config already exists at {} (use --force to overwrite)",
            args.path.display()
        ));
    }

    Config::default().save(&args.path)?;
    output.success(&format!("✓ Created config at {}", args.path.display()))
}
