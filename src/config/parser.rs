//! Layered configuration loading: defaults, .env file, environment, CLI

use crate::cli::Cli;
use crate::error::Result;
use crate::models::Config;

/// Load the effective configuration for a run
///
/// Later layers override earlier ones: built-in defaults, then a `.env`
/// file if present, then process environment variables, then CLI arguments.
/// The merged configuration is validated before it is returned, so an
/// unrecognized benchmark mode or out-of-range setting never reaches a
/// publisher.
pub fn load_config(cli: Cli) -> Result<Config> {
    // A missing .env file is not an error
    dotenv::dotenv().ok();

    let mut config = Config::default();
    config.merge_from_env()?;
    apply_cli_overrides(&mut config, &cli)?;

    config.validate()?;
    Ok(config)
}

fn apply_cli_overrides(config: &mut Config, cli: &Cli) -> Result<()> {
    if let Some(mode) = &cli.mode {
        config.mode = mode.parse()?;
    }

    if let Some(messages) = cli.messages {
        config.num_messages = messages;
    }

    if let Some(size) = cli.size {
        config.message_size = size;
    }

    if let Some(use_color) = cli.use_colors() {
        config.enable_color = use_color;
    }

    if cli.verbose {
        config.verbose = true;
    }

    if cli.debug {
        config.debug = true;
    }

    Ok(())
}
