//! Configuration commands.
//!
//! - `config show`: Display the effective configuration
//! - `config get` / `config set`: Read or write one key
//! - `config path`: Print where the config file lives

use owo_colors::OwoColorize;

use crate::config::{API_BASE_ENV, CONFIG_KEYS, Config};
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(api_base: Option<&str>) -> Result<()> {
    let config = Config::load()?;

    println!("{}\n", "Configuration:".cyan().bold());
    for key in CONFIG_KEYS {
        println!("{}: {}", key.cyan(), config.get(key)?);
    }

    let effective = config.resolve_api_base(api_base)?;
    if effective != config.api_base {
        let source = if api_base.is_some() {
            "--api-base".to_string()
        } else {
            format!("${}", API_BASE_ENV)
        };
        println!(
            "\n{}",
            format!("API base in use: {} (from {})", effective, source).yellow()
        );
    }

    println!(
        "\n{}",
        format!("Config file: {}", Config::config_path()?.display()).dimmed()
    );
    Ok(())
}

/// Print one configuration value
pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;
    println!("{}", config.get(key)?);
    Ok(())
}

/// Set one configuration value and save the file
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    println!("Set {} to {}", key.cyan(), config.get(key)?);
    Ok(())
}

/// Print the config file path
pub fn cmd_config_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}
