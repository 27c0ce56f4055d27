//! Config command handler.

use context_engineering_mcp::{Result, ServerConfig};

/// Config command.
pub fn cmd_config(config: &ServerConfig, show: bool) -> Result<()> {
    if !show {
        match ServerConfig::default_path() {
            Some(path) => println!("Config file: {}", path.display()),
            None => println!("Config file: (no home directory)"),
        }
        println!("Use --show to print the effective configuration.");
        return Ok(());
    }

    println!("# Effective configuration");
    print!("{}", config.to_toml()?);
    Ok(())
}
