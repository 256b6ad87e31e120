use anyhow::Result;
use eventos_core::EventosConfig;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let config_path = EventosConfig::config_path()?;
    let config = EventosConfig::load()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Data:    {}", config.data_path().display());
    println!("  Lock:    {}", config.lock_path().display());
    println!();
    println!("{}", "Server".bold());
    println!("  URL:     {}", config.server_url());
    println!();
    println!("{}", "Effective settings".bold());
    for line in config.to_toml()?.lines() {
        println!("  {line}");
    }

    Ok(())
}
