use clap::Subcommand;
use sortboard_core::config::{config_dir, Config};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the active configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Set the auto-return delay in milliseconds
    SetDelay {
        ms: u64,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => {
            println!("{}", config_dir()?.join("config.toml").display());
        }
        ConfigAction::SetDelay { ms } => {
            let mut config = Config::load_or_default();
            config.board.return_delay_ms = ms;
            config.save()?;
            println!("board.return_delay_ms = {ms}");
        }
    }
    Ok(())
}
