use clap::Subcommand;
use sortboard_core::Config;

#[derive(Subcommand)]
pub enum ItemsAction {
    /// Print the item registry as JSON
    List,
}

pub fn run(action: ItemsAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    match action {
        ItemsAction::List => {
            println!("{}", serde_json::to_string_pretty(&config.registry())?);
        }
    }
    Ok(())
}
