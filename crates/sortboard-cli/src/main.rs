use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "sortboard-cli", version, about = "Sortboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive sorting session (reads item names from stdin)
    Run {
        /// Override the configured auto-return delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// Scripted session against a virtual clock; prints the event log
    Simulate {
        /// Override the configured auto-return delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Script tokens: pick NAME | return NAME | wait MS | show
        #[arg(required = true)]
        script: Vec<String>,
    },
    /// Item registry
    Items {
        #[command(subcommand)]
        action: commands::items::ItemsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run { delay_ms } => commands::run::run(delay_ms),
        Commands::Simulate { delay_ms, script } => commands::simulate::run(delay_ms, &script),
        Commands::Items { action } => commands::items::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
