use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::prelude::*;

mod commands;
mod config;
mod vault;

use commands::{ConfigCommand, PlanCommand, RecipeCommand, ShoppingCommand, ThemeCommand};
use config::Config;
use vault::Vault;

#[derive(Parser)]
#[command(name = "vault")]
#[command(version)]
#[command(about = "A recipe manager with a weekly meal plan and shopping list", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage recipes
    Recipe(RecipeCommand),

    /// Manage the weekly meal plan
    Plan(PlanCommand),

    /// Manage the shopping list
    Shopping(ShoppingCommand),

    /// Show or switch the display theme
    Theme(ThemeCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipe_vault=warn,recipe_vault_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let cli_config_path = cli.config.clone();
    let config = Config::load(cli.config)?;

    match &cli.command {
        Some(Commands::Recipe(cmd)) => cmd.run(&mut Vault::open(&config))?,
        Some(Commands::Plan(cmd)) => cmd.run(&mut Vault::open(&config))?,
        Some(Commands::Shopping(cmd)) => cmd.run(&mut Vault::open(&config))?,
        Some(Commands::Theme(cmd)) => cmd.run(&mut Vault::open(&config))?,
        Some(Commands::Config(cmd)) => cmd.run(&config, cli_config_path)?,
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}
