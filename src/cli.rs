// CLI module - command-line argument parsing and handlers
//
// Provides a config subcommand:
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults

use crate::config::{Config, VERSION};
use clap::{Parser, Subcommand};

/// MK Clothing storefront - terminal client for the shop backend
#[derive(Parser)]
#[command(name = "mkshop")]
#[command(version = VERSION)]
#[command(about = "Terminal storefront client for the MK Clothing shop backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Handle CLI commands. Returns true if a command was handled (exit after).
pub fn handle_cli() -> bool {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { show, path, reset }) => {
            if show {
                handle_config_show();
            } else if path {
                handle_config_path();
            } else if reset {
                handle_config_reset();
            } else {
                println!("Usage: mkshop config [--show|--path|--reset]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --path    Show config file path");
                println!("  --reset   Reset config file to defaults");
            }
            true
        }
        None => false, // No subcommand, run the storefront
    }
}

fn handle_config_show() {
    // Effective config: file + env applied, rendered in file format
    let config = Config::from_env();
    print!("{}", config.to_toml());
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: could not determine config path");
        std::process::exit(1);
    };

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error: could not create {}: {}", parent.display(), e);
            std::process::exit(1);
        }
    }

    match std::fs::write(&path, Config::default().to_toml()) {
        Ok(()) => println!("Config reset: {}", path.display()),
        Err(e) => {
            eprintln!("Error: could not write {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
}
