use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use valcount_networks::{load_endpoints, networks};

#[derive(Parser)]
#[command(name = "valcount-networks")]
#[command(about = "Inspect the endpoint lists used by valcount", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the compiled-in networks in report order
    List,

    /// Show a compiled-in network
    Show {
        /// Network key (e.g., solana-devnet, x1-testnet)
        network: String,
    },

    /// Validate an endpoint list file and print it in report order
    Check {
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            println!("Built-in networks:\n");
            for (key, endpoint) in networks::KEYS.iter().zip(networks::all()) {
                println!("  {} - {}", key, endpoint.name);
                println!("    RPC: {}", endpoint.url);
            }
        }

        Commands::Show { network } => match networks::by_name(&network) {
            Some(endpoint) => {
                println!("Network: {}", endpoint.name);
                println!("RPC: {}", endpoint.url);
            }
            None => {
                eprintln!("Network '{}' not found", network);
                eprintln!("Available networks: {}", networks::KEYS.join(", "));
                std::process::exit(1);
            }
        },

        Commands::Check { path } => {
            let endpoints = load_endpoints(&path)?;
            println!("{} endpoint(s) in {}:", endpoints.len(), path.display());
            for (i, endpoint) in endpoints.iter().enumerate() {
                println!("  {}. {} ({})", i + 1, endpoint.name, endpoint.url);
            }
        }
    }

    Ok(())
}
