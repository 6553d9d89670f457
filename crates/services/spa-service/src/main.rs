//! Spa Service - admin tooling for the spa-booking facade.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use domain::Password;
use spa_service_lib::SpaServiceConfig;

#[derive(Parser)]
#[command(name = "spa-service")]
#[command(about = "Spa booking service tooling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a password for a user's `hashed_password` field
    HashPassword {
        #[arg(long, env = "SPA_SERVICE_PASSWORD")]
        password: String,
    },
    /// Check a password against a stored hash
    VerifyPassword {
        #[arg(long)]
        hash: String,
        #[arg(long)]
        password: String,
    },
    /// Print the resolved configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = SpaServiceConfig::from_env();
    common::init_logging(&config.service);
    for rejected in &config.ignored {
        tracing::warn!(%rejected, "ignoring invalid configuration value");
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::HashPassword { password } => {
            let hash = Password::new(&password)?;
            println!("{}", hash.as_str());
        }
        Commands::VerifyPassword { hash, password } => {
            if !Password::from_hash(hash).verify(&password) {
                println!("no match");
                return Ok(ExitCode::FAILURE);
            }
            println!("match");
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
