use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use steam_lookup::{ClientConfig, SteamLookupClient};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Steam Web API key
    #[arg(short = 'k', long, env = "STEAM_API_KEY", hide_env_values = true, value_parser = validate_api_key)]
    api_key: String,

    /// Request timeout in seconds
    #[arg(short, long, default_value_t = 30)]
    timeout: u64,

    /// Verbose mode
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a vanity username to its numeric Steam ID
    Resolve { username: String },

    /// Look up the app ID of a game by its exact name (case-insensitive)
    FindApp { name: String },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "steam_lookup=debug" } else { "steam_lookup=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::default().with_timeout(Duration::from_secs(args.timeout));
    let mut client = match SteamLookupClient::with_config(args.api_key, config) {
        Ok(client) => client,
        Err(err) => {
            error!("Failed to set up HTTP client: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let found = match args.command {
        Command::Resolve { username } => client.resolve_username(&username),
        Command::FindApp { name } => client.find_app_id(&name).map(|app_id| app_id.to_string()),
    };

    match found {
        Some(value) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        None => ExitCode::FAILURE,
    }
}

fn validate_api_key(key: &str) -> Result<String, String> {
    let key = key.trim();
    if key.is_empty() {
        Err("API key must not be empty".to_string())
    } else {
        Ok(key.to_string())
    }
}
