use anyhow::Result;
use clap::{Parser, Subcommand};
use dream_relay::{
    client::RelayClient,
    config::{self, Config},
    server,
};
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::info;

/// Dream interpretation relay
///
/// Forwards dream descriptions to an interpretation service, or submits one
/// to a running relay.
#[derive(Parser, Debug)]
#[command(name = "dream-relay", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the relay server (default)
    Serve,

    /// Submit a dream to a running relay and print the interpretation
    Interpret {
        /// Relay address, overrides BACKEND_URL
        #[arg(long)]
        backend_url: Option<String>,

        /// Dream text; read from stdin when omitted
        text: Vec<String>,
    },
}

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

/// Applies `--backend-url` on top of the loaded configuration
fn override_backend_url(config: &mut Config, backend_url: Option<String>) -> Result<()> {
    if let Some(url) = backend_url {
        config.client.backend_url = url;
        config.validate()?;
    }
    Ok(())
}

/// Joins the command-line words, or reads all of `input` when there are none
async fn read_dream_text<R>(words: Vec<String>, mut input: R) -> Result<String>
where
    R: AsyncRead + Unpin,
{
    if !words.is_empty() {
        return Ok(words.join(" "));
    }

    let mut buf = String::new();
    input.read_to_string(&mut buf).await?;
    Ok(buf)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (before logging setup)
    let mut config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG directives take precedence over the configured level
    let log_level = config.server.logs.level.clone();
    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&log_level))?;

    // Logs go to stderr so `interpret` output stays clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .json()
        .init();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            info!("Starting dream relay with log level: {}", log_level);
            server::run(config).await?;
        }
        Command::Interpret { backend_url, text } => {
            override_backend_url(&mut config, backend_url)?;
            let dream_text = read_dream_text(text, tokio::io::stdin()).await?;

            let client = RelayClient::new(&config.client)?;
            match client.interpret(&dream_text).await {
                Ok(interpretation) => {
                    println!("Interpretation:\n{}", interpretation);
                }
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
