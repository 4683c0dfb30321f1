mod config;
mod error;

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use runtime::{GroqBackend, Session, ToolHost, ToolRegistry};

use config::Config;
use error::Result;

const SYSTEM_PROMPT: &str =
    "You are Skiff, a helpful AI assistant. You can look up the weather for a city and \
     multiply numbers. Be concise and direct.";
const CONFIG_FILE: &str = "skiff.toml";

#[derive(Parser)]
#[command(name = "skiff")]
#[command(about = "A minimal chat front end with callable tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session
    Chat,
    /// List the registered tools
    Tools,
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Chat) | None => cmd_chat().await,
        Some(Commands::Tools) => cmd_tools(),
    }
}

async fn cmd_chat() -> Result<()> {
    // The credential check comes first: a missing key is a deployment
    // defect, caught before any backend or surface is built.
    let api_key = config::api_key_from_env()?;
    let config = load_config()?;

    let backend = GroqBackend::builder(api_key, &config.backend.model)
        .temperature(config.backend.temperature)
        .max_tokens(config.backend.max_tokens)
        .build();
    let tools = Arc::new(ToolRegistry::builtin()?);

    let system = config
        .system
        .clone()
        .unwrap_or_else(|| SYSTEM_PROMPT.to_string());
    let mut session = Session::new(backend, tools).with_system(system);

    println!("skiff v{}", env!("CARGO_PKG_VERSION"));
    println!("Session ID: {}", session.id);
    println!("Model: {}", config.backend.model);
    println!("Ask about the weather or a math problem. Type 'quit' or Ctrl+D to exit.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }

        print!("thinking...");
        stdout.flush()?;
        let result = session.chat(input).await;
        // Clear the indicator before printing the answer.
        print!("\r\x1b[2K");
        stdout.flush()?;

        match result {
            Ok(response) => {
                println!("\n{response}\n");
            }
            Err(e) => {
                eprintln!("Error: {e}\n");
            }
        }
    }

    println!("\nSession ended.");
    Ok(())
}

fn cmd_tools() -> Result<()> {
    let registry = ToolRegistry::builtin()?;

    println!("{:<14}  DESCRIPTION", "TOOL");
    println!("{}", "-".repeat(60));
    for spec in registry.specs() {
        println!("{:<14}  {}", spec.name, spec.description);
    }

    Ok(())
}

fn load_config() -> Result<Config> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        Ok(Config::load(path)?)
    } else {
        Ok(Config::default_config())
    }
}
