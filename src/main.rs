use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use replysmith::connector::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use replysmith::{serve, Commands, Container, ContainerConfig, ServerConfig};

#[derive(Parser)]
#[command(name = "replysmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use the offline mock model instead of calling a provider
    #[arg(long, global = true)]
    mock_llm: bool,

    /// API key for the chat-completion provider
    #[arg(long, global = true, env = "LLM_API_KEY", hide_env_values = true, default_value = "")]
    api_key: String,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, global = true, env = "LLM_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Model identifier sent with each completion
    #[arg(long, global = true, env = "LLM_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Ok(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    let container = Container::new(ContainerConfig {
        api_key: cli.api_key,
        base_url: cli.base_url,
        model: cli.model,
        mock_llm: cli.mock_llm,
    });

    match cli.command {
        Commands::Serve {
            host,
            port,
            cors_origins,
        } => {
            serve(
                Arc::new(container),
                ServerConfig {
                    host,
                    port,
                    cors_origins,
                },
            )
            .await
        }
        command => {
            let router = replysmith::connector::Router::new(&container);
            let output = router.route(command).await?;
            println!("{}", output);
            Ok(())
        }
    }
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["replysmith", "serve"]).unwrap();
        match cli.command {
            Commands::Serve { cors_origins, .. } => {
                assert!(!cors_origins.is_empty());
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn analyze_accepts_style_and_format() {
        let cli = Cli::try_parse_from([
            "replysmith",
            "--mock-llm",
            "analyze",
            "chat.json",
            "--style",
            "humorous",
            "--format",
            "json",
        ])
        .unwrap();
        assert!(cli.mock_llm);
        assert!(matches!(
            cli.command,
            Commands::Analyze {
                style: Some(replysmith::ReplyStyle::Humorous),
                format: replysmith::OutputFormat::Json,
                ..
            }
        ));
    }

    #[test]
    fn unknown_style_is_rejected() {
        let res = Cli::try_parse_from(["replysmith", "analyze", "chat.json", "--style", "snarky"]);
        assert!(res.is_err());
    }
}
