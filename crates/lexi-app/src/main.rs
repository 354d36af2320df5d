use std::future::Future;

use atty::Stream;
use clap::Parser;
use lexi_config::Config;
use lexi_core::{Conversation, Resolver, RetrySupervisor};
use lexi_types::Message;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::signal;

pub mod pipeline;
pub mod render;


#[derive(Parser, Debug)]
#[command(name = "lexi", about = "Look up English words from the terminal", version)]
struct Cli {
    /// Print replies as JSON
    #[arg(long)]
    json: bool,

    /// Override the number of retries after a failed lookup
    #[arg(long)]
    retries: Option<u32>,

    /// Words to look up; starts an interactive prompt when empty
    words: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::new();
    if let Some(retries) = cli.retries {
        config.retry.max_retries = retries;
    }

    let supervisor = pipeline::build_supervisor(&config)?;

    if !cli.words.is_empty() {
        let mut conversation = Conversation::new();
        for word in &cli.words {
            let reply = conversation.send(&supervisor, word).await;
            print_reply(&reply, cli.json)?;
        }
        return Ok(());
    }

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };

    run(supervisor, cli.json, shutdown).await
}

/// Interactive prompt, one lookup per line until EOF or shutdown
pub async fn run(
    supervisor: RetrySupervisor<Resolver>,
    json: bool,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<()> {
    let interactive = atty::is(Stream::Stdin);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut conversation = Conversation::new();

    if interactive {
        println!("Type a word to look it up. Ctrl+D to quit.");
    }

    tokio::pin!(shutdown);

    loop {
        if interactive {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(b"> ").await?;
            stdout.flush().await?;
        }

        let line = tokio::select! {
            _ = &mut shutdown => {
                tracing::info!("Shutdown requested");
                break;
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            break;
        };

        if line.trim().is_empty() {
            continue;
        }

        let reply = conversation.send(&supervisor, &line).await;
        print_reply(&reply, json)?;
    }

    Ok(())
}

fn print_reply(reply: &Message, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reply)?);
    } else {
        println!("{}", render::render_reply(reply));
    }
    Ok(())
}
