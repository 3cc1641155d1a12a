//! # Lexibot — interactive FAQ bot
//!
//! Reads one line at a time, resolves it through the engine, prints the
//! reply. Exits on `exit`/`quit` or EOF.
//!
//! Usage:
//!   lexibot                      # built-in knowledge base
//!   lexibot --kb faq.toml        # custom knowledge base
//!   lexibot --threshold 0.3      # stricter matching

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lexibot_agent::Engine;
use lexibot_core::config::LexibotConfig;
use lexibot_core::types::ReplyKind;
use lexibot_knowledge::KnowledgeBase;

#[derive(Parser)]
#[command(
    name = "lexibot",
    version,
    about = "💬 Lexibot — lexical-retrieval FAQ bot"
)]
struct Cli {
    /// Config file path (default: ~/.lexibot/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// TOML knowledge-base file (default: built-in entries)
    #[arg(long)]
    kb: Option<PathBuf>,

    /// Override the confidence threshold
    #[arg(short, long)]
    threshold: Option<f32>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let mut config = match &cli.config {
        Some(path) => LexibotConfig::load_from(path)?,
        None => LexibotConfig::load()?,
    };
    if let Some(t) = cli.threshold {
        config.confidence_threshold = t;
    }
    if let Some(kb) = &cli.kb {
        config.knowledge.path = kb.display().to_string();
    }

    let knowledge = if config.knowledge.path.is_empty() {
        tracing::debug!("using built-in knowledge base");
        KnowledgeBase::builtin()
    } else {
        tracing::debug!(path = %config.knowledge.path, "loading knowledge base");
        KnowledgeBase::load_from(Path::new(&config.knowledge.path))?
    };

    let farewell = config.responses.farewell.clone();
    let engine = Engine::new(config, knowledge)?;

    println!("{}", "=".repeat(60));
    println!(
        "💬 Lexibot — {} entries, {} vocabulary terms",
        engine.entry_count(),
        engine.vocabulary_len()
    );
    println!("Type 'exit' or 'quit' to stop");
    println!("{}", "=".repeat(60));
    println!();

    let stdin = io::stdin();
    loop {
        print!("You: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            println!("Lexibot: {farewell}");
            break;
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            println!("Lexibot: {farewell}");
            break;
        }

        let reply = engine.respond(input);
        match reply.kind {
            ReplyKind::Empty => continue,
            ReplyKind::Match => {
                println!(
                    "Lexibot: {} (confidence={:.2})",
                    reply.text,
                    reply.score.unwrap_or(0.0)
                );
            }
            ReplyKind::Farewell => {
                println!("Lexibot: {}", reply.text);
                break;
            }
            _ => println!("Lexibot: {}", reply.text),
        }
        println!();
    }

    Ok(())
}
