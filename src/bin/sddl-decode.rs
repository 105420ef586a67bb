//! sddl-decode - decode Windows SDDL strings
//!
//! Prints the decoded security descriptor as JSON on stdout.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use sddl_decoder::decode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// sddl-decode - decode Windows SDDL strings into JSON
#[derive(Parser, Debug)]
#[command(name = "sddl-decode")]
#[command(version, about, long_about = None)]
struct Cli {
    /// SDDL string to decode (read from stdin when omitted)
    sddl: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SDDL_DECODE_LOG", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let sddl = match cli.sddl {
        Some(sddl) => sddl,
        None => read_stdin()?,
    };
    debug!(%sddl, "decoding");

    let permissions = decode(&sddl).with_context(|| format!("failed to decode `{sddl}`"))?;

    let mut stdout = io::stdout().lock();
    let written = if cli.pretty {
        serde_json::to_writer_pretty(&mut stdout, &permissions)
    } else {
        serde_json::to_writer(&mut stdout, &permissions)
    };
    written.context("failed to write JSON")?;
    writeln!(stdout).context("failed to write JSON")?;
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read SDDL from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}
