use std::sync::Arc;

use clap::Parser;
use tracing::info;

use totp_enroll::adapters::TerminalIo;
use totp_enroll::bootstrap::{resolve_config, tracing::init_tracing_subscriber, wire_terminal};
use totp_enroll::cli::Cli;
use totp_enroll::host::run_session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing_subscriber()?;

    let config = resolve_config(&cli)?;
    let io = Arc::new(TerminalIo::stdio());
    let orchestrator = wire_terminal(&config, io.clone())?;

    let final_state = run_session(&orchestrator, &io, !cli.no_open).await?;
    info!(step = ?final_state.step, is_open = final_state.is_open, "session ended");

    Ok(())
}
