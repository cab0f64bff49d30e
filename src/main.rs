//! # Postline Main Entry Point
//!
//! Terminal blog client for REST-style post stores.

use anyhow::Result;
use postline::cmd_args::CommandLineArgs;
use postline::io::{TerminalEventStream, TerminalRenderStream};
use postline::{config, logging, AppController};

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();

    logging::init(&logging::get_log_path(), cmd_args.verbose())?;

    let mut profile = config::load_profile(cmd_args.profile(), &config::get_profile_path())?;
    if let Some(base_url) = cmd_args.base_url() {
        profile = profile.with_base_url(base_url);
    }
    tracing::info!(
        "Starting postline with profile '{}' against {}",
        profile.name(),
        profile.base_url()
    );

    let mut app = AppController::with_io_streams(
        &profile,
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
    )?;

    app.run().await?;

    println!("Bye from postline.");
    Ok(())
}
