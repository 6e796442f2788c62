//! shotclip: capture a screenshot, copy it to the clipboard, optionally
//! open a local editor page for it

use anyhow::Result;
use clap::Parser;
use shotclip::capture::create_capturer;
use shotclip::clipboard::create_publisher;
use shotclip::error::ShotclipError;
use shotclip::model::{Platform, RunConfig};
use shotclip::run::run;
use shotclip::util::detect::detect_platform;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "shotclip")]
#[command(version)]
#[command(about = "Capture a screenshot, copy it to the clipboard, and optionally serve a local \
                   editor page")]
struct Cli {
    /// Start the preview server after capture
    #[arg(long)]
    serve: bool,

    /// Preview server listen port
    #[arg(long, default_value_t = RunConfig::DEFAULT_PORT)]
    port: u16,

    /// Countdown seconds before capture
    #[arg(long, default_value_t = 0)]
    timer: u64,
}

impl Cli {
    fn into_config(self) -> RunConfig {
        RunConfig {
            serve: self.serve,
            port: self.port,
            timer: self.timer,
            ..RunConfig::default()
        }
    }
}

#[tokio::main]
async fn main() {
    // Respects RUST_LOG; default level info
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shotclip=info")),
        )
        .with_target(false)
        .init();

    let config = Cli::parse().into_config();
    let platform = detect_platform();
    info!("Platform detected: {platform}");

    if let Err(err) = try_main(&config, platform).await {
        error!("{err:#}");
        if let Some(shot_err) = err.downcast_ref::<ShotclipError>() {
            error!("hint: {}", shot_err.remediation_hint());
        }
        std::process::exit(1);
    }
}

async fn try_main(config: &RunConfig, platform: Platform) -> Result<()> {
    let capturer = create_capturer(platform)?;
    let publisher = create_publisher(platform)?;

    run(config, capturer.as_ref(), publisher.as_ref()).await?;
    Ok(())
}
