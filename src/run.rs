//! Run orchestration
//!
//! Drives one invocation end to end: optional countdown, capture, clipboard
//! publish, optional preview server. Stages run strictly in sequence; any
//! stage error aborts the run and propagates to the caller. There are no
//! retries and no partial-failure handling.

use tracing::info;

use crate::capture::Capturer;
use crate::clipboard::ClipboardPublisher;
use crate::countdown::countdown;
use crate::error::ShotResult;
use crate::model::RunConfig;
use crate::server;

/// Executes a single capture run
///
/// Returns after the clipboard publish when `config.serve` is false;
/// otherwise blocks serving the preview page until the process is
/// terminated.
pub async fn run(
    config: &RunConfig,
    capturer: &dyn Capturer,
    publisher: &dyn ClipboardPublisher,
) -> ShotResult<()> {
    countdown(config.timer).await;

    capturer.capture(&config.output_path).await?;
    info!("Image captured as {}", config.output_path.display());

    publisher.publish(&config.output_path).await?;
    info!("Screenshot copied to clipboard");

    if config.serve {
        let listener = server::bind(config.listen_addr()).await?;
        let router = server::build_router(
            &config.output_path,
            &config.static_dir,
            &config.editor_page,
        );
        server::serve(listener, router).await?;
    }

    Ok(())
}
