use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use optimizer_client::cli::Cli;
use optimizer_client::config::Config;
use optimizer_client::optimize_client::OptimizeClient;
use optimizer_client::submission::controller::{SubmissionController, SubmitOutcome};
use optimizer_client::submission::request::{ResumeFile, SubmissionRequest};
use optimizer_client::view::terminal::TerminalPresenter;
use optimizer_client::view::ViewState;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // Load configuration first, then apply CLI overrides
    let mut config = Config::from_env()?;
    if let Some(endpoint) = args.endpoint.clone() {
        config.endpoint = endpoint;
    }
    if let Some(timeout) = args.timeout {
        config.request_timeout_secs = timeout;
    }

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume optimizer client v{}", env!("CARGO_PKG_VERSION"));

    let resume = match &args.resume {
        Some(path) => Some(ResumeFile::from_path(path)?),
        None => None,
    };

    // Missing description stays empty here; validation reports it inline.
    let job_description = match (&args.job_description, &args.jd_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job description '{}'", path.display()))?,
        (None, None) => String::new(),
    };

    let client = OptimizeClient::new(
        &config.endpoint,
        Duration::from_secs(config.request_timeout_secs),
    );
    info!("Optimize client initialized (endpoint: {})", config.endpoint);

    let mut controller = SubmissionController::new(
        Arc::new(client.clone()),
        Box::new(TerminalPresenter::new()),
    );

    let request = SubmissionRequest::new(resume, job_description);
    let outcome = controller.submit(request).await;

    if outcome != SubmitOutcome::Succeeded {
        std::process::exit(1);
    }

    if let Some(save_path) = &args.save {
        if let ViewState::Results(result) = controller.state() {
            let url = result
                .download_url
                .clone()
                .context("service response did not include a download URL")?;
            let bytes = client.download(&url).await?;
            std::fs::write(save_path, &bytes)
                .with_context(|| format!("Failed to write '{}'", save_path.display()))?;
            info!("Optimized resume saved to {}", save_path.display());
        }
    }

    Ok(())
}
