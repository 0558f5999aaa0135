//! Herald CLI entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Parse configuration**: flags and environment variables, validated
//!    once before any event is read.
//! 2. **Wire observability**: `tracing-subscriber` with a JSON (or pretty)
//!    layer on stderr, plus an OpenTelemetry OTLP exporter when configured.
//! 3. **Construct infrastructure**: a `SlackWebhookTransport`, or the dry-run
//!    transport, injected into a `Notifier`.
//! 4. **Handle one event**: read it from `--event FILE` or stdin, run one
//!    invocation, print the webhook response body to stdout.

mod config;
mod dry_run;
mod observability;

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use notifier::{Classifier, Delivery, InboundEvent, Notifier};
use slack::SlackWebhookTransport;
use tokio::io::AsyncReadExt;
use tracing::error;

use crate::config::Args;
use crate::dry_run::DryRunTransport;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let _telemetry = match observability::init(args.log_format) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "Invocation failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let settings = args.settings()?;
    let event = read_event(args.event.as_deref()).await?;
    let classifier = Classifier::new(settings.destinations);

    let delivery: Delivery = match settings.webhook {
        Some(webhook) if !args.dry_run => {
            let transport = SlackWebhookTransport::new(&webhook)?;
            Notifier::new(classifier, transport).handle(&event).await?
        }
        _ => Notifier::new(classifier, DryRunTransport).handle(&event).await?,
    };

    if let Some(body) = delivery.response_body() {
        println!("{body}");
    }
    Ok(())
}

async fn read_event(path: Option<&Path>) -> anyhow::Result<InboundEvent> {
    let text = match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading event from {}", path.display()))?,
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("reading event from stdin")?;
            text
        }
    };

    InboundEvent::from_json(&text).context("parsing event JSON")
}
