//! Command-line and environment configuration.
//!
//! Every value can come from a flag or from the environment variable the
//! original Lambda deployment used (`SLACK_PATH`, `SLACK_CHANNEL`,
//! `ALERT_SLACK_CHANNEL`). Values are resolved once, before the event is read.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use notifier::{Destinations, NotifierError};
use slack::SlackWebhookConfig;

/// Log line format on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Parser)]
#[command(
    name = "herald",
    version,
    about = "Translate one infrastructure event into a Slack notification"
)]
pub struct Args {
    /// Event document to handle. Read from stdin when omitted.
    #[arg(long, short = 'e', value_name = "FILE")]
    pub event: Option<PathBuf>,

    /// Full incoming-webhook URL. Takes precedence over --slack-path.
    #[arg(long, env = "SLACK_WEBHOOK_URL")]
    pub webhook_url: Option<String>,

    /// Webhook path on hooks.slack.com, e.g. /services/T000/B000/XXXX.
    #[arg(long, env = "SLACK_PATH")]
    pub slack_path: Option<String>,

    /// Channel for pipeline, ECS, EMR and Lambda events.
    #[arg(long, env = "SLACK_CHANNEL")]
    pub channel: String,

    /// Channel for alert.notification events.
    #[arg(long, env = "ALERT_SLACK_CHANNEL")]
    pub alert_channel: String,

    /// Webhook request timeout in seconds.
    #[arg(long, env = "HERALD_HTTP_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Print the payload instead of posting it.
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub destinations: Destinations,
    /// `None` only in dry-run mode.
    pub webhook: Option<SlackWebhookConfig>,
}

impl Args {
    pub fn settings(&self) -> Result<Settings, NotifierError> {
        let destinations = Destinations::from_names(&self.channel, &self.alert_channel)?;

        let webhook = match (non_blank(&self.webhook_url), non_blank(&self.slack_path)) {
            (Some(url), _) => Some(SlackWebhookConfig::new(url)),
            (None, Some(path)) => Some(SlackWebhookConfig::from_path(path)),
            (None, None) if self.dry_run => None,
            (None, None) => {
                return Err(NotifierError::Configuration {
                    message: "one of SLACK_WEBHOOK_URL or SLACK_PATH must be set".to_string(),
                })
            }
        }
        .map(|config| config.with_timeout_secs(self.timeout_secs));

        Ok(Settings {
            destinations,
            webhook,
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notifier::DestinationKind;
    use rstest::rstest;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["herald", "--channel", "#infra", "--alert-channel", "#alerts"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[rstest]
    #[case(&["--slack-path", "/services/T/B/X"], "https://hooks.slack.com/services/T/B/X")]
    #[case(&["--webhook-url", "https://example.com/hook"], "https://example.com/hook")]
    #[case(
        &["--webhook-url", "https://example.com/hook", "--slack-path", "/services/T/B/X"],
        "https://example.com/hook"
    )]
    #[case(&["--webhook-url", "", "--slack-path", "/services/T/B/X"], "https://hooks.slack.com/services/T/B/X")]
    fn test_webhook_resolution(#[case] extra: &[&str], #[case] expected: &str) {
        let settings = args(extra).settings().unwrap();
        assert_eq!(settings.webhook.unwrap().url, expected);
    }

    #[test]
    fn test_destinations_from_flags() {
        let settings = args(&["--slack-path", "/services/T/B/X"]).settings().unwrap();
        assert_eq!(
            settings.destinations.channel_for(DestinationKind::Alert).as_str(),
            "#alerts"
        );
    }

    #[test]
    fn test_timeout_applies_to_webhook() {
        let settings = args(&["--slack-path", "/x", "--timeout-secs", "5"]).settings().unwrap();
        assert_eq!(settings.webhook.unwrap().timeout_secs, 5);
    }

    #[test]
    fn test_missing_webhook_is_error_unless_dry_run() {
        assert!(matches!(
            args(&[]).settings(),
            Err(NotifierError::Configuration { .. })
        ));
        assert_eq!(args(&["--dry-run"]).settings().unwrap().webhook, None);
    }

    #[test]
    fn test_blank_channel_is_rejected() {
        let parsed = Args::try_parse_from([
            "herald",
            "--channel",
            " ",
            "--alert-channel",
            "#alerts",
            "--dry-run",
        ])
        .unwrap();
        assert!(parsed.settings().is_err());
    }
}
