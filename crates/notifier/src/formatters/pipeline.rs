//! `aws.codepipeline` stage state changes.

use serde::Deserialize;

use super::{Formatter, Gate, Malformed};
use crate::status::is_success_state;
use crate::{Attachment, Color, Field};

#[derive(Debug, Deserialize)]
pub(crate) struct StageChange {
    detail: StageState,
}

#[derive(Debug, Deserialize)]
struct StageState {
    stage: String,
    state: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PipelineBody {
    detail: PipelineName,
}

#[derive(Debug, Deserialize)]
struct PipelineName {
    pipeline: String,
}

pub(crate) struct PipelineFormatter;

impl Formatter for PipelineFormatter {
    type Filter = StageChange;
    type Body = PipelineBody;

    /// Deploy stages always notify; other stages only when they are not
    /// progressing normally.
    fn gate(filter: &StageChange) -> Result<Gate, Malformed> {
        let detail = &filter.detail;
        if detail.stage.contains("Deploy") || !is_success_state(&detail.state) {
            return Ok(Gate::Notify);
        }
        Ok(Gate::Suppress(format!(
            "stage '{}' is {} and not a deploy stage",
            detail.stage, detail.state
        )))
    }

    fn attachment(filter: &StageChange, body: &PipelineBody) -> Result<Attachment, Malformed> {
        let detail = &filter.detail;
        let text = if is_success_state(&detail.state) {
            format!("{} : {}", detail.stage, detail.state)
        } else {
            format!("Build failed at : {}", detail.stage)
        };

        Ok(Attachment::new(text)
            .with_color(Color::for_state(&detail.state))
            .with_field(Field::long("Pipeline", &body.detail.pipeline))
            .with_field(Field::short("Stage", &detail.stage))
            .with_field(Field::short("State", &detail.state)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::{render, Rendered};
    use crate::{InboundEvent, NotifierError};
    use rstest::rstest;
    use serde_json::json;

    fn event(stage: &str, state: &str) -> InboundEvent {
        InboundEvent::from_value(json!({
            "source": "aws.codepipeline",
            "detail": { "pipeline": "release-pipe", "stage": stage, "state": state }
        }))
    }

    fn rendered(stage: &str, state: &str) -> Rendered {
        render::<PipelineFormatter>(&event(stage, state), "aws.codepipeline").unwrap()
    }

    #[rstest]
    #[case("Build", "SUCCEEDED")]
    #[case("Source", "STARTED")]
    #[case("Test", "COMPLETED")]
    fn test_successful_non_deploy_stage_is_suppressed(#[case] stage: &str, #[case] state: &str) {
        assert!(matches!(rendered(stage, state), Rendered::Suppressed(_)));
    }

    #[rstest]
    #[case("Deploy-Prod", "SUCCEEDED")]
    #[case("Deploy-Prod", "STARTED")]
    #[case("Deploy-Prod", "FAILED")]
    #[case("PreDeployCheck", "CANCELED")]
    fn test_deploy_stage_always_notifies(#[case] stage: &str, #[case] state: &str) {
        let Rendered::Attachment(attachment) = rendered(stage, state) else {
            panic!("deploy stage should notify");
        };
        assert_eq!(attachment.field("Stage"), Some(stage));
        assert_eq!(attachment.field("State"), Some(state));
        assert_eq!(attachment.field("Pipeline"), Some("release-pipe"));
    }

    #[test]
    fn test_successful_deploy_text_and_color() {
        let Rendered::Attachment(attachment) = rendered("Deploy-Prod", "SUCCEEDED") else {
            panic!("deploy stage should notify");
        };
        assert_eq!(attachment.text, "Deploy-Prod : SUCCEEDED");
        assert_eq!(attachment.color, Some(Color::Success));
    }

    #[test]
    fn test_failed_stage_text_and_color() {
        let Rendered::Attachment(attachment) = rendered("Build", "FAILED") else {
            panic!("failed stage should notify");
        };
        assert_eq!(attachment.text, "Build failed at : Build");
        assert_eq!(attachment.color, Some(Color::Failure));
    }

    #[test]
    fn test_suppressed_stage_does_not_need_pipeline_name() {
        let event = InboundEvent::from_value(json!({
            "source": "aws.codepipeline",
            "detail": { "stage": "Build", "state": "SUCCEEDED" }
        }));
        let rendered = render::<PipelineFormatter>(&event, "aws.codepipeline").unwrap();
        assert!(matches!(rendered, Rendered::Suppressed(_)));
    }

    #[test]
    fn test_notified_stage_without_pipeline_name_is_malformed() {
        let event = InboundEvent::from_value(json!({
            "source": "aws.codepipeline",
            "detail": { "stage": "Deploy-Prod", "state": "FAILED" }
        }));
        match render::<PipelineFormatter>(&event, "aws.codepipeline").unwrap_err() {
            NotifierError::MalformedEvent { reason, .. } => {
                assert!(reason.contains("`pipeline`"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_field_layout() {
        let Rendered::Attachment(attachment) = rendered("Build", "FAILED") else {
            panic!("failed stage should notify");
        };
        let layout: Vec<_> = attachment
            .fields
            .iter()
            .map(|f| (f.title.as_str(), f.short))
            .collect();
        assert_eq!(layout, [("Pipeline", false), ("Stage", true), ("State", true)]);
    }
}
