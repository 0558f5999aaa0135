//! `aws.ecs` task state changes.
//!
//! ECS emits an event on every intermediate transition (PROVISIONING,
//! PENDING, ACTIVATING, ...). Only the event where the task has settled on its
//! desired status is reported.

use serde::Deserialize;

use super::{first, Formatter, Gate, Malformed};
use crate::{Attachment, Field};

#[derive(Debug, Deserialize)]
pub(crate) struct TaskStatus {
    detail: StatusDetail,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusDetail {
    desired_status: String,
    last_status: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TaskBody {
    time: String,
    detail: TaskDetail,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskDetail {
    containers: Vec<Container>,
    task_definition_arn: String,
}

#[derive(Debug, Deserialize)]
struct Container {
    name: String,
}

pub(crate) struct EcsFormatter;

impl Formatter for EcsFormatter {
    type Filter = TaskStatus;
    type Body = TaskBody;

    fn gate(filter: &TaskStatus) -> Result<Gate, Malformed> {
        let status = &filter.detail;
        if status.desired_status == status.last_status {
            Ok(Gate::Notify)
        } else {
            Ok(Gate::Suppress(format!(
                "task is {} on its way to {}",
                status.last_status, status.desired_status
            )))
        }
    }

    fn attachment(filter: &TaskStatus, body: &TaskBody) -> Result<Attachment, Malformed> {
        let last_status = &filter.detail.last_status;
        let container = first(body.detail.containers.first(), "detail.containers")?;

        Ok(
            Attachment::new(format!("Task {} has {}", container.name, last_status))
                .with_field(Field::short("Name", &container.name))
                .with_field(Field::short("Status", last_status))
                .with_field(Field::short("Time", &body.time))
                .with_field(Field::long("Task", &body.detail.task_definition_arn)),
        )
    }
}
