//! EMR and Lambda cluster state changes.
//!
//! Both families carry `clusterId` and `state` as single-element lists and
//! share this formatter; only the display name differs, and that comes from
//! the registry.

use serde::Deserialize;

use super::{first, Formatter, Gate, Malformed};
use crate::event::OneOrMany;
use crate::status::is_success_state;
use crate::{Attachment, Color, Field};

/// Cluster states that produce a notification.
const TERMINAL_STATES: [&str; 2] = ["FAILED", "COMPLETED"];

#[derive(Debug, Deserialize)]
pub(crate) struct ClusterState {
    detail: StateDetail,
}

#[derive(Debug, Deserialize)]
struct StateDetail {
    state: OneOrMany<String>,
}

impl ClusterState {
    fn state(&self) -> Result<&str, Malformed> {
        first(self.detail.state.first(), "detail.state").map(String::as_str)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClusterBody {
    detail: ClusterIdDetail,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClusterIdDetail {
    cluster_id: OneOrMany<String>,
}

impl ClusterBody {
    fn cluster_id(&self) -> Result<&str, Malformed> {
        first(self.detail.cluster_id.first(), "detail.clusterId").map(String::as_str)
    }
}

pub(crate) struct ClusterFormatter;

impl Formatter for ClusterFormatter {
    type Filter = ClusterState;
    type Body = ClusterBody;

    fn gate(filter: &ClusterState) -> Result<Gate, Malformed> {
        let state = filter.state()?;
        if TERMINAL_STATES.contains(&state) {
            Ok(Gate::Notify)
        } else {
            Ok(Gate::NoOutput(format!("cluster state {state} is not terminal")))
        }
    }

    fn attachment(filter: &ClusterState, body: &ClusterBody) -> Result<Attachment, Malformed> {
        let state = filter.state()?;
        let cluster_id = body.cluster_id()?;
        let outcome = if is_success_state(state) { "completed" } else { "failed" };

        Ok(Attachment::new(format!("cluster {cluster_id} has {outcome}"))
            .with_color(Color::for_state(state))
            .with_field(Field::short("State", state)))
    }
}
