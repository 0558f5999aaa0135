//! `alert.notification` events raised by scheduled monitoring queries.

use serde::de::IgnoredAny;
use serde::Deserialize;

use super::{Formatter, Gate, Malformed};
use crate::event::Scalar;
use crate::{Attachment, Color, Field};

#[derive(Debug, Deserialize)]
pub(crate) struct AlertEvent {
    detail: AlertDetail,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AlertDetail {
    message: String,
    details: Scalar,
    number: Scalar,
    sql_query: Scalar,
}

pub(crate) struct AlertFormatter;

impl Formatter for AlertFormatter {
    // Every alert notifies, so the gate reads nothing.
    type Filter = IgnoredAny;
    type Body = AlertEvent;

    fn gate(_filter: &IgnoredAny) -> Result<Gate, Malformed> {
        Ok(Gate::Notify)
    }

    fn attachment(_filter: &IgnoredAny, body: &AlertEvent) -> Result<Attachment, Malformed> {
        let detail = &body.detail;

        // Alerts carry no state; the color is taken from the message text, so
        // an alert reading "job COMPLETED late" renders green.
        Ok(Attachment::new(detail.message.as_str())
            .with_color(Color::for_state(&detail.message))
            .with_field(Field::long("Details", detail.details.to_string()))
            .with_field(Field::long("Total Number", detail.number.to_string()))
            .with_field(Field::long("Running Query", detail.sql_query.to_string())))
    }
}
