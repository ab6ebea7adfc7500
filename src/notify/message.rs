//! Alert message construction.

use crate::probe::outcome::ProbeReport;

/// Subject line used for every down alert.
pub const ALERT_SUBJECT: &str = "Server down alert";

const ALERT_PREAMBLE: &str = "The following servers are not correctly responding to requests:";

/// A fully formatted alert, ready for any transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub subject: String,
    pub body: String,
}

/// Build the consolidated down alert for one cycle.
///
/// One body line per failed endpoint, in report order, each resolving the
/// name back to its configured address.
pub fn build_alert(report: &ProbeReport) -> Alert {
    let mut body = String::from(ALERT_PREAMBLE);
    body.push('\n');

    for outcome in report.failed() {
        body.push_str(&format!(
            "Name: {}, Address: {}\n",
            outcome.name, outcome.address
        ));
    }

    Alert {
        subject: ALERT_SUBJECT.to_string(),
        body,
    }
}
