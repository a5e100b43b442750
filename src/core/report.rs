use crate::domain::model::{Delivery, InputFailure, Mode, PhoneNumber, RunReport};
use crate::utils::error::Result;
use serde::Serialize;

pub const NOT_FOUND: &str = "No phone numbers found.";

#[derive(Serialize)]
struct JsonReport<'a> {
    count: usize,
    phones: &'a [PhoneNumber],
    failures: &'a [InputFailure],
}

/// Console text for a finished run, or `None` when the numbers went to a
/// file and there is nothing to print.
pub fn render(report: &RunReport, json: bool) -> Result<Option<String>> {
    if json {
        if matches!(report.delivery, Delivery::File { .. }) {
            return Ok(None);
        }
        let body = JsonReport {
            count: report.phones.len(),
            phones: &report.phones,
            failures: &report.failures,
        };
        return Ok(Some(serde_json::to_string_pretty(&body)?));
    }

    if report.phones.is_empty() {
        return Ok(Some(NOT_FOUND.to_string()));
    }

    if let Delivery::File { .. } = report.delivery {
        return Ok(None);
    }

    let header = match report.mode {
        Mode::Files => format!("Found {} unique numbers:", report.phones.len()),
        Mode::File | Mode::Text => "Found numbers:".to_string(),
    };

    let mut lines = Vec::with_capacity(report.phones.len() + 1);
    lines.push(header);
    lines.extend(report.phones.iter().map(ToString::to_string));
    Ok(Some(lines.join("\n")))
}
