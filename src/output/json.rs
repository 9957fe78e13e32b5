//! JSON rendering of analysis reports.

use super::report::ActivityReport;
use crate::utils::error::OutputError;
use log::debug;

/// Serialize a report as pretty-printed JSON
///
/// **Public** - used by `analyze --json`
pub fn report_to_string(report: &ActivityReport) -> Result<String, OutputError> {
    let json = serde_json::to_string_pretty(report).map_err(OutputError::SerializationFailed)?;
    debug!("Report serialized ({} bytes)", json.len());
    Ok(json)
}
