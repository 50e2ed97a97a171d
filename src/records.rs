use std::io::Read;

use serde::Deserialize;

/// One row of the exported appointment payload.  Only the time the
/// appointment was first seen by the scraper matters for the stats;
/// any other fields in the export are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentRecord {
    #[serde(default)]
    pub earliest_time_found: Option<String>,
}

/// Read a JSON array of appointment records.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<AppointmentRecord>, serde_json::Error> {
    serde_json::from_reader(reader)
}
