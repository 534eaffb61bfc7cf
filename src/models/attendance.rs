use serde::{Deserialize, Serialize};

/// Personio V1 style attendance item, one per staged interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub comment: String,
    pub date: String,       // YYYY-MM-DD
    pub start_time: String, // HH:MM:SS
    pub end_time: String,   // HH:MM:SS

    /// Elapsed seconds of the source interval. Not part of the payload.
    #[serde(skip)]
    pub seconds: f64,
}

impl AttendanceRecord {
    pub fn hours(&self) -> f64 {
        self.seconds / 3600.0
    }
}

/// Request body of the gateway backends.
#[derive(Debug, Serialize)]
pub struct AttendancePayload<'a> {
    pub attendances: &'a [AttendanceRecord],
}

/// Work-hours entry posted by the basic-auth backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkHoursEntry {
    pub date: String,
    pub hours: f64,
    pub description: String,
}

impl From<&AttendanceRecord> for WorkHoursEntry {
    fn from(record: &AttendanceRecord) -> Self {
        Self {
            date: record.date.clone(),
            hours: record.hours(),
            description: record.comment.clone(),
        }
    }
}
