use chrono::Local;
use serde::{Deserialize, Serialize};

use super::common::{Department, SessionOfDay};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub name: String,
    #[serde(rename = "examNo")]
    pub exam_no: String,
    pub department: Department,
    pub year: u32,
    pub present: bool,
}

/// Attendance report filter; every change triggers a refetch.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceFilter {
    pub department: Department,
    pub year: u32,
    pub date: String,
    pub session: SessionOfDay,
}

impl AttendanceFilter {
    /// Default view: today's morning session for IT final year.
    pub fn today() -> Self {
        Self {
            department: Department::IT,
            year: 4,
            date: Local::now().date_naive().to_string(),
            session: SessionOfDay::Morning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_deserializes_backend_shape() {
        let json = r#"{"name":"Anu","examNo":"21IT007","department":"IT","year":2,"present":true}"#;
        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert!(record.present);
        assert_eq!(record.exam_no, "21IT007");
    }

    #[test]
    fn default_filter_uses_iso_date() {
        let filter = AttendanceFilter::today();
        // YYYY-MM-DD
        assert_eq!(filter.date.len(), 10);
        assert_eq!(filter.date.as_bytes()[4], b'-');
        assert_eq!(filter.session, SessionOfDay::Morning);
    }
}
