use serde::{Deserialize, Serialize};

/// Aggregation buckets come back keyed by Mongo's `_id` group key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearCount {
    #[serde(rename = "_id")]
    pub year: u32,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentCount {
    #[serde(rename = "_id")]
    pub department: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(rename = "totalStudents")]
    pub total_students: u32,
    #[serde(rename = "totalAttendanceLocations")]
    pub total_attendance_locations: u32,
    #[serde(rename = "studentsByYear", default)]
    pub students_by_year: Vec<YearCount>,
    #[serde(rename = "studentsByDepartment", default)]
    pub students_by_department: Vec<DepartmentCount>,
    #[serde(rename = "todaysAttendance", default)]
    pub todays_attendance: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_aggregate_counts() {
        let json = r#"{"totalStudents":120,"totalAttendanceLocations":3,
                       "studentsByYear":[{"_id":2,"count":40},{"_id":4,"count":35}],
                       "studentsByDepartment":[{"_id":"IT","count":120}],
                       "todaysAttendance":96}"#;
        let data: DashboardData = serde_json::from_str(json).unwrap();
        assert_eq!(data.total_students, 120);
        assert_eq!(data.students_by_year[1].year, 4);
        assert_eq!(data.students_by_department[0].department, "IT");
        assert_eq!(data.todays_attendance, 96);
    }

    #[test]
    fn missing_breakdowns_default_to_empty() {
        let json = r#"{"totalStudents":0,"totalAttendanceLocations":0}"#;
        let data: DashboardData = serde_json::from_str(json).unwrap();
        assert!(data.students_by_year.is_empty());
        assert_eq!(data.todays_attendance, 0);
    }
}
