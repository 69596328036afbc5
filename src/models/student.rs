use serde::{Deserialize, Serialize};

use super::common::Department;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "examNo")]
    pub exam_no: String,
    pub department: Department,
    pub year: u32,
}

impl Student {
    /// Client-side search: case-insensitive substring match on name or exam
    /// number. An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&q) || self.exam_no.to_lowercase().contains(&q)
    }
}

/// Body sent for student create/update calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentPayload {
    pub name: String,
    pub email: String,
    #[serde(rename = "examNo")]
    pub exam_no: String,
    pub department: Department,
    pub year: u32,
}

/// Server-side listing filter, submitted as query parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentFilter {
    pub department: Department,
    pub year: u32,
}

impl Default for StudentFilter {
    fn default() -> Self {
        Self {
            department: Department::IT,
            year: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student() -> Student {
        Student {
            id: "64a1".into(),
            name: "Priya Raman".into(),
            email: "priya@example.edu".into(),
            exam_no: "21IT042".into(),
            department: Department::IT,
            year: 4,
        }
    }

    #[test]
    fn deserializes_backend_field_names() {
        let json = r#"{"_id":"64a1","name":"Priya Raman","email":"priya@example.edu",
                       "examNo":"21IT042","department":"IT","year":4}"#;
        let parsed: Student = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, student());
    }

    #[test]
    fn search_matches_name_and_exam_no_case_insensitively() {
        let s = student();
        assert!(s.matches("priya"));
        assert!(s.matches("21it"));
        assert!(s.matches(""));
        assert!(s.matches("  RAMAN "));
        assert!(!s.matches("kumar"));
    }

    #[test]
    fn payload_uses_camel_case_exam_no() {
        let payload = StudentPayload {
            name: "x".into(),
            email: "y".into(),
            exam_no: "21IT001".into(),
            department: Department::CSE,
            year: 2,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["examNo"], "21IT001");
        assert_eq!(json["department"], "CSE");
    }
}
