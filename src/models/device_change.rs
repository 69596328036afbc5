use serde::{Deserialize, Serialize};

use super::common::Department;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::Approved => "APPROVED",
            RequestStatus::Rejected => "REJECTED",
        }
    }

    /// Approve/Reject actions are only offered while a request is pending.
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestStatus::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestStudent {
    pub name: String,
    pub email: String,
    pub year: u32,
    pub department: Department,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceChangeRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub student: RequestStudent,
    pub reason: String,
    pub status: RequestStatus,
}

/// Body for the status update call.
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    pub status: RequestStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::Approved).unwrap(),
            "\"APPROVED\""
        );
        let parsed: RequestStatus = serde_json::from_str("\"PENDING\"").unwrap();
        assert!(parsed.is_pending());
        assert!(!RequestStatus::Rejected.is_pending());
    }

    #[test]
    fn request_deserializes_nested_student() {
        let json = r#"{"_id":"r1","student":{"name":"Anu","email":"anu@example.edu",
                       "year":3,"department":"CSE"},"reason":"Phone lost","status":"PENDING"}"#;
        let req: DeviceChangeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.student.department, Department::CSE);
        assert!(req.status.is_pending());
    }
}
