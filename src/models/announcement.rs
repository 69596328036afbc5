use serde::{Deserialize, Serialize};

use super::common::Department;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    // Older backend versions sent "description" instead of "content".
    #[serde(alias = "description")]
    pub content: String,
    #[serde(default)]
    pub department: Option<Department>,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(rename = "attachmentLink", default)]
    pub attachment_link: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnouncementPayload {
    pub title: String,
    pub content: String,
    pub department: Department,
    pub year: u32,
    #[serde(rename = "attachmentLink", skip_serializing_if = "Option::is_none")]
    pub attachment_link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_description_alias() {
        let json = r#"{"_id":"n1","title":"Exam schedule","description":"Hall A, 9am"}"#;
        let a: Announcement = serde_json::from_str(json).unwrap();
        assert_eq!(a.content, "Hall A, 9am");
        assert!(a.attachment_link.is_none());
    }

    #[test]
    fn payload_omits_missing_attachment() {
        let payload = AnnouncementPayload {
            title: "t".into(),
            content: "c".into(),
            department: Department::ECE,
            year: 3,
            attachment_link: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("attachmentLink").is_none());
    }
}
