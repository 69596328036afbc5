use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminPayload {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub username: String,
}

/// The admin listing nests its payload one level deeper than the other
/// endpoints: `{ data: { admins: [...] } }`.
#[derive(Debug, Deserialize)]
pub struct AdminList {
    pub admins: Vec<Admin>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_nested_admin_list() {
        let json = r#"{"admins":[{"_id":"a1","firstName":"Ravi","lastName":"Kumar",
                       "email":"ravi@example.edu","username":"rkumar"}]}"#;
        let list: AdminList = serde_json::from_str(json).unwrap();
        assert_eq!(list.admins.len(), 1);
        assert_eq!(list.admins[0].first_name, "Ravi");
        assert_eq!(list.admins[0].id, "a1");
    }
}
