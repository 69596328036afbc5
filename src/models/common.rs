use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Departments known to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    IT,
    CSE,
    ECE,
    EEE,
}

impl Department {
    pub const ALL: [Department; 4] = [
        Department::IT,
        Department::CSE,
        Department::ECE,
        Department::EEE,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::IT => "IT",
            Department::CSE => "CSE",
            Department::ECE => "ECE",
            Department::EEE => "EEE",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IT" => Ok(Department::IT),
            "CSE" => Ok(Department::CSE),
            "ECE" => Ok(Department::ECE),
            "EEE" => Ok(Department::EEE),
            other => Err(format!("unknown department: {}", other)),
        }
    }
}

/// Years offered by the college (first year students are not tracked).
pub const YEAR_OPTIONS: [u32; 3] = [2, 3, 4];

/// Half-day attendance session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionOfDay {
    Morning,
    Afternoon,
}

impl SessionOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionOfDay::Morning => "morning",
            SessionOfDay::Afternoon => "afternoon",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SessionOfDay::Morning => "Morning",
            SessionOfDay::Afternoon => "Afternoon",
        }
    }
}

impl fmt::Display for SessionOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(SessionOfDay::Morning),
            "afternoon" => Ok(SessionOfDay::Afternoon),
            other => Err(format!("unknown session: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn department_round_trips_through_str() {
        for dept in Department::ALL {
            assert_eq!(dept.as_str().parse::<Department>(), Ok(dept));
        }
        assert!("MECH".parse::<Department>().is_err());
    }

    #[test]
    fn department_serializes_as_bare_string() {
        let json = serde_json::to_string(&Department::CSE).unwrap();
        assert_eq!(json, "\"CSE\"");
    }

    #[test]
    fn session_serializes_lowercase() {
        let json = serde_json::to_string(&SessionOfDay::Morning).unwrap();
        assert_eq!(json, "\"morning\"");
        let parsed: SessionOfDay = serde_json::from_str("\"afternoon\"").unwrap();
        assert_eq!(parsed, SessionOfDay::Afternoon);
    }
}
