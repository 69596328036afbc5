use serde::{Deserialize, Serialize};

use super::common::Department;

/// GeoJSON point. Axis order is `[longitude, latitude]` per the backend
/// contract; the constructor and accessors exist so no other code touches
/// the raw array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: [longitude, latitude],
        }
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceLocation {
    #[serde(rename = "_id")]
    pub id: String,
    pub department: Department,
    pub year: u32,
    #[serde(rename = "geoLocation")]
    pub geo_location: GeoPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationPayload {
    pub department: Department,
    pub year: u32,
    #[serde(rename = "geoLocation")]
    pub geo_location: GeoPoint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geo_point_keeps_longitude_first() {
        let point = GeoPoint::new(76.96, 11.35);
        assert_eq!(point.coordinates, [76.96, 11.35]);
        assert_eq!(point.longitude(), 76.96);
        assert_eq!(point.latitude(), 11.35);

        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["type"], "Point");
        assert_eq!(json["coordinates"][0], 76.96);
        assert_eq!(json["coordinates"][1], 11.35);
    }

    #[test]
    fn location_deserializes_backend_shape() {
        let json = r#"{"_id":"l1","department":"IT","year":3,
                       "geoLocation":{"type":"Point","coordinates":[76.9,11.3]}}"#;
        let loc: AttendanceLocation = serde_json::from_str(json).unwrap();
        assert_eq!(loc.department, Department::IT);
        assert_eq!(loc.geo_location.latitude(), 11.3);
    }
}
