//! Ward and facility wire types

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of facility kinds a ward can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacilityType {
    Hospital,
    #[serde(rename = "Police Station")]
    PoliceStation,
    #[serde(rename = "Metro Station")]
    MetroStation,
}

impl FacilityType {
    /// Every selectable type, in checklist order
    pub const ALL: [FacilityType; 3] = [
        FacilityType::Hospital,
        FacilityType::PoliceStation,
        FacilityType::MetroStation,
    ];

    /// Display glyph keyed by type (image assets are out of scope)
    pub fn icon(&self) -> &'static str {
        match self {
            FacilityType::Hospital => "\u{1F3E5}",
            FacilityType::PoliceStation => "\u{1F46E}",
            FacilityType::MetroStation => "\u{1F687}",
        }
    }
}

impl fmt::Display for FacilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacilityType::Hospital => write!(f, "Hospital"),
            FacilityType::PoliceStation => write!(f, "Police Station"),
            FacilityType::MetroStation => write!(f, "Metro Station"),
        }
    }
}

/// A typed amenity attached to a ward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    #[serde(rename = "type")]
    pub facility_type: FacilityType,
    pub name: String,
    #[serde(default)]
    pub link: String,
}

/// An administrative zone as stored by the server.
///
/// The backing store is Mongo-flavored, so the identifier travels
/// as `_id` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ward {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub facilities: Vec<Facility>,
}

/// POST body for ward creation; the server assigns the id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWard {
    pub name: String,
    pub link: String,
    pub facilities: Vec<Facility>,
}

/// The only error payload shape the server is assumed to provide
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ward_maps_mongo_id() {
        let json = r#"{
            "_id": "65f1",
            "name": "Ward A",
            "link": "https://example.org/ward-a",
            "facilities": [
                {"type": "Police Station", "name": "Station 7", "link": ""}
            ]
        }"#;
        let ward: Ward = serde_json::from_str(json).unwrap();
        assert_eq!(ward.id, "65f1");
        assert_eq!(ward.facilities[0].facility_type, FacilityType::PoliceStation);

        let back = serde_json::to_value(&ward).unwrap();
        assert_eq!(back["_id"], "65f1");
        assert_eq!(back["facilities"][0]["type"], "Police Station");
    }

    #[test]
    fn ward_tolerates_missing_optional_fields() {
        let ward: Ward = serde_json::from_str(r#"{"_id": "1", "name": "Bare"}"#).unwrap();
        assert_eq!(ward.link, "");
        assert!(ward.facilities.is_empty());
    }

    #[test]
    fn facility_type_wire_names() {
        for ty in FacilityType::ALL {
            let wire = serde_json::to_string(&ty).unwrap();
            assert_eq!(wire, format!("\"{}\"", ty));
        }
    }

    #[test]
    fn error_body_message_is_optional() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());
        let body: ErrorBody = serde_json::from_str(r#"{"message": "boom"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("boom"));
    }
}
