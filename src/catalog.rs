//! Activity Catalog
//!
//! Value types for the activities served by the backend. A catalog is
//! received whole on every load and never patched in place.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::ClientResult;

/// A schedulable offering with a capacity and a roster of signed-up emails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    /// Unique key within the catalog
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in signup order
    pub participants: Vec<String>,
}

/// Wire shape of an activity; the name is the key of the enclosing object
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ActivityRecord {
    description: String,
    schedule: String,
    max_participants: u32,
    participants: Vec<String>,
}

impl Activity {
    pub fn new(name: impl Into<String>, max_participants: u32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            schedule: String::new(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Set description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set schedule
    pub fn schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = schedule.into();
        self
    }

    /// Add a participant
    pub fn participant(mut self, email: impl Into<String>) -> Self {
        self.participants.push(email.into());
        self
    }

    /// Remaining capacity as reported by the server's numbers.
    ///
    /// Signed: if the backend ever breaks its capacity invariant the
    /// negative count is shown rather than hidden.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }

    fn from_record(name: String, record: ActivityRecord) -> Self {
        Self {
            name,
            description: record.description,
            schedule: record.schedule,
            max_participants: record.max_participants,
            participants: record.participants,
        }
    }

    fn to_record(&self) -> ActivityRecord {
        ActivityRecord {
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: self.participants.clone(),
        }
    }
}

/// The complete set of activities as currently known to the backend.
///
/// Keeps the key order of the JSON object it was decoded from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
}

impl ActivityCatalog {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    /// Decode the body of `GET /activities`
    pub fn from_json(body: &str) -> ClientResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }
}

impl<'a> IntoIterator for &'a ActivityCatalog {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.activities.iter()
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(&activity.name, &activity.to_record())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = ActivityCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping activity names to activities")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut activities = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, record)) = access.next_entry::<String, ActivityRecord>()? {
                    // Later duplicates replace earlier ones, like a JSON object lookup would
                    activities.retain(|a: &Activity| a.name != name);
                    activities.push(Activity::from_record(name, record));
                }
                Ok(ActivityCatalog { activities })
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Chess Club": {
            "description": "Learn strategies and compete in chess tournaments",
            "schedule": "Fridays, 3:30 PM - 5:00 PM",
            "max_participants": 12,
            "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
        },
        "Art Studio": {
            "description": "Painting and drawing",
            "schedule": "Mondays",
            "max_participants": 8,
            "participants": []
        },
        "Basketball": {
            "description": "Team practice",
            "schedule": "Wednesdays",
            "max_participants": 15,
            "participants": ["alex@mergington.edu"]
        }
    }"#;

    #[test]
    fn test_decode_preserves_server_order() {
        let catalog = ActivityCatalog::from_json(SAMPLE).unwrap();
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, vec!["Chess Club", "Art Studio", "Basketball"]);
    }

    #[test]
    fn test_spots_left() {
        let catalog = ActivityCatalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.get("Chess Club").unwrap().spots_left(), 10);
        assert_eq!(catalog.get("Art Studio").unwrap().spots_left(), 8);
        assert_eq!(catalog.get("Basketball").unwrap().spots_left(), 14);
    }

    #[test]
    fn test_over_capacity_is_negative() {
        let activity = Activity::new("Tiny", 1)
            .participant("a@x.com")
            .participant("b@x.com");
        assert_eq!(activity.spots_left(), -1);
    }

    #[test]
    fn test_missing_participants_is_malformed() {
        let err = ActivityCatalog::from_json(
            r#"{"Drama": {"description": "d", "schedule": "s", "max_participants": 3}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, crate::error::ClientError::Parse(_)));
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(ActivityCatalog::from_json("[]").is_err());
        assert!(ActivityCatalog::from_json("<html>").is_err());
    }

    #[test]
    fn test_serialize_keeps_wire_shape() {
        let catalog = ActivityCatalog::new(vec![Activity::new("Chess Club", 10)
            .schedule("Fridays")
            .participant("a@x.com")]);
        let value = serde_json::to_value(&catalog).unwrap();
        assert_eq!(value["Chess Club"]["max_participants"], 10);
        assert_eq!(value["Chess Club"]["participants"][0], "a@x.com");
        assert!(value["Chess Club"].get("name").is_none());
    }
}
