//! Activity Snapshot Types
//!
//! The roster as returned by `GET /activities`: a JSON object keyed by
//! activity name. Server order is preserved.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// One schedulable activity with a capacity and its enrolled participants
#[derive(Clone, Debug, PartialEq)]
pub struct Activity {
    /// Unique key, stable for the session
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in signup order
    pub participants: Vec<String>,
}

/// Activity body as it appears under its name in the roster object
#[derive(Deserialize)]
struct ActivityDetails {
    #[serde(default)]
    description: String,
    #[serde(default)]
    schedule: String,
    max_participants: u32,
    #[serde(default)]
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

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = schedule.into();
        self
    }

    pub fn participant(mut self, email: impl Into<String>) -> Self {
        self.participants.push(email.into());
        self
    }

    /// Remaining capacity. Always derived, never stored.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// Full roster snapshot in server order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    activities: Vec<Activity>,
}

impl Roster {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.activities.iter()
    }
}

impl IntoIterator for Roster {
    type Item = Activity;
    type IntoIter = std::vec::IntoIter<Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.activities.into_iter()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.activities.iter()
    }
}

impl FromIterator<Activity> for Roster {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RosterVisitor;

        impl<'de> Visitor<'de> for RosterVisitor {
            type Value = Roster;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping activity names to activity details")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Roster, M::Error> {
                let mut activities = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
                    activities.push(Activity {
                        name,
                        description: details.description,
                        schedule: details.schedule,
                        max_participants: details.max_participants,
                        participants: details.participants,
                    });
                }
                Ok(Roster { activities })
            }
        }

        deserializer.deserialize_map(RosterVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_keeps_server_order() {
        let json = r#"{
            "Programming Class": {
                "description": "Learn programming fundamentals",
                "schedule": "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                "max_participants": 20,
                "participants": ["emma@mergington.edu", "sophia@mergington.edu"]
            },
            "Chess Club": {
                "description": "Learn strategies and compete in chess tournaments",
                "schedule": "Fridays, 3:30 PM - 5:00 PM",
                "max_participants": 12,
                "participants": ["michael@mergington.edu"]
            }
        }"#;

        let roster: Roster = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = roster.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Programming Class", "Chess Club"]);

        let chess = roster.get("Chess Club").unwrap();
        assert_eq!(chess.max_participants, 12);
        assert_eq!(chess.participants, vec!["michael@mergington.edu"]);
        assert_eq!(chess.spots_left(), 11);
    }

    #[test]
    fn test_roster_rejects_non_object() {
        assert!(serde_json::from_str::<Roster>("[]").is_err());
        assert!(serde_json::from_str::<Roster>(r#"{"Chess Club": {"participants": []}}"#).is_err());
    }

    #[test]
    fn test_spots_left() {
        let activity = Activity::new("Chess Club", 10).participant("a@x.com");
        assert_eq!(activity.spots_left(), 9);

        let full = Activity::new("Tiny", 1).participant("a@x.com").participant("b@x.com");
        assert_eq!(full.spots_left(), -1);

        assert_eq!(Activity::new("Empty", 0).spots_left(), 0);
    }
}
