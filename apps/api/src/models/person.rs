#![allow(dead_code)]

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub const MIN_PROFICIENCY: u8 = 1;
pub const MAX_PROFICIENCY: u8 = 5;

/// Skill level from 1 (novice) to 5 (expert).
///
/// Out-of-range input is clamped here, at construction and deserialization,
/// so the scoring code can assume the 1–5 domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Proficiency(u8);

impl Proficiency {
    pub fn new(level: i64) -> Self {
        Self(level.clamp(MIN_PROFICIENCY as i64, MAX_PROFICIENCY as i64) as u8)
    }

    pub fn level(self) -> u8 {
        self.0
    }
}

impl From<i64> for Proficiency {
    fn from(level: i64) -> Self {
        Self::new(level)
    }
}

impl From<Proficiency> for u8 {
    fn from(p: Proficiency) -> Self {
        p.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub proficiency: Proficiency,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: i64) -> Self {
        Self {
            name: name.into(),
            proficiency: Proficiency::new(level),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    Available,
    #[serde(alias = "Partially Available")]
    PartiallyAvailable,
    Unavailable,
}

/// A candidate team member as supplied by the caller.
///
/// Skill names are unique per person; when a duplicate is supplied the first
/// occurrence wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PersonRecord")]
pub struct Person {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    skills: Vec<Skill>,
    pub availability: Availability,
}

impl Person {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        skills: impl IntoIterator<Item = Skill>,
        availability: Availability,
    ) -> Self {
        let mut seen = HashSet::new();
        let skills = skills
            .into_iter()
            .filter(|s| seen.insert(s.name.clone()))
            .collect();

        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            avatar_url: None,
            skills,
            availability,
        }
    }

    pub fn with_avatar(mut self, avatar_url: Option<String>) -> Self {
        self.avatar_url = avatar_url;
        self
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Proficiency in the skill with exactly this name, if held.
    pub fn proficiency_in(&self, skill_name: &str) -> Option<Proficiency> {
        self.skills
            .iter()
            .find(|s| s.name == skill_name)
            .map(|s| s.proficiency)
    }

    pub fn is_unavailable(&self) -> bool {
        self.availability == Availability::Unavailable
    }
}

/// Wire shape of a person before skill de-duplication.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersonRecord {
    id: String,
    name: String,
    role: String,
    #[serde(default)]
    avatar_url: Option<String>,
    #[serde(default)]
    skills: Vec<Skill>,
    availability: Availability,
}

impl From<PersonRecord> for Person {
    fn from(r: PersonRecord) -> Self {
        Person::new(r.id, r.name, r.role, r.skills, r.availability).with_avatar(r.avatar_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proficiency_clamps_out_of_range() {
        assert_eq!(Proficiency::new(0).level(), 1);
        assert_eq!(Proficiency::new(-7).level(), 1);
        assert_eq!(Proficiency::new(9).level(), 5);
        assert_eq!(Proficiency::new(3).level(), 3);
    }

    #[test]
    fn test_proficiency_clamped_on_deserialize() {
        let skill: Skill = serde_json::from_str(r#"{"name": "Rust", "proficiency": 12}"#).unwrap();
        assert_eq!(skill.proficiency.level(), 5);
    }

    #[test]
    fn test_duplicate_skill_names_keep_first() {
        let person = Person::new(
            "u1",
            "Alice",
            "Frontend Dev",
            vec![Skill::new("React", 5), Skill::new("React", 1)],
            Availability::Available,
        );
        assert_eq!(person.skills().len(), 1);
        assert_eq!(person.proficiency_in("React"), Some(Proficiency::new(5)));
    }

    #[test]
    fn test_skill_lookup_is_exact_match() {
        let person = Person::new(
            "u1",
            "Alice",
            "Frontend Dev",
            vec![Skill::new("React", 5)],
            Availability::Available,
        );
        assert_eq!(person.proficiency_in("react"), None);
        assert_eq!(person.proficiency_in("React"), Some(Proficiency::new(5)));
    }

    #[test]
    fn test_person_deserializes_dashboard_shape() {
        let json = r#"{
            "id": "u3",
            "name": "Charlie Brown",
            "avatarUrl": "https://picsum.photos/seed/charlie/100",
            "role": "UI/UX Designer",
            "availability": "Partially Available",
            "skills": [
                {"name": "Figma", "proficiency": 5},
                {"name": "Figma", "proficiency": 2}
            ]
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.availability, Availability::PartiallyAvailable);
        assert_eq!(person.skills().len(), 1, "duplicate skill must be collapsed");
        assert_eq!(
            person.avatar_url.as_deref(),
            Some("https://picsum.photos/seed/charlie/100")
        );
    }

    #[test]
    fn test_person_serializes_camel_case() {
        let person = Person::new("u1", "Alice", "Frontend Dev", vec![], Availability::Available)
            .with_avatar(Some("a.png".to_string()));
        let value = serde_json::to_value(&person).unwrap();
        assert_eq!(value["avatarUrl"], "a.png");
        assert_eq!(value["availability"], "Available");
        assert!(value["skills"].as_array().unwrap().is_empty());
    }
}
