#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use crate::models::person::Proficiency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    Important,
    #[serde(alias = "Nice to Have")]
    NiceToHave,
}

impl Priority {
    /// Fixed multiplier: Critical=3, Important=2, NiceToHave=1.
    pub fn weight(self) -> u32 {
        match self {
            Priority::Critical => 3,
            Priority::Important => 2,
            Priority::NiceToHave => 1,
        }
    }
}

/// A weighted skill a project needs. `min_proficiency` is not clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRequirement {
    pub id: String,
    pub name: String,
    #[serde(alias = "proficiency")]
    pub min_proficiency: i32,
    pub priority: Priority,
}

impl SkillRequirement {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        min_proficiency: i32,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            min_proficiency,
            priority,
        }
    }

    pub fn weight(&self) -> u32 {
        self.priority.weight()
    }

    /// Binary check used by coverage.
    pub fn is_met_by(&self, level: Proficiency) -> bool {
        i32::from(level.level()) >= self.min_proficiency
    }

    /// Fraction of the minimum reached, capped at 1.0.
    /// A non-positive minimum is met by anyone holding the skill.
    pub fn attainment(&self, level: Proficiency) -> f64 {
        if self.min_proficiency <= 0 {
            return 1.0;
        }
        (f64::from(level.level()) / f64::from(self.min_proficiency)).min(1.0)
    }
}
