//! Student profile — the request-scoped bundle of everything the form collects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Post-secondary track. Decides which qualification fields are collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pathway {
    JuniorCollege,
    Polytechnic,
    Ite,
}

impl Pathway {
    pub const ALL: [Pathway; 3] = [Pathway::JuniorCollege, Pathway::Polytechnic, Pathway::Ite];

    /// Label shown in the select box and embedded in the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Pathway::JuniorCollege => "Junior College (JC)",
            Pathway::Polytechnic => "Polytechnic",
            Pathway::Ite => "Institute of Technical Education (ITE)",
        }
    }

    /// Short form value used by the HTML select.
    pub fn code(&self) -> &'static str {
        match self {
            Pathway::JuniorCollege => "JC",
            Pathway::Polytechnic => "Polytechnic",
            Pathway::Ite => "ITE",
        }
    }

    pub fn requires_a_levels(&self) -> bool {
        matches!(self, Pathway::JuniorCollege)
    }

    /// Form labels for the qualification and grade inputs, `None` for JC.
    pub fn qualification_labels(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Pathway::JuniorCollege => None,
            Pathway::Polytechnic => Some(("Polytechnic Qualification", "Polytechnic Grade")),
            Pathway::Ite => Some(("ITE Qualification", "ITE Grade")),
        }
    }
}

impl fmt::Display for Pathway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown post-secondary pathway '{0}'")]
pub struct UnknownPathway(pub String);

impl FromStr for Pathway {
    type Err = UnknownPathway;

    /// Accepts the short code or the full label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Pathway::ALL
            .into_iter()
            .find(|p| {
                p.code().eq_ignore_ascii_case(needle) || p.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| UnknownPathway(s.to_string()))
    }
}

/// Everything the student typed in, after the pathway branch has been resolved.
///
/// Only one of `a_level_results` or `qualification`/`qualification_grades`
/// is ever populated, depending on `pathway`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub o_level_results: String,
    pub pathway: Option<Pathway>,
    pub a_level_results: Option<String>,
    pub qualification: Option<String>,
    pub qualification_grades: Option<String>,
    pub skills: String,
    pub career_goals: String,
    pub interests: String,
    pub country: String,
}

/// Raw field values as submitted by the form or the JSON API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileInput {
    pub o_level_results: String,
    pub post_secondary_pathway: String,
    pub a_level_results: String,
    pub qualification: String,
    pub qualification_grades: String,
    pub skills: String,
    pub career_goals: String,
    pub interests: String,
    pub country: String,
}

impl ProfileInput {
    /// Resolves the pathway and drops the fields that do not belong to it.
    ///
    /// An empty pathway is allowed here (presence is checked by the prompt
    /// builder); an unrecognised one is not.
    pub fn into_profile(self) -> Result<StudentProfile, UnknownPathway> {
        let pathway = if self.post_secondary_pathway.trim().is_empty() {
            None
        } else {
            Some(self.post_secondary_pathway.parse::<Pathway>()?)
        };

        let (a_level_results, qualification, qualification_grades) = match pathway {
            Some(Pathway::JuniorCollege) => (Some(self.a_level_results), None, None),
            Some(_) => (None, Some(self.qualification), Some(self.qualification_grades)),
            None => (None, None, None),
        };

        Ok(StudentProfile {
            o_level_results: self.o_level_results,
            pathway,
            a_level_results,
            qualification,
            qualification_grades,
            skills: self.skills,
            career_goals: self.career_goals,
            interests: self.interests,
            country: self.country,
        })
    }
}
