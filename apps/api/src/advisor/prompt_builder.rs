//! Prompt Builder — turns a `StudentProfile` into the recommendation prompt.
//!
//! Presence checks run first. A failed check never reaches the completion
//! backend; the caller shows the error text in place of a recommendation.

use thiserror::Error;

use crate::advisor::profile::{Pathway, StudentProfile};
use crate::advisor::prompts::{RECOMMENDATION_CLOSING, RECOMMENDATION_OPENING};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("❌ Please provide complete information: O-Level results, post-secondary pathway, qualification, skills, and career goals.")]
    MissingRequired,

    #[error("❌ Please provide your A-Level results for the Junior College pathway.")]
    MissingALevels,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn is_blank_opt(value: Option<&str>) -> bool {
    value.map_or(true, is_blank)
}

/// Presence checks only. Returns the pathway once it is known to be set.
pub fn validate_profile(profile: &StudentProfile) -> Result<Pathway, ProfileError> {
    let pathway = match profile.pathway {
        Some(p)
            if !is_blank(&profile.o_level_results)
                && !is_blank(&profile.skills)
                && !is_blank(&profile.career_goals) =>
        {
            p
        }
        _ => return Err(ProfileError::MissingRequired),
    };

    if pathway.requires_a_levels() && is_blank_opt(profile.a_level_results.as_deref()) {
        return Err(ProfileError::MissingALevels);
    }

    Ok(pathway)
}

/// Builds the recommendation prompt.
///
/// Field order: O-Level results, pathway-specific block, pathway, skills,
/// career goals, interests, preferred country, closing instruction.
pub fn build_recommendation_prompt(profile: &StudentProfile) -> Result<String, ProfileError> {
    let pathway = validate_profile(profile)?;

    let mut prompt = format!(
        "{RECOMMENDATION_OPENING}\nO-Level Results: {}\n",
        profile.o_level_results
    );

    if pathway.requires_a_levels() {
        prompt.push_str(&format!(
            "A-Level Results: {}\n",
            profile.a_level_results.as_deref().unwrap_or_default()
        ));
    } else {
        prompt.push_str(&format!(
            "Qualification: {} (Grades: {})\n",
            profile.qualification.as_deref().unwrap_or_default(),
            profile.qualification_grades.as_deref().unwrap_or_default()
        ));
    }

    prompt.push_str(&format!(
        "Post-Secondary Pathway: {}\nSkills: {}\nCareer Goals: {}\nInterests: {}\nPreferred Country: {}\n{RECOMMENDATION_CLOSING}",
        pathway.label(),
        profile.skills,
        profile.career_goals,
        profile.interests,
        profile.country,
    ));

    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly_profile() -> StudentProfile {
        StudentProfile {
            o_level_results: "Math: A1".to_string(),
            pathway: Some(Pathway::Polytechnic),
            a_level_results: None,
            qualification: Some("Diploma in IT".to_string()),
            qualification_grades: Some("GPA 3.8".to_string()),
            skills: "Coding".to_string(),
            career_goals: "Software Engineer".to_string(),
            interests: "Tech".to_string(),
            country: "Singapore".to_string(),
        }
    }

    fn jc_profile() -> StudentProfile {
        StudentProfile {
            pathway: Some(Pathway::JuniorCollege),
            a_level_results: Some("Math: A, Physics: A".to_string()),
            qualification: None,
            qualification_grades: None,
            ..poly_profile()
        }
    }

    #[test]
    fn test_missing_o_levels() {
        let profile = StudentProfile {
            o_level_results: String::new(),
            ..poly_profile()
        };
        assert_eq!(
            build_recommendation_prompt(&profile),
            Err(ProfileError::MissingRequired)
        );
    }

    #[test]
    fn test_missing_pathway() {
        let profile = StudentProfile {
            pathway: None,
            ..poly_profile()
        };
        assert_eq!(
            build_recommendation_prompt(&profile),
            Err(ProfileError::MissingRequired)
        );
    }

    #[test]
    fn test_missing_skills_or_goals() {
        let no_skills = StudentProfile {
            skills: String::new(),
            ..poly_profile()
        };
        let no_goals = StudentProfile {
            career_goals: "   ".to_string(),
            ..poly_profile()
        };
        assert_eq!(validate_profile(&no_skills), Err(ProfileError::MissingRequired));
        assert_eq!(validate_profile(&no_goals), Err(ProfileError::MissingRequired));
    }

    #[test]
    fn test_interests_and_country_are_optional() {
        let profile = StudentProfile {
            interests: String::new(),
            country: String::new(),
            ..poly_profile()
        };
        assert!(build_recommendation_prompt(&profile).is_ok());
    }

    #[test]
    fn test_jc_without_a_levels() {
        let profile = StudentProfile {
            a_level_results: Some(String::new()),
            ..jc_profile()
        };
        let err = build_recommendation_prompt(&profile).unwrap_err();
        assert_eq!(err, ProfileError::MissingALevels);
        assert_eq!(
            err.to_string(),
            "❌ Please provide your A-Level results for the Junior College pathway."
        );
    }

    #[test]
    fn test_missing_required_message_text() {
        assert_eq!(
            ProfileError::MissingRequired.to_string(),
            "❌ Please provide complete information: O-Level results, post-secondary pathway, qualification, skills, and career goals."
        );
    }

    #[test]
    fn test_polytechnic_prompt_uses_qualification() {
        let prompt = build_recommendation_prompt(&poly_profile()).unwrap();
        assert!(prompt.contains("Qualification: Diploma in IT (Grades: GPA 3.8)\n"));
        assert!(!prompt.contains("A-Level"));
        assert!(prompt.contains("Post-Secondary Pathway: Polytechnic\n"));
    }

    #[test]
    fn test_ite_prompt_never_mentions_a_levels() {
        let profile = StudentProfile {
            pathway: Some(Pathway::Ite),
            a_level_results: Some("should not leak".to_string()),
            ..poly_profile()
        };
        let prompt = build_recommendation_prompt(&profile).unwrap();
        assert!(!prompt.contains("A-Level"));
        assert!(!prompt.contains("should not leak"));
        assert!(prompt.contains("Post-Secondary Pathway: Institute of Technical Education (ITE)"));
    }

    #[test]
    fn test_jc_prompt_uses_a_levels() {
        let prompt = build_recommendation_prompt(&jc_profile()).unwrap();
        assert!(prompt.contains("A-Level Results: Math: A, Physics: A\n"));
        assert!(!prompt.contains("Qualification:"));
    }

    #[test]
    fn test_field_order() {
        let prompt = build_recommendation_prompt(&poly_profile()).unwrap();
        let positions: Vec<usize> = [
            "O-Level Results:",
            "Qualification:",
            "Post-Secondary Pathway:",
            "Skills:",
            "Career Goals:",
            "Interests:",
            "Preferred Country:",
            "Include relevant details",
        ]
        .iter()
        .map(|label| prompt.find(label).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(prompt.starts_with(RECOMMENDATION_OPENING));
        assert!(prompt.ends_with(RECOMMENDATION_CLOSING));
    }
}
