//! Presentation Formatter — swaps plain words for emoji-prefixed labels.
//!
//! Entries are applied in declaration order and every case-sensitive
//! occurrence is replaced. The order is part of the contract.

/// Ordered (match, replacement) table.
///
/// No replacement contains any match key, so one pass never re-triggers
/// another entry.
pub const EMOJI_LABELS: &[(&str, &str)] = &[
    ("university", "🏛️ University"),
    ("certification", "📜 Certification"),
    ("industry", "🏢 Industry"),
    ("job roles", "💼 Job Roles"),
    ("career path", "🚀 Career Path"),
    ("skills", "🛠️ Skills"),
    ("experience", "📅 Experience"),
    ("internship", "💼 Internship"),
    ("degree", "🎓 Degree"),
    ("project", "📁 Project"),
    ("learning", "📘 Learning"),
    ("salary", "💰 Salary"),
    ("technology", "💻 Technology"),
    ("interview", "🤝 Interview"),
    ("qualification", "🎓 Qualification"),
    ("opportunities", "🚪 Opportunities"),
];

pub fn add_emoji_labels(text: &str) -> String {
    EMOJI_LABELS
        .iter()
        .fold(text.to_string(), |acc, (word, label)| acc.replace(word, label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_sixteen_entries() {
        assert_eq!(EMOJI_LABELS.len(), 16);
    }

    #[test]
    fn test_no_replacement_contains_a_key() {
        for (_, label) in EMOJI_LABELS {
            for (key, _) in EMOJI_LABELS {
                assert!(
                    !label.contains(key),
                    "replacement '{label}' contains key '{key}'"
                );
            }
        }
    }

    #[test]
    fn test_example_sentence_gets_four_labels() {
        let out = add_emoji_labels("I want a university degree and internship experience");
        assert_eq!(
            out,
            "I want a 🏛️ University 🎓 Degree and 💼 Internship 📅 Experience"
        );
    }

    #[test]
    fn test_every_occurrence_replaced() {
        let out = add_emoji_labels("skills, more skills, soft skills");
        assert_eq!(out, "🛠️ Skills, more 🛠️ Skills, soft 🛠️ Skills");
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(add_emoji_labels("University Degree"), "University Degree");
    }

    #[test]
    fn test_multi_word_keys() {
        let out = add_emoji_labels("Explore job roles along a career path");
        assert_eq!(out, "Explore 💼 Job Roles along a 🚀 Career Path");
    }

    #[test]
    fn test_idempotent() {
        let text = "Pursue a degree at a university, gain internship experience, \
            explore job roles in the technology industry and prepare for every interview.";
        let once = add_emoji_labels(text);
        let twice = add_emoji_labels(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_idempotent_over_whole_table() {
        let every_key = EMOJI_LABELS
            .iter()
            .map(|(key, _)| *key)
            .collect::<Vec<_>>()
            .join(" ");
        let once = add_emoji_labels(&every_key);
        assert_eq!(add_emoji_labels(&once), once);
        for (key, _) in EMOJI_LABELS {
            assert!(!once.contains(key), "'{key}' left in '{once}'");
        }

        for glued in [
            "job roleskills",
            "opportunitieskills",
            "degreexperience",
            "internshiproject",
            "skillsalary",
        ] {
            let once = add_emoji_labels(glued);
            assert_eq!(add_emoji_labels(&once), once, "not idempotent for '{glued}'");
        }
        assert_eq!(add_emoji_labels("job roleskills"), "💼 Job Role🛠️ Skills");
    }

    #[test]
    fn test_untouched_text() {
        assert_eq!(add_emoji_labels("Hello there"), "Hello there");
        assert_eq!(add_emoji_labels(""), "");
    }
}
