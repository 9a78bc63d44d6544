//! Server-side HTML for the single-page form and its two result panels.
//!
//! All student input and model output is escaped before it is written out.

pub mod style;

use crate::advisor::profile::{Pathway, ProfileInput};
use crate::advisor::service::AdvisorReport;
use style::{PAGE_CSS, PATHWAY_SCRIPT};

const TITLE: &str = "🎓PathFinder.2 by Studentpod 📖";
const FOOTER: &str = "Created with 💚 by Studentpod 💼";

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escapes a line and turns `[label](http…)` markdown links into anchors.
pub fn render_inline(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(open) = rest.find('[') {
        let Some((label, url, consumed)) = parse_link(&rest[open..]) else {
            out.push_str(&escape_html(&rest[..=open]));
            rest = &rest[open + 1..];
            continue;
        };
        out.push_str(&escape_html(&rest[..open]));
        out.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
            escape_html(url),
            escape_html(label)
        ));
        rest = &rest[open + consumed..];
    }

    out.push_str(&escape_html(rest));
    out
}

/// Parses `[label](url)` at the start of `s`. Only http(s) targets count.
///
/// Parentheses inside the URL must be balanced.
fn parse_link(s: &str) -> Option<(&str, &str, usize)> {
    let close = s.find("](")?;
    let label = &s[1..close];
    if label.contains('[') || label.contains(']') {
        return None;
    }
    let after = &s[close + 2..];
    let end = closing_paren(after)?;
    let url = &after[..end];
    if !(url.starts_with("http://") || url.starts_with("https://")) || url.contains(char::is_whitespace) {
        return None;
    }
    Some((label, url, close + 2 + end + 1))
}

/// Index of the `)` that closes an already-opened parenthesis.
fn closing_paren(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, ch) in s.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' if depth == 0 => return Some(i),
            ')' => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Multi-line model text as escaped HTML with `<br>` line breaks.
pub fn render_multiline(text: &str) -> String {
    text.lines()
        .map(render_inline)
        .collect::<Vec<_>>()
        .join("<br>\n")
}

fn text_field(html: &mut String, name: &str, label: &str, hint: &str, value: &str) {
    html.push_str(&format!(
        "<label for=\"{name}\">{label} <span class=\"hint\">{hint}</span></label>\n\
         <input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{}\">\n",
        escape_html(value)
    ));
}

fn qualification_hints(pathway: Pathway) -> (&'static str, &'static str) {
    match pathway {
        Pathway::Ite => ("Higher Nitec in Electronics Engineering", "GPA 3.5/4"),
        _ => ("Diploma in Engineering", "GPA 3.5/4"),
    }
}

fn qualification_label_texts(pathway: Pathway) -> (String, String) {
    let (qualification, grade) = pathway
        .qualification_labels()
        .unwrap_or(("Qualification", "Grade"));
    let (q_hint, g_hint) = qualification_hints(pathway);
    (
        format!("🎓 {qualification} (e.g., {q_hint})"),
        format!("📈 {grade} (e.g., {g_hint})"),
    )
}

fn render_form(html: &mut String, input: &ProfileInput) {
    // Unparseable or empty values fall back to the first option.
    let selected = input
        .post_secondary_pathway
        .parse::<Pathway>()
        .unwrap_or(Pathway::JuniorCollege);

    html.push_str("<form method=\"post\" action=\"/\">\n");

    text_field(
        html,
        "o_level_results",
        "📝 O-Level Results",
        "(e.g., Math: A1, English: A2, Science: B3)",
        &input.o_level_results,
    );

    html.push_str(
        "<label for=\"post_secondary_pathway\">📚 Post-Secondary Education Pathway</label>\n\
         <select id=\"post_secondary_pathway\" name=\"post_secondary_pathway\">\n",
    );
    for pathway in Pathway::ALL {
        let (q_label, g_label) = qualification_label_texts(pathway);
        html.push_str(&format!(
            "<option value=\"{}\" data-qualification=\"{}\" data-grade=\"{}\"{}>{}</option>\n",
            pathway.code(),
            escape_html(&q_label),
            escape_html(&g_label),
            if pathway == selected { " selected" } else { "" },
            pathway.label()
        ));
    }
    html.push_str("</select>\n");

    let is_jc = selected.requires_a_levels();
    html.push_str(&format!(
        "<div id=\"jc-fields\"{}>\n",
        if is_jc { "" } else { " hidden" }
    ));
    text_field(
        html,
        "a_level_results",
        "📝 A-Level Results",
        "(e.g., Math: A, Physics: A, Chemistry: B)",
        &input.a_level_results,
    );
    html.push_str("</div>\n");

    let (q_label, g_label) = qualification_label_texts(if is_jc { Pathway::Polytechnic } else { selected });
    html.push_str(&format!(
        "<div id=\"qualification-fields\"{}>\n",
        if is_jc { " hidden" } else { "" }
    ));
    html.push_str(&format!(
        "<label id=\"qualification-label\" for=\"qualification\">{}</label>\n\
         <input type=\"text\" id=\"qualification\" name=\"qualification\" value=\"{}\">\n\
         <label id=\"grade-label\" for=\"qualification_grades\">{}</label>\n\
         <input type=\"text\" id=\"qualification_grades\" name=\"qualification_grades\" value=\"{}\">\n",
        escape_html(&q_label),
        escape_html(&input.qualification),
        escape_html(&g_label),
        escape_html(&input.qualification_grades),
    ));
    html.push_str("</div>\n");

    text_field(
        html,
        "skills",
        "🛠️ Skills",
        "(e.g., Programming, Communication, Design)",
        &input.skills,
    );
    text_field(
        html,
        "career_goals",
        "🚀 Career Goals",
        "(e.g., Software Engineer, Entrepreneur)",
        &input.career_goals,
    );
    text_field(
        html,
        "interests",
        "🎨 Interests",
        "(e.g., Technology, Business, Arts)",
        &input.interests,
    );
    text_field(
        html,
        "country",
        "🌍 Preferred Country to Study/Work",
        "(e.g., Singapore, USA, UK)",
        &input.country,
    );

    html.push_str("<button type=\"submit\">💡 Get Career Recommendation</button>\n</form>\n");
}

fn render_report(html: &mut String, report: &AdvisorReport) {
    html.push_str(&format!(
        "<div class=\"recommendation-box fade-in-text\">{}</div>\n",
        render_multiline(&report.recommendation)
    ));

    if report.resources.is_empty() {
        return;
    }

    html.push_str("<div class=\"subheader fade-in-text\">📚 Helpful Resources</div>\n");
    html.push_str("<div class=\"resources-box fade-in-text\">\n<ul>\n");
    for resource in report.resources.iter().filter(|r| !r.trim().is_empty()) {
        let item = resource
            .trim()
            .trim_start_matches("- ")
            .trim_start_matches("* ");
        html.push_str(&format!("<li>{}</li>\n", render_inline(item)));
    }
    html.push_str("</ul>\n</div>\n");
}

/// Full page: form (re-filled with `input`) and, after a submission, both panels.
pub fn render_page(input: &ProfileInput, report: Option<&AdvisorReport>) -> String {
    let mut html = String::with_capacity(8192);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("<title>PathFinder</title>\n<style>\n");
    html.push_str(PAGE_CSS);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");
    html.push_str(&format!("<div class=\"header fade-in-text\">{TITLE}</div>\n"));

    render_form(&mut html, input);

    if let Some(report) = report {
        render_report(&mut html, report);
    }

    html.push_str(&format!(
        "<p class=\"footer\"><strong>{FOOTER}</strong></p>\n</div>\n<script>{PATHWAY_SCRIPT}</script>\n</body>\n</html>\n"
    ));
    html
}
