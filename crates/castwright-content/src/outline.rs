//! Outline text parser
//!
//! Turns loosely formatted heading/bullet markdown, as produced by a text
//! generation call, into ordered `{title, points}` sections.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::OutlineSection;

fn numbered_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.").expect("must be valid regex"))
}

fn heading_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[#\d.\s]+").expect("must be valid regex"))
}

fn numbered_bullet() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\)\s*").expect("must be valid regex"))
}

enum Line<'a> {
    Heading(&'a str),
    Bullet(&'a str),
    Text,
}

/// Classify a trimmed, non-empty line
///
/// The heading check runs first, so `1.` lines are headings even though
/// they also look like list items.
fn classify(line: &str) -> Line<'_> {
    if line.starts_with('#') || numbered_heading().is_match(line) {
        let title = heading_prefix().find(line).map_or(line, |m| &line[m.end()..]);
        return Line::Heading(title.trim());
    }

    if let Some(rest) = line.strip_prefix('-').or_else(|| line.strip_prefix('*')) {
        return Line::Bullet(rest.trim());
    }

    if let Some(m) = numbered_bullet().find(line) {
        return Line::Bullet(line[m.end()..].trim());
    }

    Line::Text
}

/// Parse outline markdown into sections
///
/// Bullets that appear before any heading have no section to attach to and
/// are dropped. Plain text lines are ignored. When no heading is found the
/// fixed three-section fallback is returned.
pub fn parse_outline(text: &str) -> Vec<OutlineSection> {
    let mut sections = Vec::new();
    let mut current: Option<OutlineSection> = None;

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match classify(line) {
            Line::Heading(title) => {
                if let Some(done) = current.replace(OutlineSection {
                    title: title.to_owned(),
                    points: Vec::new(),
                }) {
                    sections.push(done);
                }
            }
            Line::Bullet(point) => {
                if let Some(section) = current.as_mut() {
                    section.points.push(point.to_owned());
                }
            }
            Line::Text => {}
        }
    }

    sections.extend(current);

    if sections.is_empty() {
        return fallback_sections();
    }

    sections
}

/// Introduction / Main Discussion / Conclusion, one generic point each
pub fn fallback_sections() -> Vec<OutlineSection> {
    [
        ("Introduction", "Welcome and topic overview"),
        ("Main Discussion", "Key points and analysis"),
        ("Conclusion", "Summary and final thoughts"),
    ]
    .into_iter()
    .map(|(title, point)| OutlineSection {
        title: title.to_owned(),
        points: vec![point.to_owned()],
    })
    .collect()
}
