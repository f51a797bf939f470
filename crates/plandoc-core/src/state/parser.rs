//! Line-oriented parser and serializer for `state.md`.
//!
//! The grammar is deliberately permissive:
//! - `## <Header>` opens a section when the header names one of the five
//!   known sections (case-insensitive, `Testing Approach` aliases `testing`).
//!   The header must match exactly: `## Summary ` with trailing whitespace is
//!   content, not a boundary.
//! - Any other `## ...` line inside a section is kept as content, so extra
//!   sub-headings survive a rewrite.
//! - `# ...` title lines are always dropped, as is anything before the first
//!   known header.
//!
//! Parsing never fails.

use super::document::{StateDocument, StateSection};

/// Classification of a single input line.
enum Line<'a> {
    /// `## <Header>` naming a known section.
    Header(StateSection),
    /// `# ...` title line.
    Title,
    Text(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    if let Some(header) = line.strip_prefix("## ") {
        if let Some(section) = StateSection::from_header(header) {
            return Line::Header(section);
        }
    } else if line.starts_with("# ") {
        return Line::Title;
    }
    Line::Text(line)
}

/// Parser position: either before the first known header or inside one.
enum Cursor<'a> {
    Preamble,
    InSection {
        section: StateSection,
        lines: Vec<&'a str>,
    },
}

impl Cursor<'_> {
    /// Store the accumulated section body (if any) into `doc`.
    fn flush(self, doc: &mut StateDocument) {
        if let Cursor::InSection { section, lines } = self {
            doc.set(section, lines.join("\n").trim());
        }
    }
}

/// Parse the text of a state document.
///
/// Sections that never appear are left empty. A section that appears more
/// than once keeps the body of its last occurrence.
pub fn parse_state(content: &str) -> StateDocument {
    let mut doc = StateDocument::default();
    let mut cursor = Cursor::Preamble;

    for line in content.lines() {
        match classify(line) {
            Line::Header(section) => {
                cursor.flush(&mut doc);
                cursor = Cursor::InSection {
                    section,
                    lines: Vec::new(),
                };
            }
            Line::Title => {}
            Line::Text(text) => {
                if let Cursor::InSection { lines, .. } = &mut cursor {
                    lines.push(text);
                }
            }
        }
    }
    cursor.flush(&mut doc);

    doc
}

/// Render a state document in canonical section order.
///
/// Every section gets its header, a blank line, its body and a trailing
/// blank line, even when the body is empty.
pub fn serialize_state(project_name: &str, doc: &StateDocument) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {project_name} - State\n"));
    for section in StateSection::ALL {
        out.push('\n');
        out.push_str(&format!("## {}\n\n", section.header()));
        out.push_str(doc.get(section));
        out.push('\n');
    }
    out
}
