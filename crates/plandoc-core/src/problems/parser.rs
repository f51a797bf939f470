//! Line-oriented parser and block serializer for `problems.md`.
//!
//! ```text
//! ### Problem: <title>
//!
//! **Status:** <status>
//! **Severity:** <severity>
//! **Description:** <first line>
//! <more description lines>
//! ```
//!
//! A `### Problem:` line opens a new entry. `**Description:**` opens a
//! multi-line field that runs until the next marker or entry header. Lines
//! outside an entry or outside an open field are ignored. Parsing never
//! fails.

use super::entry::{NewProblem, ProblemEntry};

const ENTRY_PREFIX: &str = "### Problem: ";
const STATUS_MARKER: &str = "**Status:**";
const SEVERITY_MARKER: &str = "**Severity:**";
const DESCRIPTION_MARKER: &str = "**Description:**";

#[derive(Clone, Copy)]
enum Line<'a> {
    Entry(&'a str),
    Status(&'a str),
    Severity(&'a str),
    Description(&'a str),
    Text(&'a str),
}

/// Trimmed value after a single-line marker, or `None` when it is empty.
fn marker_value<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.strip_prefix(marker)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn classify(line: &str) -> Line<'_> {
    if let Some(title) = marker_value(line, ENTRY_PREFIX) {
        return Line::Entry(title);
    }
    if let Some(status) = marker_value(line, STATUS_MARKER) {
        return Line::Status(status);
    }
    if let Some(severity) = marker_value(line, SEVERITY_MARKER) {
        return Line::Severity(severity);
    }
    if let Some(first) = line.strip_prefix(DESCRIPTION_MARKER) {
        return Line::Description(first.trim_start());
    }
    Line::Text(line)
}

/// The multi-line field currently being accumulated, if any.
enum Field<'a> {
    Closed,
    Description(Vec<&'a str>),
}

enum Cursor<'a> {
    Outside,
    InEntry {
        entry: ProblemEntry,
        field: Field<'a>,
    },
}

impl Cursor<'_> {
    /// Close the open field of the current entry.
    fn close_field(&mut self) {
        if let Cursor::InEntry { entry, field } = self {
            if let Field::Description(lines) = std::mem::replace(field, Field::Closed) {
                entry.description = lines.join("\n").trim().to_owned();
            }
        }
    }

    /// Close the current entry and push it onto `out`.
    fn finish(mut self, out: &mut Vec<ProblemEntry>) {
        self.close_field();
        if let Cursor::InEntry { entry, .. } = self {
            out.push(entry);
        }
    }
}

/// Parse the text of a problems document into entries, in file order.
pub fn parse_problems(content: &str) -> Vec<ProblemEntry> {
    let mut problems = Vec::new();
    let mut cursor = Cursor::Outside;

    for line in content.lines() {
        match classify(line) {
            Line::Entry(title) => {
                cursor.finish(&mut problems);
                cursor = Cursor::InEntry {
                    entry: ProblemEntry::new(title),
                    field: Field::Closed,
                };
            }
            Line::Status(value) => {
                cursor.close_field();
                if let Cursor::InEntry { entry, .. } = &mut cursor {
                    entry.status = value.to_lowercase();
                }
            }
            Line::Severity(value) => {
                cursor.close_field();
                if let Cursor::InEntry { entry, .. } = &mut cursor {
                    entry.severity = value.to_lowercase();
                }
            }
            Line::Description(first) => {
                cursor.close_field();
                if let Cursor::InEntry { field, .. } = &mut cursor {
                    let lines = if first.is_empty() { Vec::new() } else { vec![first] };
                    *field = Field::Description(lines);
                }
            }
            Line::Text(text) => {
                if let Cursor::InEntry {
                    field: Field::Description(lines),
                    ..
                } = &mut cursor
                {
                    lines.push(text);
                }
            }
        }
    }
    cursor.finish(&mut problems);

    problems
}

/// Render one problem block, ending in a newline.
pub fn render_problem(problem: &NewProblem) -> String {
    format!(
        "{ENTRY_PREFIX}{}\n\n{STATUS_MARKER} {}\n{SEVERITY_MARKER} {}\n{DESCRIPTION_MARKER} {}\n",
        problem.title,
        problem.effective_status(),
        problem.effective_severity(),
        problem.description,
    )
}
