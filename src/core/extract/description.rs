//! Human-readable component descriptions.
//!
//! Resolution order:
//! 1. First line of the first `/** ... */` doc comment
//! 2. Built-in description for well-known component names
//! 3. Content heuristics ([`HEURISTICS`], first match wins)
//! 4. `"<Name> component"`

use std::sync::LazyLock;

use regex::Regex;

// Captures the body of a doc comment, single-line or multi-line.
static DOC_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*\*(.*?)\*/").unwrap());

/// Descriptions for common component names.
pub const KNOWN_DESCRIPTIONS: &[(&str, &str)] = &[
    ("button", "A customizable button component with multiple variants and sizes"),
    ("input", "A form input component with validation states and custom styling"),
    ("card", "A flexible card component for content organization and layout"),
    ("dialog", "A modal dialog component built on Radix UI primitives"),
    ("select", "A select dropdown component with search and multi-select capabilities"),
    ("textarea", "A multi-line text input component with auto-resize functionality"),
    ("checkbox", "A checkbox input component with indeterminate state support"),
    ("radio", "A radio button input component for single-selection forms"),
    ("switch", "A toggle switch component for boolean settings"),
    ("slider", "A range slider component for numeric value selection"),
    ("progress", "A progress bar component for showing completion status"),
    ("avatar", "An avatar component for displaying user profile images"),
    ("badge", "A small badge component for labels and status indicators"),
    ("alert", "An alert component for displaying important messages"),
    ("tooltip", "A tooltip component for providing contextual information"),
];

/// A content heuristic: fires when the source contains every marker.
pub struct Heuristic {
    pub markers: &'static [&'static str],
    /// Template where `{name}` is replaced by the component name.
    pub template: &'static str,
}

pub const HEURISTICS: &[Heuristic] = &[
    Heuristic {
        markers: &["forwardRef", "input"],
        template: "A form {name} input component with custom styling",
    },
    Heuristic {
        markers: &["variant", "size"],
        template: "A customizable {name} component with multiple variants and sizes",
    },
    Heuristic {
        markers: &["Radix"],
        template: "A {name} component built on Radix UI primitives",
    },
];

impl Heuristic {
    pub fn matches(&self, source: &str) -> bool {
        self.markers.iter().all(|m| source.contains(m))
    }

    pub fn render(&self, name: &str) -> String {
        self.template.replace("{name}", name)
    }
}

pub fn describe(source: &str, name: &str) -> String {
    doc_comment_summary(source)
        .or_else(|| known_description(name).map(str::to_string))
        .or_else(|| {
            HEURISTICS
                .iter()
                .find(|h| h.matches(source))
                .map(|h| h.render(name))
        })
        .unwrap_or_else(|| fallback_description(name))
}

/// First non-empty text line of the first doc comment.
pub fn doc_comment_summary(source: &str) -> Option<String> {
    let body = DOC_COMMENT_REGEX.captures(source)?.get(1)?.as_str();
    body.lines()
        .map(|line| line.trim().trim_start_matches('*').trim())
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

pub fn known_description(name: &str) -> Option<&'static str> {
    KNOWN_DESCRIPTIONS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, description)| *description)
}

pub fn fallback_description(name: &str) -> String {
    format!("{} component", capitalize(name))
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
