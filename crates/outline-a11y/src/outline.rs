//! Outline Validation
//!
//! Single pass over the headings in document order. Each heading is checked
//! against three independent rules:
//! - at most one level-1 heading
//! - the first heading is level 1 or 2
//! - no heading is more than one level deeper than the heading before it
//!
//! A document without any level-1 heading gets a synthetic level-0 entry
//! in front of the outline.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::headings::HeadingDescriptor;
use crate::name::accessible_name;
use crate::source::NameSource;
use crate::OutlineError;

/// Label of the synthetic entry for a document without a top-level heading
pub const MISSING_TOP_LEVEL_TEXT: &str = "Missing top-level heading.";

/// Level used by the synthetic missing-top-level entry
pub const DOCUMENT_LEVEL: u8 = 0;

/// A rule broken by a heading (or by the document as a whole)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// A second (or later) level-1 heading
    MultipleTopLevel,
    /// The first heading is deeper than level 2
    InvalidFirstLevel,
    /// A heading skips one or more levels below its predecessor
    SkippedLevel { found: u8, previous: u8 },
    /// No level-1 heading anywhere
    MissingTopLevel,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MultipleTopLevel => write!(f, "Only one top-level heading is allowed on the page."),
            Self::InvalidFirstLevel => write!(f, "The first heading must be level 1 or level 2."),
            Self::SkippedLevel { found, previous } => write!(
                f,
                "Heading level should not skip levels. Found level {} after level {}.",
                found, previous
            ),
            Self::MissingTopLevel => write!(f, "The page must have at least one top-level heading."),
        }
    }
}

// Violations travel as their message text
impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One line of the annotated outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineEntry {
    /// Heading level, or `DOCUMENT_LEVEL` for the synthetic entry
    pub level: u8,
    /// Accessible name of the heading
    pub text: String,
    pub is_valid: bool,
    /// Every rule the heading breaks, in rule order
    pub violations: Vec<Violation>,
}

impl OutlineEntry {
    /// Entry for a real heading, valid until a violation is added
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            is_valid: true,
            violations: Vec::new(),
        }
    }

    /// The synthetic "no top-level heading" entry
    pub fn missing_top_level() -> Self {
        let mut entry = Self::heading(DOCUMENT_LEVEL, MISSING_TOP_LEVEL_TEXT);
        entry.add_violation(Violation::MissingTopLevel);
        entry
    }

    /// Record a violation and mark the entry invalid
    pub fn add_violation(&mut self, violation: Violation) {
        self.is_valid = false;
        self.violations.push(violation);
    }

    /// Whether this entry is the document-level synthetic entry
    pub fn is_document_level(&self) -> bool {
        self.level == DOCUMENT_LEVEL
    }
}

/// Annotated heading outline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Outline {
    entries: Vec<OutlineEntry>,
}

impl Outline {
    /// Entries: the optional synthetic entry first, then headings in document order
    pub fn entries(&self) -> &[OutlineEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OutlineEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when every entry is valid
    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(|e| e.is_valid)
    }

    /// Total number of violations across entries
    pub fn violation_count(&self) -> usize {
        self.entries.iter().map(|e| e.violations.len()).sum()
    }

    /// Whether the synthetic missing-top-level entry was added
    pub fn is_missing_top_level(&self) -> bool {
        self.entries.first().is_some_and(OutlineEntry::is_document_level)
    }

    pub fn into_entries(self) -> Vec<OutlineEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a OutlineEntry;
    type IntoIter = std::slice::Iter<'a, OutlineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Per-pass rule state
#[derive(Debug, Default)]
struct ValidationState {
    h1_count: usize,
    previous_level: Option<u8>,
}

impl ValidationState {
    /// Apply all per-heading rules to the heading at `index`
    fn check(&mut self, index: usize, level: u8) -> Vec<Violation> {
        let mut violations = Vec::new();

        if level == 1 {
            self.h1_count += 1;
            if self.h1_count > 1 {
                violations.push(Violation::MultipleTopLevel);
            }
        }

        if index == 0 && level > 2 {
            violations.push(Violation::InvalidFirstLevel);
        }

        if let Some(previous) = self.previous_level {
            if u16::from(level) > u16::from(previous) + 1 {
                violations.push(Violation::SkippedLevel { found: level, previous });
            }
        }

        // Invalid headings still anchor the skip check for the next one
        self.previous_level = Some(level);
        violations
    }
}

/// Validates heading sequences, resolving names through a `NameSource`
pub struct OutlineValidator<'a, S: ?Sized> {
    source: &'a S,
}

impl<'a, S> OutlineValidator<'a, S>
where
    S: NameSource + ?Sized,
{
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Annotate `headings` (document order)
    ///
    /// Fails only for an empty sequence.
    pub fn validate(&self, headings: &[HeadingDescriptor<S::Element>]) -> Result<Outline, OutlineError> {
        if headings.is_empty() {
            return Err(OutlineError::NoHeadings);
        }
        tracing::debug!(headings = headings.len(), "Validating heading outline");

        let mut state = ValidationState::default();
        let mut entries = Vec::with_capacity(headings.len() + 1);

        for (index, heading) in headings.iter().enumerate() {
            let text = accessible_name(self.source, heading.element);
            let mut entry = OutlineEntry::heading(heading.level, text);

            for violation in state.check(index, heading.level) {
                entry.add_violation(violation);
            }

            tracing::trace!(index, level = heading.level, valid = entry.is_valid, text = %entry.text, "Checked heading");
            entries.push(entry);
        }

        if state.h1_count == 0 {
            entries.insert(0, OutlineEntry::missing_top_level());
        }

        let outline = Outline { entries };
        tracing::debug!(
            entries = outline.len(),
            violations = outline.violation_count(),
            "Outline validated"
        );
        Ok(outline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(levels: &[u8]) -> Vec<Vec<Violation>> {
        let mut state = ValidationState::default();
        levels.iter()
            .enumerate()
            .map(|(i, &level)| state.check(i, level))
            .collect()
    }

    #[test]
    fn test_linear_outline_is_clean() {
        assert!(run(&[1, 2, 3, 3, 2, 3, 4, 2]).iter().all(Vec::is_empty));
    }

    #[test]
    fn test_second_h1() {
        let result = run(&[2, 1, 2, 1]);
        assert!(result[1].is_empty());
        assert_eq!(result[3], vec![Violation::MultipleTopLevel]);
    }

    #[test]
    fn test_first_heading_level() {
        assert_eq!(run(&[3])[0], vec![Violation::InvalidFirstLevel]);
        assert!(run(&[2])[0].is_empty());
    }

    #[test]
    fn test_skip_uses_previous_even_if_invalid() {
        let result = run(&[1, 3, 5, 6]);
        assert_eq!(result[1], vec![Violation::SkippedLevel { found: 3, previous: 1 }]);
        assert_eq!(result[2], vec![Violation::SkippedLevel { found: 5, previous: 3 }]);
        assert!(result[3].is_empty());
    }

    #[test]
    fn test_going_up_is_allowed() {
        assert!(run(&[2, 3, 4, 2]).iter().all(Vec::is_empty));
        assert_eq!(run(&[1, 2, 3, 4, 1])[4], vec![Violation::MultipleTopLevel]);
    }

    #[test]
    fn test_rules_fire_independently() {
        let result = run(&[4, 6, 1, 1]);
        assert_eq!(result[0], vec![Violation::InvalidFirstLevel]);
        assert_eq!(result[1], vec![Violation::SkippedLevel { found: 6, previous: 4 }]);
        assert!(result[2].is_empty());
        assert_eq!(result[3], vec![Violation::MultipleTopLevel]);
    }

    #[test]
    fn test_out_of_range_levels_do_not_overflow() {
        let result = run(&[255, 255]);
        assert_eq!(result[0], vec![Violation::InvalidFirstLevel]);
        assert!(result[1].is_empty());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Violation::SkippedLevel { found: 3, previous: 1 }.to_string(),
            "Heading level should not skip levels. Found level 3 after level 1."
        );
        let entry = OutlineEntry::missing_top_level();
        assert_eq!(entry.level, 0);
        assert_eq!(entry.text, MISSING_TOP_LEVEL_TEXT);
        assert!(!entry.is_valid);
        assert_eq!(entry.violations, vec![Violation::MissingTopLevel]);
    }
}
