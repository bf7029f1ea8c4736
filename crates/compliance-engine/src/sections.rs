//! Heading lookup and section walking
//!
//! A section starts at a heading and runs over the heading's following
//! siblings until a heading at the same level or one level shallower.
//! Deeper sub-headings are absorbed into the section.

use crate::document::{Document, NodeId};
use crate::patterns::is_placeholder_only;

/// One acceptable (level, text) spelling for a section heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingSpec {
    pub level: u8,
    pub text: &'static str,
}

impl HeadingSpec {
    pub const fn new(level: u8, text: &'static str) -> Self {
        Self { level, text }
    }
}

pub const fn h1(text: &'static str) -> HeadingSpec {
    HeadingSpec::new(1, text)
}

pub const fn h2(text: &'static str) -> HeadingSpec {
    HeadingSpec::new(2, text)
}

pub const fn h3(text: &'static str) -> HeadingSpec {
    HeadingSpec::new(3, text)
}

/// Text collected from a section, comments excluded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionContent {
    fragments: Vec<String>,
}

impl SectionContent {
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn text(&self) -> String {
        self.fragments.join("\n")
    }
}

/// Find the first heading with exactly this level and trimmed text
pub fn find_heading(doc: &Document, level: u8, text: &str) -> Option<NodeId> {
    doc.headings()
        .filter(|&(_, l)| l == level)
        .map(|(id, _)| id)
        .find(|&id| doc.text(id).trim() == text)
}

/// Collect the content of the section opened by `heading`
///
/// Returns `None` when the section is absent: `heading` is not a heading,
/// it has no following siblings, or everything collected is placeholder text.
pub fn walk_section(doc: &Document, heading: NodeId) -> Option<SectionContent> {
    let own_level = doc.heading_level(heading)?;
    let mut siblings = doc.following_siblings(heading).peekable();

    if siblings.peek().is_none() {
        tracing::debug!(heading = %doc.text(heading), "heading has no following content");
        return None;
    }

    let mut fragments = Vec::new();
    for sibling in siblings {
        let kind = doc.kind(sibling);

        if let Some(level) = kind.heading_level() {
            if level == own_level || level + 1 == own_level {
                break;
            }
            // Sub-heading titles are structure, not content
            continue;
        }
        if kind.is_hidden() {
            continue;
        }

        let text = doc.text(sibling);
        let text = text.trim();
        if !text.is_empty() {
            fragments.push(text.to_string());
        }
    }

    if is_placeholder_only(&fragments) {
        return None;
    }
    Some(SectionContent { fragments })
}

/// Try each candidate in order and return the first section with real content
///
/// Candidates whose heading exists but holds only placeholders do not stop
/// the search; later candidates are never consulted once one is present.
pub fn find_section(
    doc: &Document,
    candidates: &[HeadingSpec],
) -> Option<(HeadingSpec, SectionContent)> {
    candidates.iter().find_map(|spec| {
        let heading = find_heading(doc, spec.level, spec.text)?;
        let content = walk_section(doc, heading)?;
        tracing::debug!(level = spec.level, heading = spec.text, "matched section");
        Some((*spec, content))
    })
}
