//! Placeholder text emitted by model card templates for unfilled sections

use lazy_static::lazy_static;
use std::collections::HashSet;

/// Placeholder used by the Hugging Face model card template
pub const MORE_INFORMATION_NEEDED: &str = "[More Information Needed]";

/// Boilerplate the template puts under "Recommendations"
pub const RECOMMENDATIONS_BOILERPLATE: &str = "Users (both direct and downstream) should be made \
aware of the risks, biases and limitations of the model. More information needed for further \
recommendations.";

/// Every literal that marks a section as unfilled
pub const PLACEHOLDER_TEXT: &[&str] = &[
    MORE_INFORMATION_NEEDED,
    "More information needed.",
    "More information needed",
    RECOMMENDATIONS_BOILERPLATE,
];

lazy_static! {
    static ref PLACEHOLDER_SET: HashSet<&'static str> = PLACEHOLDER_TEXT.iter().copied().collect();
}

/// Check whether a single fragment is a placeholder once trimmed
pub fn is_placeholder(text: &str) -> bool {
    PLACEHOLDER_SET.contains(text.trim())
}

/// Check whether collected section content holds nothing but placeholders
///
/// Strict membership: a single fragment outside the placeholder set, even
/// one word, means the section has real content. No fragments at all is
/// treated the same as placeholder-only content.
pub fn is_placeholder_only<S: AsRef<str>>(fragments: &[S]) -> bool {
    fragments.iter().all(|f| is_placeholder(f.as_ref()))
}
