//! Intended purpose: how the model is meant (and not meant) to be used

use std::fmt;

use crate::document::Document;
use crate::sections::{find_section, h2, h3, HeadingSpec};

pub const NAME: &str = "Intended Purpose";

const DIRECT_USE: &[HeadingSpec] = &[h3("Direct Use"), h2("Direct Use")];

const DOWNSTREAM_USE: &[HeadingSpec] = &[h3("Downstream Use [optional]"), h3("Downstream Use")];

const OUT_OF_SCOPE_USE: &[HeadingSpec] = &[h3("Out-of-Scope Use"), h2("Out-of-Scope Use")];

/// Equality compares status only; the extracted use descriptions are
/// informational and their exact wording is not pinned.
#[derive(Debug, Clone, Default)]
pub struct IntendedPurposeResult {
    pub status: bool,
    pub direct_use: Option<String>,
    pub downstream_use: Option<String>,
    pub out_of_scope_use: Option<String>,
}

impl PartialEq for IntendedPurposeResult {
    fn eq(&self, other: &Self) -> bool {
        self.status == other.status
    }
}

impl Eq for IntendedPurposeResult {}

impl fmt::Display for IntendedPurposeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status {
            return write!(
                f,
                "It looks like this model card documents the model's intended purpose! We look \
                 for this by searching for \"Direct Use\" and \"Out-of-Scope Use\" sections."
            );
        }

        write!(
            f,
            "We weren't able to find a section in this model card for the model's intended \
             purpose, but it's easy to add one! Add the following section to the model card and, \
             once you fill in the `[More Information Needed]` parts, the \"{NAME}\" check should pass.\n\n\
             ```md\n\
             ## Uses\n\n\
             <!-- Address questions around how the model is intended to be used, including the foreseeable users of the model and those affected by the model. -->\n\n\
             ### Direct Use\n\n\
             <!-- This section is for the model use without fine-tuning or plugging into a larger ecosystem/app. -->\n\n\
             [More Information Needed]\n\n\
             ### Downstream Use [optional]\n\n\
             <!-- This section is for the model use when fine-tuned for a task, or when plugged into a larger ecosystem/app -->\n\n\
             [More Information Needed]\n\n\
             ### Out-of-Scope Use\n\n\
             <!-- This section addresses misuse, malicious use, and uses that the model will not work well for. -->\n\n\
             [More Information Needed]\n\
             ```"
        )
    }
}

/// Requires both a direct-use and an out-of-scope section with real content
///
/// Downstream use is optional: it is extracted when present but never
/// affects the status.
pub fn check_intended_purpose(doc: &Document) -> IntendedPurposeResult {
    let section_text = |candidates: &[HeadingSpec]| {
        find_section(doc, candidates).map(|(_, content)| content.text())
    };

    let direct_use = section_text(DIRECT_USE);
    let downstream_use = section_text(DOWNSTREAM_USE);
    let out_of_scope_use = section_text(OUT_OF_SCOPE_USE);

    IntendedPurposeResult {
        status: direct_use.is_some() && out_of_scope_use.is_some(),
        direct_use,
        downstream_use,
        out_of_scope_use,
    }
}
