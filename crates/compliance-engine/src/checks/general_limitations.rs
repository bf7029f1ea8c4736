//! General limitations: bias, risks and known failure modes

use std::fmt;

use crate::document::Document;
use crate::sections::{find_section, h1, h2, h3, HeadingSpec};

pub const NAME: &str = "General Limitations";

/// Every heading spelling seen across published model cards, most common first
const CANDIDATES: &[HeadingSpec] = &[
    h1("Bias, Risks, and Limitations"),
    h2("Bias, Risks, and Limitations"),
    h2("Intended uses & limitations"),
    h1("Risks and Limitations"),
    h2("Risks and Limitations"),
    h2("Risks, Limitations and Biases"),
    h2("Limitations and Bias"),
    h3("Limitations and bias"),
    h1("Limitations"),
    h2("Limitations"),
];

/// Equality covers status and the extracted limitations text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneralLimitationsResult {
    pub status: bool,
    pub limitations: Option<String>,
}

impl fmt::Display for GeneralLimitationsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status {
            return write!(
                f,
                "It's important for model cards to document the model's general limitations! We \
                 found some documentation for this in this model card. We look for this by \
                 searching for headings that say things like:\n\
                 - Bias, Risks, and Limitations\n\
                 - Intended uses & limitations\n\
                 - Limitations"
            );
        }

        write!(
            f,
            "We weren't able to find a section in this model card for the model's limitations, \
             but it's easy to add one! Add the following section to the model card and, once you \
             fill in the `[More Information Needed]` parts, the \"{NAME}\" check should pass.\n\n\
             ```md\n\
             ## Bias, Risks, and Limitations\n\n\
             <!-- This section is meant to convey both technical and sociotechnical limitations. -->\n\n\
             [More Information Needed]\n\n\
             ### Recommendations\n\n\
             <!-- This section is meant to convey recommendations with respect to the bias, risk, and technical limitations. -->\n\n\
             Users (both direct and downstream) should be made aware of the risks, biases and limitations of the model. More information needed for further recommendations.\n\
             ```"
        )
    }
}

pub fn check_general_limitations(doc: &Document) -> GeneralLimitationsResult {
    match find_section(doc, CANDIDATES) {
        Some((_, content)) => GeneralLimitationsResult {
            status: true,
            limitations: Some(content.text()),
        },
        None => GeneralLimitationsResult::default(),
    }
}
