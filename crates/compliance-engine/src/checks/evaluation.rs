//! Evaluation and metrics: how the model was tested and what it scored

use std::fmt;

use crate::document::Document;
use crate::sections::{find_section, h1, h2, HeadingSpec};

pub const NAME: &str = "Evaluation and Metrics";

const CANDIDATES: &[HeadingSpec] = &[
    h1("Evaluation"),
    h2("Evaluation"),
    h2("Evaluation results"),
    h2("Evaluation Results"),
    h2("Benchmarks"),
    h2("Results"),
];

/// Equality compares status only
#[derive(Debug, Clone, Default)]
pub struct EvaluationResult {
    pub status: bool,
    pub evaluation: Option<String>,
}

impl PartialEq for EvaluationResult {
    fn eq(&self, other: &Self) -> bool {
        self.status == other.status
    }
}

impl Eq for EvaluationResult {}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status {
            return write!(
                f,
                "It looks like this model card has some documentation for how the model was \
                 evaluated! We look for this by searching for headings that say things like:\n\
                 - Evaluation\n\
                 - Evaluation results\n\
                 - Benchmarks\n\
                 - Results"
            );
        }

        write!(
            f,
            "We weren't able to find a section in this model card that reports the evaluation \
             process, but it's easy to add one! Add the following section to the model card and, \
             once you fill in the `[More Information Needed]` parts, the \"{NAME}\" check should \
             pass.\n\n\
             ```md\n\
             ## Evaluation\n\n\
             <!-- This section describes the evaluation protocols and provides the results. -->\n\n\
             ### Testing Data, Factors & Metrics\n\n\
             #### Testing Data\n\n\
             [More Information Needed]\n\n\
             #### Factors\n\n\
             [More Information Needed]\n\n\
             #### Metrics\n\n\
             [More Information Needed]\n\n\
             ### Results\n\n\
             [More Information Needed]\n\n\
             #### Summary\n\n\
             [More Information Needed]\n\
             ```"
        )
    }
}

pub fn check_evaluation(doc: &Document) -> EvaluationResult {
    match find_section(doc, CANDIDATES) {
        Some((_, content)) => EvaluationResult {
            status: true,
            evaluation: Some(content.text()),
        },
        None => EvaluationResult::default(),
    }
}
