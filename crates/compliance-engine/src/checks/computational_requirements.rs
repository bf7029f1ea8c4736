//! Computational requirements: hardware and software needed to run the model

use std::fmt;

use crate::document::Document;
use crate::sections::{find_section, h2, h3, HeadingSpec};

pub const NAME: &str = "Computational Requirements";

const CANDIDATES: &[HeadingSpec] = &[
    h2("Technical Specifications"),
    h2("Technical Specifications [optional]"),
    h3("Compute Infrastructure"),
    h3("Compute infrastructure"),
];

/// Equality compares status only
#[derive(Debug, Clone, Default)]
pub struct ComputationalRequirementsResult {
    pub status: bool,
    pub requirements: Option<String>,
}

impl PartialEq for ComputationalRequirementsResult {
    fn eq(&self, other: &Self) -> bool {
        self.status == other.status
    }
}

impl Eq for ComputationalRequirementsResult {}

impl fmt::Display for ComputationalRequirementsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status {
            return write!(
                f,
                "In order for users to know what kind of hardware and software they need to run a \
                 model, a model card should have information about the model's computational \
                 requirements. We found some documentation for this in this model card. We look \
                 for this by searching for a heading called \"Technical Specifications\"."
            );
        }

        write!(
            f,
            "We weren't able to find a section in this model card for the model's computational \
             requirements, but it's easy to add one! Add the following section to the model card \
             and, once you fill in the `[More Information Needed]` parts, the \"{NAME}\" check \
             should pass.\n\n\
             ```md\n\
             ## Technical Specifications [optional]\n\n\
             ### Compute Infrastructure\n\n\
             [More Information Needed]\n\n\
             #### Hardware\n\n\
             [More Information Needed]\n\n\
             #### Software\n\n\
             [More Information Needed]\n\
             ```"
        )
    }
}

pub fn check_computational_requirements(doc: &Document) -> ComputationalRequirementsResult {
    match find_section(doc, CANDIDATES) {
        Some((_, content)) => ComputationalRequirementsResult {
            status: true,
            requirements: Some(content.text()),
        },
        None => ComputationalRequirementsResult::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse;

    const EMPTY_TEMPLATE: &str = "\
## Technical Specifications [optional]

### Compute Infrastructure

[More Information Needed]

#### Hardware

[More Information Needed]

#### Software

[More Information Needed]
";

    const FILLED_CARD: &str = "\
# Model Card for Sample Model

## Technical Specifications

### Compute infrastructure
Jean Zay Public Supercomputer, provided by the French government.

#### Hardware

* 384 A100 80GB GPUs (48 nodes)

#### Software

* Megatron-DeepSpeed ([Github link](https://github.com/bigscience-workshop/Megatron-DeepSpeed))
</details>
";

    #[test]
    fn test_filled_card_passes() {
        let result = check_computational_requirements(&parse(FILLED_CARD));
        assert!(result.status);

        let requirements = result.requirements.unwrap();
        assert!(requirements.contains("A100 80GB GPUs"));
        assert!(requirements.contains("Jean Zay Public Supercomputer"));
        assert!(requirements.contains("Megatron-DeepSpeed"));
        assert!(!requirements.contains("</details>"));
    }

    #[test]
    fn test_empty_template_fails() {
        let result = check_computational_requirements(&parse(EMPTY_TEMPLATE));
        assert_eq!(result, ComputationalRequirementsResult::default());
        assert_eq!(result.requirements, None);
    }

    #[test]
    fn test_compute_infrastructure_without_parent_heading() {
        let card = "### Compute Infrastructure\n\nTrained on 8 TPU v3 pods.\n";
        assert!(check_computational_requirements(&parse(card)).status);
    }

    #[test]
    fn test_equality_ignores_requirements() {
        let a = ComputationalRequirementsResult {
            status: true,
            requirements: Some("GPUs".to_string()),
        };
        let b = ComputationalRequirementsResult {
            status: true,
            requirements: None,
        };
        assert_eq!(a, b);
    }
}
