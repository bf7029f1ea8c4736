//! Model provider identity: who developed the model
//!
//! Unlike the section checks this one is not heading based. It looks for the
//! bolded `Developed by:` label the model card template puts in its
//! description list.

use std::fmt;

use crate::document::{Document, NodeKind};
use crate::patterns::MORE_INFORMATION_NEEDED;

pub const NAME: &str = "Model Provider Identity";

const DEVELOPED_BY_LABEL: &str = "Developed by:";

/// Equality covers status and the extracted provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelProviderIdentityResult {
    pub status: bool,
    pub provider: Option<String>,
}

impl ModelProviderIdentityResult {
    pub fn found(provider: impl Into<String>) -> Self {
        Self {
            status: true,
            provider: Some(provider.into()),
        }
    }
}

impl fmt::Display for ModelProviderIdentityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.provider, self.status) {
            (Some(provider), true) => write!(
                f,
                "This model card names the model's provider: {provider}. We look for this \
                 in the \"Developed by:\" entry of the model description."
            ),
            _ => write!(
                f,
                "We weren't able to find who developed this model. Add a line like the \
                 following to the model description and the \"{NAME}\" check should pass:\n\n\
                 ```md\n- **Developed by:** Your name or organization\n```"
            ),
        }
    }
}

/// Extract the provider named after the first bold `Developed by:` label
///
/// The provider is everything following the label inside the same paragraph
/// or list item, up to the first line break or nested block.
pub fn check_model_provider_identity(doc: &Document) -> ModelProviderIdentityResult {
    let Some(label) = doc
        .descendants(doc.root())
        .filter(|&id| doc.kind(id) == NodeKind::Strong)
        .find(|&id| doc.text(id).trim() == DEVELOPED_BY_LABEL)
    else {
        return ModelProviderIdentityResult::default();
    };

    let provider: String = doc
        .following_siblings(label)
        .take_while(|&id| {
            let kind = doc.kind(id);
            kind != NodeKind::LineBreak && !kind.is_block()
        })
        .map(|id| doc.text(id))
        .collect();
    let provider = provider.trim();

    if provider.is_empty() || provider == MORE_INFORMATION_NEEDED {
        return ModelProviderIdentityResult::default();
    }

    ModelProviderIdentityResult::found(provider)
}
