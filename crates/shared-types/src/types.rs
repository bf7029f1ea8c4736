/// A model card as supplied by an external collaborator (paste, upload, hub lookup).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ModelCard {
    pub id: String, // e.g. "openai/clip-vit-base-patch32" or a file name
    pub markdown: String,
}

impl ModelCard {
    pub fn new(id: impl Into<String>, markdown: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            markdown: markdown.into(),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ComplianceReport {
    pub card_id: String,
    pub outcomes: Vec<CheckOutcome>,
    pub checked_at: u64,
}

impl ComplianceReport {
    /// True when every configured check found its section.
    pub fn is_compliant(&self) -> bool {
        self.outcomes.iter().all(|o| o.status)
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.status).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }
}

/// Flattened, serializable view of one check's result
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CheckOutcome {
    pub name: String, // Stable display name, e.g. "Intended Purpose"
    pub status: bool,
    pub details: String, // Human-readable explanation or fix-it template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted: Option<String>,
}
