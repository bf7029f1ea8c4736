pub mod types;

pub use types::{CheckOutcome, ComplianceReport, ModelCard};
