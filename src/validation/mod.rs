pub mod schema;
pub mod rules;

pub use rules::{validate_report, Issue, IssueLevel, ValidationReport};
