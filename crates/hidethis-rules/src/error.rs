//! Error types for rule construction.
//!
//! Evaluation itself never fails; these errors surface only from the typed
//! constructors and are turned into a "no match" by the evaluators.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// A user predicate key other than `userid`, `username` or `useremail`.
    #[error("Unknown user key: {0}")]
    UnknownUserKey(String),
}
