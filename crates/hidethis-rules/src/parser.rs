//! Rule grammar parsing.
//!
//! A rule spec is a comma-separated list of tokens. Each token is split on its
//! first `:` into a role segment and a capability segment:
//!
//! - `editor`, `editor:edit_posts`, `:edit_posts`, each segment optionally `!`-prefixed
//! - `userid:42`, `username:alice`, `useremail:alice@example.com`, value optionally `!`-prefixed
//!
//! Parsing never fails. A token without `:` has an empty capability.

use crate::error::RuleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marker that inverts the expected outcome of a rule segment.
pub const NEGATION_MARKER: char = '!';

/// Identity field a user predicate compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserKey {
    Id,
    Name,
    Email,
}

impl UserKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserKey::Id => "userid",
            UserKey::Name => "username",
            UserKey::Email => "useremail",
        }
    }
}

impl FromStr for UserKey {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "userid" => Ok(UserKey::Id),
            "username" => Ok(UserKey::Name),
            "useremail" => Ok(UserKey::Email),
            other => Err(RuleError::UnknownUserKey(other.to_string())),
        }
    }
}

impl fmt::Display for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which evaluation path a predicate takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateKind {
    /// `role` is a user key; `capability` holds the value to compare.
    User(UserKey),
    /// Generic role and/or capability test.
    RoleCapability,
}

/// Structured form of one rule token. Empty segments mean "not specified".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Predicate {
    pub role: String,
    pub capability: String,
}

impl Predicate {
    pub fn new(role: impl Into<String>, capability: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            capability: capability.into(),
        }
    }

    /// Parse a single token, splitting on the first `:`.
    pub fn parse(token: &str) -> Self {
        match token.split_once(':') {
            Some((role, capability)) => Self::new(role, capability),
            None => Self::new(token, ""),
        }
    }

    /// The raw role decides the variant; a negated `!userid` is a role test.
    pub fn kind(&self) -> PredicateKind {
        match self.role.parse::<UserKey>() {
            Ok(key) => PredicateKind::User(key),
            Err(_) => PredicateKind::RoleCapability,
        }
    }

    /// True when neither segment is specified. Such a predicate never matches.
    pub fn is_empty(&self) -> bool {
        self.role.is_empty() && self.capability.is_empty()
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.capability.is_empty() {
            f.write_str(&self.role)
        } else {
            write!(f, "{}:{}", self.role, self.capability)
        }
    }
}

/// Split a comma-separated attribute value into trimmed elements.
pub fn parse_attr_list(spec: &str) -> Vec<String> {
    if spec.is_empty() {
        return Vec::new();
    }
    spec.split(',').map(|s| s.trim().to_string()).collect()
}

/// Turn rule tokens into predicates, preserving order.
pub fn parse_predicates<S: AsRef<str>>(tokens: &[S]) -> Vec<Predicate> {
    tokens.iter().map(|t| Predicate::parse(t.as_ref())).collect()
}

/// `parse_predicates(parse_attr_list(spec))`.
pub fn parse_rule_spec(spec: &str) -> Vec<Predicate> {
    parse_predicates(&parse_attr_list(spec))
}

pub fn is_negative(segment: &str) -> bool {
    segment.starts_with(NEGATION_MARKER)
}

/// The segment with every negation marker removed.
pub fn real_name(segment: &str) -> String {
    segment.replace(NEGATION_MARKER, "")
}

pub fn expected_value(segment: &str) -> bool {
    !is_negative(segment)
}
